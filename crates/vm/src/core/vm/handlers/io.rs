use crate::{core::vm::VM, error::Error};

/// `out`: emits the resolved operand as one character on the output
/// channel.
pub fn out(vm: &mut VM, value: u16) -> Result<(), Error> {
    let value = vm.registers.resolve(value)?;
    vm.console.put_char(value)
}

/// `in`: reads one character from the console into the destination
/// register. Blocks on a fresh input line when the pending buffer is
/// empty.
pub fn input(vm: &mut VM, dest: u16) -> Result<(), Error> {
    let value = vm.console.read_char()?;
    vm.registers.store(dest, value)
}
