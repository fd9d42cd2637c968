use crate::{core::vm::VM, error::Error};

/// `push`: pushes the resolved operand onto the stack.
pub fn push(vm: &mut VM, value: u16) -> Result<(), Error> {
    let value = vm.registers.resolve(value)?;
    vm.stack.push(value);
    Ok(())
}

/// `pop`: pops the top word into the destination register. An empty stack
/// is fatal.
pub fn pop(vm: &mut VM, dest: u16) -> Result<(), Error> {
    let value = vm.stack.pop()?;
    vm.registers.store(dest, value)
}
