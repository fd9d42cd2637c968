use crate::{core::vm::VM, error::Error};

/// `set`: stores the resolved source value in the destination register.
pub fn set(vm: &mut VM, dest: u16, value: u16) -> Result<(), Error> {
    let value = vm.registers.resolve(value)?;
    vm.registers.store(dest, value)
}

/// `rmem`: reads the memory word at the resolved address into the
/// destination register.
pub fn rmem(vm: &mut VM, dest: u16, address: u16) -> Result<(), Error> {
    let address = vm.registers.resolve(address)?;
    let value = vm.memory.read(address);
    vm.registers.store(dest, value)
}

/// `wmem`: writes the resolved value to the resolved memory address.
pub fn wmem(vm: &mut VM, address: u16, value: u16) -> Result<(), Error> {
    let address = vm.registers.resolve(address)?;
    let value = vm.registers.resolve(value)?;
    vm.memory.write(address, value);
    Ok(())
}
