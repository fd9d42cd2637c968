use crate::{
    core::vm::{HaltReason, VM},
    error::Error,
};

/// `halt`: stops the run on the normal termination path.
pub fn halt(vm: &mut VM) -> Result<(), Error> {
    vm.halted = Some(HaltReason::Halt);
    Ok(())
}

/// `jmp`: unconditional transfer to the resolved target.
pub fn jmp(vm: &mut VM, target: u16) -> Result<(), Error> {
    vm.pc = vm.registers.resolve(target)?;
    Ok(())
}

/// `jt`: transfers to the resolved target when the condition is nonzero.
pub fn jt(vm: &mut VM, condition: u16, target: u16) -> Result<(), Error> {
    if vm.registers.resolve(condition)? != 0 {
        vm.pc = vm.registers.resolve(target)?;
    }
    Ok(())
}

/// `jf`: transfers to the resolved target when the condition is zero.
pub fn jf(vm: &mut VM, condition: u16, target: u16) -> Result<(), Error> {
    if vm.registers.resolve(condition)? == 0 {
        vm.pc = vm.registers.resolve(target)?;
    }
    Ok(())
}

/// `call`: pushes the address of the following instruction, then transfers
/// to the resolved target. The return address is taken after the operand
/// has been consumed.
pub fn call(vm: &mut VM, target: u16) -> Result<(), Error> {
    let target = vm.registers.resolve(target)?;
    vm.stack.push(vm.pc);
    vm.pc = target;
    Ok(())
}

/// `ret`: pops the return address, or halts when the stack is empty.
pub fn ret(vm: &mut VM) -> Result<(), Error> {
    if vm.stack.is_empty() {
        vm.halted = Some(HaltReason::EmptyCallStack);
        return Ok(());
    }

    vm.pc = vm.stack.pop()?;
    Ok(())
}

/// `noop`: no effect.
pub fn noop(_vm: &mut VM) -> Result<(), Error> {
    Ok(())
}
