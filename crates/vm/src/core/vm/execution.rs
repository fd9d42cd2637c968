use crate::core::diagnostics::CoreDump;

/// Why a run stopped on the non-error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// The `halt` opcode was executed.
    Halt,
    /// `ret` found the call stack empty.
    EmptyCallStack,
}

/// One decoded instruction, as consumed by a single machine step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Address the opcode word was fetched from.
    pub address: u16,
    /// The opcode word.
    pub opcode: u16,
    /// The raw operand words, in fetch order.
    pub operands: Vec<u16>,
}

/// Final state of a run that terminated without a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Why the run ended.
    pub halt: HaltReason,
    /// Number of instructions executed.
    pub cycles: u64,
    /// Diagnostic snapshot taken at termination.
    pub dump: CoreDump,
}
