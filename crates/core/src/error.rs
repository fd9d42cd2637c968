/// Error type for the Core module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the virtual machine
    #[error("VM error: {0}")]
    Vm(#[from] synacore_vm::error::Error),
    /// Error from the runner module
    #[error("Runner error: {0}")]
    Runner(#[from] synacore_runner::Error),
    /// Error from the disassembler module
    #[error("Disassembler error: {0}")]
    Disassembler(#[from] synacore_disassembler::Error),
    /// Error from the solver module
    #[error("Solver error: {0}")]
    Solver(#[from] synacore_solvers::Error),
    /// Generic error with a message
    #[error("Error: {0}")]
    Generic(String),
    /// Error when parsing data
    #[error("Parse error: {0}")]
    ParseError(String),
}
