#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Run error: {0}")]
    RunError(#[from] synacore_core::synacore_runner::Error),
    #[error("Disassemble error: {0}")]
    DisassembleError(#[from] synacore_core::synacore_disassembler::Error),
    #[error("Solve error: {0}")]
    SolveError(#[from] synacore_core::synacore_solvers::Error),
}
