/// Generic error type for the Runner module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target program image could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] synacore_vm::error::LoadError),

    /// The virtual machine stopped on a fault
    #[error("Execution error: {0}")]
    Execution(#[from] synacore_vm::error::Error),

    /// IO error while wiring up the input channels
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
