/// Generic error type for the Disassembler module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target program image could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] synacore_vm::error::LoadError),

    /// Generic error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
