/// Generic error type for the Solver module
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The puzzle has no answer under its constraints
    #[error("Solver error: {0}")]
    NoSolution(String),

    /// Generic error
    #[error("Internal error: {0}")]
    Eyre(#[from] eyre::Report),
}
