//! Error types for the virtual machine

/// Errors raised while decoding a program image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The image could not be opened or read
    #[error("unable to read program image: {0}")]
    Io(#[from] std::io::Error),

    /// The image ends on a half word and cannot be a word stream
    #[error("malformed program image: odd byte count {0}")]
    OddByteCount(usize),

    /// The image holds more words than the address space
    #[error("program image of {0} words exceeds the address space")]
    TooLarge(usize),
}

/// Errors raised while the machine is executing. None of these are
/// recoverable; each one terminates the current run after the diagnostic
/// dump has been emitted.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A program image could not be loaded
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// An operand resolved outside the literal and register ranges
    #[error("invalid address: {0}")]
    InvalidAddress(u16),

    /// A store targeted an address outside the eight registers
    #[error("invalid register: {0}")]
    InvalidRegister(u16),

    /// A pop was attempted on an empty stack
    #[error("stack underflow")]
    StackUnderflow,

    /// A fetched opcode is not part of the instruction set
    #[error("unknown opcode: {0}")]
    UnknownOpcode(u16),

    /// The console input or output channel failed
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}
