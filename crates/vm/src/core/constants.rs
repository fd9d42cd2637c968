//! Fixed parameters of the 15-bit virtual architecture.

/// Number of addressable memory words.
pub const ADDRESS_SPACE: usize = 32768;

/// Modulus applied to every arithmetic result before storage.
pub const MODULUS: u16 = 32768;

/// Mask selecting the low 15 bits of a word.
pub const WORD_MASK: u16 = 0x7fff;

/// Number of general purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Lowest raw operand value denoting a register reference.
pub const REGISTER_BASE: u16 = 32768;

/// Highest raw operand value denoting a register reference.
pub const REGISTER_LAST: u16 = 32775;
