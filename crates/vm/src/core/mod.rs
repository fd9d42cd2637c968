/// Fixed parameters of the 15-bit architecture
pub mod constants;

/// Core-dump diagnostics emitted on halt and fatal errors
pub mod diagnostics;

/// The character console backing the `in` and `out` opcodes
pub mod io;

/// The flat word-addressed memory
pub mod memory;

/// Opcode definitions and the instruction table
pub mod opcodes;

/// Program image decoding
pub mod program;

/// The register bank and operand addressing rules
pub mod register;

/// The machine stack shared by push/pop and call/ret
pub mod stack;

/// The machine itself and its fetch-decode-execute loop
pub mod vm;
