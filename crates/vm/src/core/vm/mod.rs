//! The machine and its fetch-decode-execute loop, organized into
//! submodules.

mod core;
mod execution;

/// Opcode handlers organized by category.
pub mod handlers;

pub use self::core::VM;
pub use execution::{ExecutionResult, HaltReason, Instruction};
