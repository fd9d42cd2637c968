//! The Core module serves as the central integration point for all of
//! Synacore's functionality, providing access to the virtual machine, the
//! disassembler, and the standalone puzzle solvers.
//!
//! This module re-exports the public interfaces of all the tool-specific
//! crates, making it easier to use Synacore's capabilities in other projects.

/// Error types for the core module
pub mod error;

// Re-export all tool-specific modules
pub use synacore_disassembler;
pub use synacore_runner;
pub use synacore_solvers;
pub use synacore_vm;
