//! Virtual machine implementation of the Synacor challenge architecture
//!
//! This crate provides the machine core for the synacore toolkit: a flat
//! 32768-word memory, eight registers, an unbounded stack, a closed
//! 22-opcode instruction set, and a line-buffered character console.

/// Core machine implementation, including memory, registers, stack, opcodes,
/// console I/O, and diagnostics
pub mod core;

/// Error types for the machine
pub mod error;
