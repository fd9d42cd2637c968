//! The Solver module computes answers to the challenge's standalone
//! puzzles without running the program image.

/// Error types for the solver module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{coin, orb, solve, teleporter};
pub use error::Error;
pub use interfaces::{Puzzle, SolveArgs, SolveArgsBuilder};
