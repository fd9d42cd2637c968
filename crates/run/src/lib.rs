//! The Runner module loads a binary program image into a fresh virtual
//! machine and executes it to completion.

/// Error types for the runner module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::run;
pub use error::Error;
pub use interfaces::{RunArgs, RunArgsBuilder};
