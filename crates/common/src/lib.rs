//! Common utilities and resources used across the synacore codebase.

/// General utility functions and types for common tasks.
pub mod utils;
