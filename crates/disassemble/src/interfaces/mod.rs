mod args;

// re-export items in module
pub use args::*;
