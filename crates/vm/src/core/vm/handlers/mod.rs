//! Opcode handlers organized by category.

/// Arithmetic, comparison, and bitwise handlers (`eq`, `gt`, `add`, `mul`,
/// `mod`, `and`, `or`, `not`)
pub mod arithmetic;

/// Control flow handlers (`halt`, `jmp`, `jt`, `jf`, `call`, `ret`, `noop`)
pub mod control;

/// Register and memory data movement handlers (`set`, `rmem`, `wmem`)
pub mod data;

/// Console handlers (`out`, `in`)
pub mod io;

/// Stack handlers (`push`, `pop`)
pub mod stack;
