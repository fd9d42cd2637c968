use clap::{Parser, ValueEnum};
use derive_builder::Builder;

/// A puzzle with a standalone solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Puzzle {
    /// Order the five coins to satisfy the monument equation
    Coins,
    /// Carry the orb to the vault door at the right weight
    Orb,
    /// Find the eighth register setting the teleporter accepts
    Teleporter,
}

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Solve one of the challenge puzzles directly",
    override_usage = "synacore solve <PUZZLE>"
)]
pub struct SolveArgs {
    /// The puzzle to solve.
    #[clap(value_enum, required = true)]
    pub puzzle: Puzzle,
}

impl SolveArgsBuilder {
    /// Create a new builder for [`SolveArgs`]
    pub fn new() -> Self {
        Self { puzzle: None }
    }
}
