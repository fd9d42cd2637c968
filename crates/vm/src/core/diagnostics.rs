use std::fmt;

use colored::Colorize;

use crate::core::constants::REGISTER_COUNT;

/// Diagnostic snapshot of the machine's visible state, taken on halt and
/// on every fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreDump {
    /// Program counter at the time of the dump.
    pub pc: u16,
    /// Contents of the eight registers, in index order.
    pub registers: [u16; REGISTER_COUNT],
}

impl CoreDump {
    /// Renders the dump to the diagnostic channel. Diagnostics go to
    /// stderr so the machine's own output channel stays clean.
    pub fn display(&self) {
        eprintln!("{}", "core dump".bold());
        eprintln!("  {} {}", "pc:".dimmed(), self.pc);
        for (index, value) in self.registers.iter().enumerate() {
            eprintln!("  {} {}", format!("${index}:").dimmed(), value);
        }
    }
}

impl fmt::Display for CoreDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pc={}", self.pc)?;
        for (index, value) in self.registers.iter().enumerate() {
            write!(f, " ${index}={value}")?;
        }
        Ok(())
    }
}
