//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod init;
mod output;
mod tables;

pub use generate::{GenerateReport, GenerationOutcome};
pub use init::InitReport;
#[cfg(test)]
pub use output::StringOutput;
pub use output::{Report, TerminalOutput};
pub use tables::{TableEntry, TablesReport};
