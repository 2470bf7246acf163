//! Command-line caller for the algokit algorithms.
//!
//! Parses a [`cli::Cli`], resolves the policy configuration, and runs the
//! chosen command through a [`runner::Runner`], producing printable
//! [`report::Report`]s.

pub mod cli;
pub mod report;
pub mod runner;

pub use cli::{Cli, Command};
pub use report::Report;
pub use runner::Runner;
