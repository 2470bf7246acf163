//! Command-line surface.

use std::path::PathBuf;

use algokit::{AlgoConfig, CaseSensitivity, ConfigError, PairPolicy};
use clap::{Parser, Subcommand};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// TOML file with `case_sensitivity` / `pair_policy` (overrides ALGOKIT_* variables)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fold case in counting, palindrome, anagram and first-unique commands
    #[arg(long, global = true, default_value_t = false)]
    pub case_insensitive: bool,

    /// Pair-sum reporting: `occurrence` or `unordered`
    #[arg(long, global = true)]
    pub pair_policy: Option<PairPolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run every algorithm on the classic sample inputs
    Showcase,
    /// Reverse a string
    Reverse { text: String },
    /// Reverse a list of integers
    ReverseInts {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Values occurring more than once
    Duplicates {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Pairs of values summing to a target
    PairSum {
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Minimum swaps to separate 0s from 1s
    MinSwaps {
        #[arg(allow_negative_numbers = true)]
        bits: Vec<i64>,
        /// Use the two-pointer walk instead of counting
        #[arg(long, default_value_t = false)]
        two_pointer: bool,
    },
    /// Separate 0s from 1s with the minimum swaps
    Partition {
        #[arg(allow_negative_numbers = true)]
        bits: Vec<i64>,
    },
    /// N-th Fibonacci number
    Fib {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// First TERMS Fibonacci numbers
    FibSeq { terms: usize },
    /// Alphanumeric character counts
    CharCount { text: String },
    /// Palindrome check
    Palindrome { text: String },
    /// Remove repeated characters
    Dedupe { text: String },
    /// First character occurring exactly once
    FirstUnique { text: String },
    /// Anagram check
    Anagram { first: String, second: String },
    /// Run-length compress
    Compress { text: String },
    /// Expand run-length text
    Decompress { text: String },
}

impl Cli {
    /// Resolve the effective policy configuration.
    ///
    /// Order: built-in defaults, environment, `--config` file, then flags.
    pub fn resolve_config(&self) -> Result<AlgoConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AlgoConfig::load(path)?,
            None => AlgoConfig::default(),
        };
        if self.case_insensitive {
            config.case_sensitivity = CaseSensitivity::Insensitive;
        }
        if let Some(policy) = self.pair_policy {
            config.pair_policy = policy;
        }
        Ok(config)
    }
}
