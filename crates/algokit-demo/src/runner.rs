//! Dispatch from parsed commands to the library.

use algokit::arrays::{self, SwapStrategy};
use algokit::{strings, AlgoConfig, FibonacciCache};
use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Command;
use crate::report::Report;

/// Executes commands against one configuration and one Fibonacci cache.
pub struct Runner {
    config: AlgoConfig,
    fib: FibonacciCache,
}

impl Runner {
    pub fn new(config: AlgoConfig) -> Self {
        Self {
            config,
            fib: FibonacciCache::new(),
        }
    }

    /// Run one command, returning one report per result line.
    pub fn run(&mut self, command: &Command) -> Result<Vec<Report>> {
        debug!(?command, "Running command");
        let case = self.config.case_sensitivity;

        let report = match command {
            Command::Showcase => return self.showcase(),
            Command::Reverse { text } => Report::new("reverse", text, strings::reverse(text)),
            Command::ReverseInts { values } => {
                Report::new("reverse-ints", values, arrays::reversed(values))
            }
            Command::Duplicates { values } => {
                Report::new("duplicates", values, arrays::find_duplicates(values))
            }
            Command::PairSum { target, values } => Report::new(
                "pair-sum",
                (values, target),
                arrays::find_pairs_with(values, *target, self.config.pair_policy),
            ),
            Command::MinSwaps { bits, two_pointer } => {
                let strategy = if *two_pointer {
                    SwapStrategy::TwoPointer
                } else {
                    SwapStrategy::Counting
                };
                let swaps = arrays::min_swaps_with(bits, strategy)
                    .context("min-swaps needs a sequence of 0s and 1s")?;
                Report::new("min-swaps", bits, swaps)
            }
            Command::Partition { bits } => {
                let result =
                    arrays::partition(bits).context("partition needs a sequence of 0s and 1s")?;
                Report::new("partition", bits, result)
            }
            Command::Fib { n } => {
                let value = self
                    .fib
                    .compute_nth_term(*n)
                    .with_context(|| format!("cannot compute Fibonacci term {n}"))?;
                Report::new("fib", n, value)
            }
            Command::FibSeq { terms } => {
                let seq = algokit::fibonacci_sequence(*terms)
                    .with_context(|| format!("cannot list {terms} Fibonacci terms"))?;
                Report::new("fib-seq", terms, seq)
            }
            Command::CharCount { text } => {
                let counts: Vec<(char, usize)> = strings::char_count_with(text, case)
                    .iter()
                    .map(|(c, n)| (*c, n))
                    .collect();
                Report::new("char-count", text, counts)
            }
            Command::Palindrome { text } => {
                Report::new("palindrome", text, strings::is_palindrome_with(text, case))
            }
            Command::Dedupe { text } => {
                Report::new("dedupe", text, strings::remove_duplicates(text))
            }
            Command::FirstUnique { text } => Report::new(
                "first-unique",
                text,
                strings::first_non_repeating_with(text, case),
            ),
            Command::Anagram { first, second } => Report::new(
                "anagram",
                (first, second),
                strings::is_anagram_with(first, second, case),
            ),
            Command::Compress { text } => Report::new("compress", text, strings::compress(text)),
            Command::Decompress { text } => {
                let expanded = strings::decompress(text).context("invalid run-length text")?;
                Report::new("decompress", text, expanded)
            }
        };
        Ok(vec![report])
    }

    /// The classic sample inputs, one report each.
    pub fn showcase(&mut self) -> Result<Vec<Report>> {
        let samples = [
            Command::ReverseInts {
                values: vec![1, 2, 3, 4, 5, 6],
            },
            Command::Duplicates {
                values: vec![1, 1, 2, 2, 3, 4, 5, 6, 5, 2, 9, 6],
            },
            Command::PairSum {
                target: 5,
                values: vec![1, 2, 3, 4, 5],
            },
            Command::MinSwaps {
                bits: vec![0, 1, 0, 1, 0],
                two_pointer: false,
            },
            Command::MinSwaps {
                bits: vec![0, 1, 0, 1, 0],
                two_pointer: true,
            },
            Command::Partition {
                bits: vec![0, 1, 0, 1, 0],
            },
            Command::FibSeq { terms: 10 },
            Command::Fib { n: 10 },
            Command::Reverse {
                text: "I'm input string".into(),
            },
            Command::CharCount {
                text: "gnirts tupni m'I".into(),
            },
            Command::Palindrome {
                text: "madam".into(),
            },
            Command::Palindrome {
                text: "tomato".into(),
            },
            Command::Dedupe {
                text: "iiaammmdddupppliccccattteiiimmmaa".into(),
            },
            Command::FirstUnique {
                text: "firstNonRepeatingCharfs".into(),
            },
            Command::Anagram {
                first: "silent".into(),
                second: "listen".into(),
            },
            Command::Anagram {
                first: "silent1".into(),
                second: "listgen".into(),
            },
            Command::Compress {
                text: "aaabbcaadddd".into(),
            },
            Command::Decompress {
                text: "a3b2c1a2d4".into(),
            },
        ];

        let mut reports = Vec::with_capacity(samples.len());
        for sample in &samples {
            reports.extend(self.run(sample)?);
        }
        Ok(reports)
    }
}
