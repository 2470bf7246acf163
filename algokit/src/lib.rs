//! AlgoKit
//!
//! Classic array and string algorithms with explicit edge-case policy:
//!
//! - Minimum swaps to separate a binary sequence (counting and two-pointer)
//! - Hash-set pair-sum search with a documented emission policy
//! - Duplicate detection, char counting, first-unique lookup and anagram
//!   checks on one shared [`FrequencyMap`]
//! - A memoized Fibonacci cache, with a mutex-guarded shared handle
//! - Run-length compression with an exact inverse
//! - Reversal, palindrome checks and duplicate removal
//!
//! # Usage
//!
//! ```
//! use algokit::{arrays, strings, FibonacciCache};
//!
//! assert_eq!(arrays::min_swaps(&[0, 1, 0, 1, 0]).unwrap(), 1);
//! assert_eq!(strings::compress("aaabbcaadddd"), "a3b2c1a2d4");
//! assert!(strings::is_anagram("silent", "listen"));
//!
//! let mut fib = FibonacciCache::new();
//! assert_eq!(fib.compute_nth_term(10).unwrap(), 55);
//! ```
//!
//! Everything except [`FibonacciCache`] is a pure function. Fallible
//! operations return [`AlgoResult`]; "not found" outcomes are `None`.

#![allow(clippy::uninlined_format_args)]

pub mod arrays;
pub mod config;
pub mod error;
pub mod frequency;
pub mod numbers;
pub mod strings;

pub use config::{AlgoConfig, CaseSensitivity, ConfigError, PairPolicy};
pub use error::{AlgoError, AlgoErrorKind, AlgoResult};
pub use frequency::FrequencyMap;
pub use numbers::{fibonacci_sequence, CacheStats, FibonacciCache, SharedFibonacci};
