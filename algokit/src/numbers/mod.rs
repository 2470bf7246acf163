//! Numeric sequences.

pub mod fibonacci;

pub use fibonacci::{fibonacci_sequence, CacheStats, FibonacciCache, SharedFibonacci};
