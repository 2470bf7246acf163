//! Integer sequence algorithms.
//!
//! - [`reverse`] — two-pointer reversal
//! - [`duplicates`] — values occurring more than once
//! - [`pair_sum`] — hash-set pair-sum search
//! - [`partition`] — minimum swaps to separate a binary sequence

pub mod duplicates;
pub mod pair_sum;
pub mod partition;
pub mod reverse;

pub use duplicates::{duplicate_counts, find_duplicates};
pub use pair_sum::{find_pairs, find_pairs_with};
pub use partition::{
    min_swaps, min_swaps_with, partition, partition_in_place, swaps_for_order, BinarySequence,
    PartitionOrder, PartitionOutcome, Partitioned, SwapStrategy,
};
pub use reverse::{reverse_in_place, reversed};
