//! Minimum swaps to separate a binary sequence
//!
//! A binary sequence is fully separated when all 0s form one contiguous block
//! and all 1s the other. Either block may come first; the cheaper order wins.
//!
//! # Counting argument
//!
//! For the 0s-first order with `z` zeros, every 1 inside the first `z`
//! positions is misplaced, and the suffix holds exactly as many misplaced 0s.
//! Each swap fixes one of each, so the misplaced-1 count is both sufficient
//! and necessary. The 1s-first order is symmetric.
//!
//! ```text
//! [0, 1, 0, 1, 0]   z = 3, o = 2
//!  └──┬──┘          ones in first 3 → 1   (0s-first)
//!  └─┬─┘            zeros in first 2 → 1  (1s-first)
//! min = 1
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AlgoError, AlgoResult};

/// A validated view over a sequence whose every element is 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinarySequence<'a> {
    bits: &'a [i64],
}

impl<'a> BinarySequence<'a> {
    /// Validate `bits`, rejecting the first element outside {0, 1}.
    pub fn new(bits: &'a [i64]) -> AlgoResult<Self> {
        let stray = bits.iter().enumerate().find(|(_, b)| !matches!(**b, 0 | 1));
        if let Some((index, &value)) = stray {
            debug!(index, value, "Rejected non-binary sequence");
            return Err(AlgoError::NonBinaryElement { index, value });
        }
        Ok(Self { bits })
    }

    pub fn as_slice(&self) -> &'a [i64] {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn zeros(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 0).count()
    }

    pub fn ones(&self) -> usize {
        self.len() - self.zeros()
    }
}

/// Target arrangement of a separated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionOrder {
    ZerosFirst,
    OnesFirst,
}

impl PartitionOrder {
    /// The digit that belongs in the leading block.
    fn leading(self) -> i64 {
        match self {
            Self::ZerosFirst => 0,
            Self::OnesFirst => 1,
        }
    }
}

/// How the minimum swap count is derived. Both strategies always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapStrategy {
    /// Count misplaced elements in the leading block. O(1) extra space.
    #[default]
    Counting,
    /// Walk pointers inward from both ends, one swap per mismatched pair.
    TwoPointer,
}

/// Chosen order and the swaps it takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionOutcome {
    pub order: PartitionOrder,
    pub swaps: usize,
}

/// A separated copy of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partitioned {
    pub values: Vec<i64>,
    pub outcome: PartitionOutcome,
}

/// Swaps needed to reach `order` by the counting method.
pub fn swaps_for_order(seq: &BinarySequence<'_>, order: PartitionOrder) -> usize {
    let lead = order.leading();
    let block = seq.bits.iter().filter(|&&b| b == lead).count();
    seq.bits[..block].iter().filter(|&&b| b != lead).count()
}

/// Minimum swaps to separate `input`, by the counting method.
///
/// Fails with an invalid-input error if any element is outside {0, 1}.
pub fn min_swaps(input: &[i64]) -> AlgoResult<usize> {
    min_swaps_with(input, SwapStrategy::Counting)
}

/// Minimum swaps to separate `input` using the given strategy.
pub fn min_swaps_with(input: &[i64], strategy: SwapStrategy) -> AlgoResult<usize> {
    let seq = BinarySequence::new(input)?;
    let cost = |order: PartitionOrder| match strategy {
        SwapStrategy::Counting => swaps_for_order(&seq, order),
        SwapStrategy::TwoPointer => two_pointer_pass(&mut seq.bits.to_vec(), order),
    };
    Ok(cost(PartitionOrder::ZerosFirst).min(cost(PartitionOrder::OnesFirst)))
}

/// Separate `items` in place using the minimum number of swaps.
///
/// Ties go to [`PartitionOrder::ZerosFirst`]. Nothing is modified when
/// validation fails.
pub fn partition_in_place(items: &mut [i64]) -> AlgoResult<PartitionOutcome> {
    let seq = BinarySequence::new(items)?;
    let zeros_first = swaps_for_order(&seq, PartitionOrder::ZerosFirst);
    let ones_first = swaps_for_order(&seq, PartitionOrder::OnesFirst);
    let order = if zeros_first <= ones_first {
        PartitionOrder::ZerosFirst
    } else {
        PartitionOrder::OnesFirst
    };

    let swaps = two_pointer_pass(items, order);
    debug!(len = items.len(), order = ?order, swaps, "Partitioned binary sequence");
    Ok(PartitionOutcome { order, swaps })
}

/// Separated copy of `input`; the input itself is left untouched.
pub fn partition(input: &[i64]) -> AlgoResult<Partitioned> {
    let mut values = input.to_vec();
    let outcome = partition_in_place(&mut values)?;
    Ok(Partitioned { values, outcome })
}

/// Swap mismatched pairs toward `order`, returning how many swaps were made.
/// `items` must already be validated as binary.
fn two_pointer_pass(items: &mut [i64], order: PartitionOrder) -> usize {
    if items.len() < 2 {
        return 0;
    }
    let lead = order.leading();
    let (mut left, mut right) = (0, items.len() - 1);
    let mut swaps = 0;

    while left < right {
        while left < right && items[left] == lead {
            left += 1;
        }
        while left < right && items[right] != lead {
            right -= 1;
        }
        if left < right {
            items.swap(left, right);
            swaps += 1;
            left += 1;
            right -= 1;
        }
    }
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgoErrorKind;

    #[test]
    fn test_min_swaps_sample() {
        assert_eq!(min_swaps(&[0, 1, 0, 1, 0]).unwrap(), 1);
        assert_eq!(
            min_swaps_with(&[0, 1, 0, 1, 0], SwapStrategy::TwoPointer).unwrap(),
            1
        );
    }

    #[test]
    fn test_min_swaps_trivial_inputs() {
        assert_eq!(min_swaps(&[]).unwrap(), 0);
        assert_eq!(min_swaps(&[1]).unwrap(), 0);
        assert_eq!(min_swaps(&[0, 0, 0]).unwrap(), 0);
        assert_eq!(min_swaps(&[1, 1, 1, 1]).unwrap(), 0);
        assert_eq!(min_swaps(&[1, 1, 0, 0]).unwrap(), 0);
    }

    #[test]
    fn test_min_swaps_prefers_cheaper_order() {
        // 0s-first needs 2, 1s-first needs 1
        let bits = [1, 0, 1, 1, 0, 0, 1];
        let seq = BinarySequence::new(&bits).unwrap();
        assert_eq!(swaps_for_order(&seq, PartitionOrder::ZerosFirst), 2);
        assert_eq!(swaps_for_order(&seq, PartitionOrder::OnesFirst), 1);
        assert_eq!(min_swaps(&bits).unwrap(), 1);
    }

    #[test]
    fn test_rejects_non_binary() {
        let err = min_swaps(&[0, 1, 2, 1]).unwrap_err();
        assert_eq!(err, AlgoError::NonBinaryElement { index: 2, value: 2 });
        assert_eq!(err.kind(), AlgoErrorKind::InvalidInput);

        let err = min_swaps_with(&[-1], SwapStrategy::TwoPointer).unwrap_err();
        assert_eq!(err.kind(), AlgoErrorKind::InvalidInput);
    }

    #[test]
    fn test_binary_sequence_counts() {
        let bits = [0, 1, 1, 0, 1];
        let seq = BinarySequence::new(&bits).unwrap();
        assert_eq!(seq.zeros(), 2);
        assert_eq!(seq.ones(), 3);
        assert_eq!(seq.as_slice(), &bits);
    }

    #[test]
    fn test_partition_in_place() {
        let mut items = vec![0, 1, 0, 1, 0];
        let outcome = partition_in_place(&mut items).unwrap();
        assert_eq!(items, vec![0, 0, 0, 1, 1]);
        assert_eq!(
            outcome,
            PartitionOutcome {
                order: PartitionOrder::ZerosFirst,
                swaps: 1
            }
        );
    }

    #[test]
    fn test_partition_in_place_ones_first() {
        let mut items = vec![1, 0, 1, 1, 0, 0, 1];
        let outcome = partition_in_place(&mut items).unwrap();
        assert_eq!(outcome.order, PartitionOrder::OnesFirst);
        assert_eq!(outcome.swaps, 1);
        assert_eq!(items, vec![1, 1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_partition_in_place_untouched_on_error() {
        let mut items = vec![1, 0, 3];
        assert!(partition_in_place(&mut items).is_err());
        assert_eq!(items, vec![1, 0, 3]);
    }

    #[test]
    fn test_partition_copy_leaves_input() {
        let input = [1, 0, 1, 0];
        let result = partition(&input).unwrap();
        assert_eq!(input, [1, 0, 1, 0]);
        assert_eq!(result.outcome.swaps, 1);
        assert_eq!(result.values, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = PartitionOutcome {
            order: PartitionOrder::OnesFirst,
            swaps: 3,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"ones_first\""));
        let parsed: PartitionOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }
}
