//! Duplicate detection over integer sequences.
//!
//! Output is always in first-occurrence order: a value is reported at the
//! position where it was first seen in the input.

use crate::frequency::FrequencyMap;

/// Values occurring more than once, in first-occurrence order.
pub fn find_duplicates(input: &[i64]) -> Vec<i64> {
    let counts: FrequencyMap<i64> = input.iter().copied().collect();
    counts.keys_where(|n| n > 1).copied().collect()
}

/// Repeated values with their total occurrence counts, in first-occurrence order.
pub fn duplicate_counts(input: &[i64]) -> Vec<(i64, usize)> {
    let counts: FrequencyMap<i64> = input.iter().copied().collect();
    counts
        .iter()
        .filter(|(_, n)| *n > 1)
        .map(|(v, n)| (*v, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_duplicates_first_occurrence_order() {
        let input = [1, 1, 2, 2, 3, 4, 5, 6, 5, 2, 9, 6];
        assert_eq!(find_duplicates(&input), vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_find_duplicates_none() {
        assert!(find_duplicates(&[1, 2, 3]).is_empty());
        assert!(find_duplicates(&[]).is_empty());
    }

    #[test]
    fn test_order_follows_first_sighting_not_second() {
        // 7 is seen first, but 3 repeats first
        assert_eq!(find_duplicates(&[7, 3, 3, 7]), vec![7, 3]);
    }

    #[test]
    fn test_duplicate_counts() {
        let input = [1, 1, 2, 2, 3, 2, -4, -4];
        assert_eq!(duplicate_counts(&input), vec![(1, 2), (2, 3), (-4, 2)]);
    }
}
