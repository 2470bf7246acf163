//! Anagram check by balancing a frequency map.
//!
//! Chars of the first string increment, chars of the second decrement; a
//! key reaching zero is removed. The strings are anagrams iff the map ends
//! up empty. A char missing from the map while decrementing ends the check
//! early. All chars count, whitespace and punctuation included.

use crate::config::CaseSensitivity;
use crate::frequency::FrequencyMap;

/// Whether `a` and `b` hold the same multiset of chars, case-sensitively.
pub fn is_anagram(a: &str, b: &str) -> bool {
    is_anagram_with(a, b, CaseSensitivity::Sensitive)
}

/// As [`is_anagram`], comparing chars per `case`.
pub fn is_anagram_with(a: &str, b: &str, case: CaseSensitivity) -> bool {
    let mut balance: FrequencyMap<char> = a.chars().flat_map(|c| case.fold(c)).collect();
    for c in b.chars().flat_map(|c| case.fold(c)) {
        if balance.decrement(&c).is_none() {
            return false;
        }
    }
    balance.is_empty()
}
