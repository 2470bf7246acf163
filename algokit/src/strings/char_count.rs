//! Alphanumeric character frequencies.
//!
//! Only characters for which `char::is_alphanumeric` holds are counted;
//! whitespace and punctuation are skipped.

use crate::config::CaseSensitivity;
use crate::frequency::FrequencyMap;

/// Case-sensitive counts of the alphanumeric chars in `input`.
pub fn char_count(input: &str) -> FrequencyMap<char> {
    char_count_with(input, CaseSensitivity::Sensitive)
}

/// Counts of the alphanumeric chars in `input`, folded per `case`.
///
/// Keys are the folded chars, in first-seen order.
pub fn char_count_with(input: &str, case: CaseSensitivity) -> FrequencyMap<char> {
    input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| case.fold(c))
        .collect()
}
