use crate::config::CaseSensitivity;
use crate::strings::char_count::char_count_with;

/// First alphanumeric char of `input` that occurs exactly once.
///
/// `None` when every char repeats; that is an expected outcome, not an error.
pub fn first_non_repeating(input: &str) -> Option<char> {
    first_non_repeating_with(input, CaseSensitivity::Sensitive)
}

/// As [`first_non_repeating`], comparing chars per `case`.
///
/// The returned char is the one as written in `input`. Chars whose case
/// folding expands to more than one char are never reported.
pub fn first_non_repeating_with(input: &str, case: CaseSensitivity) -> Option<char> {
    let counts = char_count_with(input, case);
    input.chars().filter(|c| c.is_alphanumeric()).find(|&c| {
        let mut folded = case.fold(c);
        match (folded.next(), folded.next()) {
            (Some(key), None) => counts.count(&key) == 1,
            _ => false,
        }
    })
}
