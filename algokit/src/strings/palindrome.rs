use crate::config::CaseSensitivity;

/// Whether `input` reads the same in both directions, comparing chars exactly.
///
/// Every char counts, including spaces and punctuation. The empty string
/// and single chars are palindromes.
pub fn is_palindrome(input: &str) -> bool {
    is_palindrome_with(input, CaseSensitivity::Sensitive)
}

/// As [`is_palindrome`], comparing chars per `case`.
pub fn is_palindrome_with(input: &str, case: CaseSensitivity) -> bool {
    let chars = case.fold_str(input);
    if chars.len() < 2 {
        return true;
    }
    let (mut left, mut right) = (0, chars.len() - 1);
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}
