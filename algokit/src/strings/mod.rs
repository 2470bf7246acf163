//! Character sequence algorithms.
//!
//! Everything here works per `char` (Unicode scalar value), never per byte.
//! Functions taking a [`CaseSensitivity`](crate::config::CaseSensitivity)
//! have a `*_with` form; the plain form is case-sensitive.

pub mod anagram;
pub mod char_count;
pub mod compression;
pub mod dedupe;
pub mod first_unique;
pub mod palindrome;
pub mod reverse;

pub use anagram::{is_anagram, is_anagram_with};
pub use char_count::{char_count, char_count_with};
pub use compression::{
    compress, compress_tokens, decompress, decompress_tokens, parse_tokens, RunToken,
};
pub use dedupe::remove_duplicates;
pub use first_unique::{first_non_repeating, first_non_repeating_with};
pub use palindrome::{is_palindrome, is_palindrome_with};
pub use reverse::reverse;
