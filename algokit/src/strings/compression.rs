//! Run-length compression
//!
//! Each maximal run of identical consecutive chars becomes a [`RunToken`].
//! The text form writes every token as the char followed by its decimal run
//! length:
//!
//! ```text
//! "aaabbcaadddd"  →  a3 b2 c1 a2 d4  →  "a3b2c1a2d4"
//! ```
//!
//! A run char that is an ASCII digit or a backslash is written with a
//! leading `\`, so counts never merge with the next token:
//!
//! ```text
//! "a333"  →  a1 33  →  "a1\33"
//! ```
//!
//! Both forms round-trip every string. Output can be longer than the input
//! when runs are short.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, AlgoResult};

const ESCAPE: char = '\\';

fn needs_escape(ch: char) -> bool {
    ch.is_ascii_digit() || ch == ESCAPE
}

/// One maximal run: `len` consecutive copies of `ch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunToken {
    pub ch: char,
    pub len: usize,
}

impl fmt::Display for RunToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if needs_escape(self.ch) {
            write!(f, "{ESCAPE}")?;
        }
        write!(f, "{}{}", self.ch, self.len)
    }
}

/// Split `input` into maximal runs, left to right.
pub fn compress_tokens(input: &str) -> Vec<RunToken> {
    let mut tokens: Vec<RunToken> = Vec::new();
    for ch in input.chars() {
        match tokens.last_mut() {
            Some(run) if run.ch == ch => run.len += 1,
            _ => tokens.push(RunToken { ch, len: 1 }),
        }
    }
    tokens
}

/// Text form of [`compress_tokens`]: `"aaabbcaadddd"` → `"a3b2c1a2d4"`.
pub fn compress(input: &str) -> String {
    compress_tokens(input)
        .iter()
        .map(RunToken::to_string)
        .collect()
}

/// Expand tokens back into the string they describe.
pub fn decompress_tokens(tokens: &[RunToken]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len).sum());
    for token in tokens {
        out.extend(std::iter::repeat(token.ch).take(token.len));
    }
    out
}

/// Parse the text form into tokens.
///
/// Each token is one char followed by one or more ASCII digits; a digit or
/// backslash run char must be preceded by a backslash. A bare digit run
/// char, a dangling backslash, a missing or zero count, and a count that
/// overflows `usize` are invalid input. Adjacent tokens with the same char
/// are accepted as written.
pub fn parse_tokens(text: &str) -> AlgoResult<Vec<RunToken>> {
    let mut chars = text.chars().peekable();
    let mut tokens = Vec::new();
    let mut position = 0;

    while let Some(mut ch) = chars.next() {
        let mut width = 1;
        if ch == ESCAPE {
            ch = chars
                .next()
                .ok_or_else(|| AlgoError::malformed(position, "dangling escape"))?;
            width += 1;
        } else if ch.is_ascii_digit() {
            return Err(AlgoError::malformed(
                position,
                format!("unescaped digit {ch:?} where a run char belongs"),
            ));
        }
        let (len, digits) = read_count(&mut chars, position)?;
        if digits == 0 {
            return Err(AlgoError::malformed(
                position,
                format!("missing run length after {ch:?}"),
            ));
        }
        if len == 0 {
            return Err(AlgoError::malformed(position, "zero run length"));
        }
        tokens.push(RunToken { ch, len });
        position += width + digits;
    }
    Ok(tokens)
}

/// Expand the text form produced by [`compress`].
pub fn decompress(text: &str) -> AlgoResult<String> {
    parse_tokens(text).map(|tokens| decompress_tokens(&tokens))
}

/// Consume a decimal count, returning its value and digit count.
fn read_count(chars: &mut Peekable<Chars<'_>>, position: usize) -> AlgoResult<(usize, usize)> {
    let mut value: usize = 0;
    let mut digits = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as usize))
            .ok_or_else(|| AlgoError::malformed(position, "run length overflows usize"))?;
        digits += 1;
        chars.next();
    }
    Ok((value, digits))
}
