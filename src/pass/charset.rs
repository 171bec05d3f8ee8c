//! Character classes and alphabet building.

use crate::error::{Error, Result};
use crate::options::{Feature, Options};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!#$%&*+-=?@^_";
pub const EXTENDED_SPECIAL: &[u8] = b" \"'(),./:;<>[\\]`{|}~";

/// Every printable ASCII character (0x20..=0x7E).
pub const MAX_ALPHABET: usize = 95;

/// Characters eligible for selection, in canonical class order.
///
/// Duplicates from a custom alphabet are kept and act as weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> u8 {
        self.0[index]
    }
}

/// Build the alphabet, failing with [`Error::NoAlphabet`] if it comes out empty.
pub fn build(options: &Options) -> Result<Alphabet> {
    let alphabet = collect(options);
    if alphabet.is_empty() {
        return Err(Error::NoAlphabet);
    }
    Ok(alphabet)
}

/// Merge enabled classes minus exclusions. Pure; may return an empty alphabet.
pub fn collect(options: &Options) -> Alphabet {
    let exclude = options.exclude();

    if let Some(custom) = options.custom_alphabet() {
        let dropped = custom.iter().filter(|b| !b.is_ascii()).count();
        if dropped > 0 {
            tracing::warn!(dropped, "custom alphabet: non-ASCII bytes ignored");
        }
        return Alphabet(
            custom
                .iter()
                .copied()
                .filter(|b| b.is_ascii() && !exclude.contains(*b))
                .collect(),
        );
    }

    let classes = options.classes();
    let mut chars = Vec::with_capacity(MAX_ALPHABET);

    let mut push = |set: &[u8]| chars.extend(set.iter().copied().filter(|b| !exclude.contains(*b)));

    if classes.has(Feature::IncludeLower) {
        push(LOWERCASE);
    }
    if classes.has(Feature::IncludeUpper) {
        push(UPPERCASE);
    }
    if classes.has(Feature::IncludeDigits) {
        push(DIGITS);
    }
    if classes.has(Feature::IncludeSpecial) {
        push(SPECIAL);
        if classes.has(Feature::IncludeExtendedSpecial) {
            push(EXTENDED_SPECIAL);
        }
    }

    Alphabet(chars)
}
