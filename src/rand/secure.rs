//! Secure strategy: one fresh machine word of OS entropy per character,
//! rejection-sampled to remove modulo bias.

use zeroize::Zeroize;

use super::IndexSource;
use super::os::{EntropySource, Fallback};
use crate::error::{Error, Result};

const WORD: usize = std::mem::size_of::<usize>();

pub struct SecureRng<'a, E: ?Sized> {
    entropy: &'a E,
    fallback: Fallback,
    rejected: u64,
}

impl<'a, E: EntropySource + ?Sized> SecureRng<'a, E> {
    pub fn new(entropy: &'a E) -> Self {
        SecureRng {
            entropy,
            fallback: Fallback::default(),
            rejected: 0,
        }
    }

    /// Draws discarded so far for falling in the biased tail.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    #[inline]
    fn draw(&mut self) -> Result<usize> {
        let mut bytes = [0u8; WORD];
        self.entropy.fill_tracked(&mut bytes, &mut self.fallback)?;
        let word = usize::from_ne_bytes(bytes);
        bytes.zeroize();
        Ok(word)
    }
}

/// Largest multiple of `len` that fits in a word. Draws at or above it are
/// rejected.
#[inline(always)]
pub fn max_valid(len: usize) -> usize {
    (usize::MAX / len) * len
}

impl<E: EntropySource + ?Sized> IndexSource for SecureRng<'_, E> {
    fn next_index(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(Error::NoAlphabet);
        }
        let limit = max_valid(len);
        loop {
            let mut word = self.draw()?;
            if word < limit {
                let index = word % len;
                word.zeroize();
                return Ok(index);
            }
            self.rejected += 1;
        }
    }
}
