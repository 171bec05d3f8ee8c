//! Fast strategy: xorshift64 seeded once from OS entropy.
//!
//! Throughput over quality. `state % len` is biased toward low residues when
//! `len` does not divide 2^64, and the sequence is fully predictable from the
//! seed. Not for secrets that matter.

use zeroize::Zeroize;

use super::IndexSource;
use super::os::EntropySource;
use crate::error::{Error, Result};

/// Redraws allowed when the entropy source keeps returning a zero seed.
const SEED_ATTEMPTS: usize = 16;

/// Substituted for a zero seed in [`FastRng::from_seed`].
const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct FastRng {
    state: u64,
}

impl FastRng {
    /// Draw a non-zero 64-bit seed from `entropy`.
    pub fn seeded<E: EntropySource + ?Sized>(entropy: &E) -> Result<Self> {
        for _ in 0..SEED_ATTEMPTS {
            let mut bytes = [0u8; 8];
            entropy.fill(&mut bytes)?;
            let seed = u64::from_ne_bytes(bytes);
            bytes.zeroize();
            if seed != 0 {
                return Ok(FastRng { state: seed });
            }
        }
        Err(Error::EntropySourceUnavailable(
            "entropy source returned only zero seeds".into(),
        ))
    }

    /// Deterministic construction. A zero seed is replaced since xorshift
    /// never leaves the all-zero state.
    pub fn from_seed(seed: u64) -> Self {
        FastRng {
            state: if seed == 0 { FALLBACK_SEED } else { seed },
        }
    }

    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl IndexSource for FastRng {
    #[inline(always)]
    fn next_index(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(Error::NoAlphabet);
        }
        Ok((self.next_u64() % len as u64) as usize)
    }
}

impl Drop for FastRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
