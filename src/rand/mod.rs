//! Random index sources.
//!
//! Two strategies behind one interface: [`FastRng`] (xorshift64, seeded once)
//! and [`SecureRng`] (fresh OS entropy per draw, rejection sampled). A
//! [`Picker`] is built per fill worker from the run's [`Mode`].

mod fast;
#[cfg(test)]
pub(crate) mod mock;
mod os;
mod secure;

pub use fast::FastRng;
pub use os::{EntropySource, Fallback, OsEntropy, RANDOM_DEVICE};
pub use secure::{SecureRng, max_valid};

use crate::error::Result;
use crate::options::Mode;

// =============================================================================
// Interface
// =============================================================================

/// Uniform-ish indices into an alphabet of `len` characters.
pub trait IndexSource {
    /// Returns a value in `0..len`.
    fn next_index(&mut self, len: usize) -> Result<usize>;
}

// =============================================================================
// Strategy selection
// =============================================================================

/// One worker's random source, chosen once per run.
pub enum Picker<'a, E: ?Sized> {
    Fast(FastRng),
    Secure(SecureRng<'a, E>),
}

impl<'a, E: EntropySource + ?Sized> Picker<'a, E> {
    /// Fast mode draws its seed here, before any character is produced.
    pub fn for_mode(mode: Mode, entropy: &'a E) -> Result<Self> {
        Ok(match mode {
            Mode::Fast => Picker::Fast(FastRng::seeded(entropy)?),
            Mode::Secure => Picker::Secure(SecureRng::new(entropy)),
        })
    }
}

impl<E: EntropySource + ?Sized> IndexSource for Picker<'_, E> {
    #[inline(always)]
    fn next_index(&mut self, len: usize) -> Result<usize> {
        match self {
            Picker::Fast(rng) => rng.next_index(len),
            Picker::Secure(rng) => rng.next_index(len),
        }
    }
}
