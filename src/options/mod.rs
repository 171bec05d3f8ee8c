//! Generation options.
//!
//! Built once from external input via [`OptionsBuilder`], then shared
//! read-only by every fill worker.

mod exclude;
mod features;

pub use exclude::ExcludeSet;
pub use features::{Feature, FeatureSet};

use crate::error::{Error, Result};

/// Upper bound on fill workers.
pub const MAX_WORKERS: usize = 24;

/// Random source strategy chosen for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// xorshift64 seeded once per worker. Not cryptographic.
    Fast,
    /// Fresh OS entropy per character with rejection sampling.
    Secure,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Fast => "fast (xorshift64)",
            Mode::Secure => "secure (OS entropy)",
        }
    }
}

/// Clamp a requested worker count into `1..=MAX_WORKERS`.
pub fn clamp_workers(requested: i64) -> usize {
    let clamped = requested.clamp(1, MAX_WORKERS as i64) as usize;
    if clamped as i64 != requested {
        tracing::debug!(requested, clamped, "worker count out of range, clamped");
    }
    clamped
}

#[derive(Debug, Clone)]
pub struct Options {
    length: usize,
    workers: usize,
    exclude: ExcludeSet,
    features: FeatureSet,
    custom_alphabet: Option<Vec<u8>>,
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn exclude(&self) -> &ExcludeSet {
        &self.exclude
    }

    #[inline]
    pub fn has(&self, feature: Feature) -> bool {
        self.features.has(feature)
    }

    /// Present only when [`Feature::UseCustomAlphabet`] is set.
    pub fn custom_alphabet(&self) -> Option<&[u8]> {
        if self.has(Feature::UseCustomAlphabet) {
            Some(self.custom_alphabet.as_deref().unwrap_or_default())
        } else {
            None
        }
    }

    /// Secure unless fast mode was the last mode enabled.
    pub fn mode(&self) -> Mode {
        if self.has(Feature::FastMode) && !self.has(Feature::SecureMode) {
            Mode::Fast
        } else {
            Mode::Secure
        }
    }

    /// Built-in classes that actually contribute to the alphabet.
    ///
    /// Empty when a custom alphabet is in use. Extended special implies
    /// special, and with no class chosen all four built-ins are on.
    pub fn classes(&self) -> FeatureSet {
        if self.has(Feature::UseCustomAlphabet) {
            return FeatureSet::empty();
        }

        let mut classes = FeatureSet::empty();
        for f in [
            Feature::IncludeLower,
            Feature::IncludeUpper,
            Feature::IncludeDigits,
            Feature::IncludeSpecial,
            Feature::IncludeExtendedSpecial,
        ] {
            if self.has(f) {
                classes.enable(f);
            }
        }

        if classes.has(Feature::IncludeExtendedSpecial) {
            classes.enable(Feature::IncludeSpecial);
        }

        if classes == FeatureSet::empty() {
            classes
                .enable(Feature::IncludeLower)
                .enable(Feature::IncludeUpper)
                .enable(Feature::IncludeDigits)
                .enable(Feature::IncludeSpecial);
        }

        classes
    }
}

#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    length: usize,
    workers: usize,
    exclude: ExcludeSet,
    features: FeatureSet,
    custom_alphabet: Option<Vec<u8>>,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            length: 0,
            workers: 1,
            exclude: ExcludeSet::new(),
            features: FeatureSet::empty(),
            custom_alphabet: None,
        }
    }
}

impl OptionsBuilder {
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Out-of-range counts are clamped, never rejected.
    pub fn workers(mut self, workers: i64) -> Self {
        self.workers = clamp_workers(workers);
        self
    }

    pub fn exclude(mut self, bytes: &[u8]) -> Self {
        for &b in bytes {
            self.exclude.insert(b);
        }
        self
    }

    pub fn exclude_set(mut self, set: ExcludeSet) -> Self {
        self.exclude = set;
        self
    }

    /// Also enables [`Feature::UseCustomAlphabet`].
    pub fn custom_alphabet(mut self, alphabet: &[u8]) -> Self {
        self.custom_alphabet = Some(alphabet.to_vec());
        self.features.enable(Feature::UseCustomAlphabet);
        self
    }

    pub fn enable(mut self, feature: Feature) -> Self {
        self.features.enable(feature);
        self
    }

    pub fn features(mut self, features: FeatureSet) -> Self {
        for f in features.iter() {
            self.features.enable(f);
        }
        self
    }

    pub fn build(self) -> Result<Options> {
        if self.length == 0 {
            return Err(Error::InvalidLength);
        }

        let custom_alphabet = if self.features.has(Feature::UseCustomAlphabet) {
            Some(self.custom_alphabet.unwrap_or_default())
        } else {
            None
        };

        Ok(Options {
            length: self.length,
            workers: self.workers,
            exclude: self.exclude,
            features: self.features,
            custom_alphabet,
        })
    }
}
