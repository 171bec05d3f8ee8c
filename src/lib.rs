//! Parallel random string generation.
//!
//! Strings are drawn from an alphabet assembled from character classes,
//! an optional custom set, and an exclusion list. The output buffer is split
//! into contiguous chunks filled concurrently, each worker drawing from
//! either a seeded xorshift generator ([`Mode::Fast`]) or rejection-sampled
//! OS entropy ([`Mode::Secure`]).
//!
//! ```no_run
//! use pgen::{Feature, Options};
//!
//! let options = Options::builder()
//!     .length(20)
//!     .enable(Feature::IncludeUpper)
//!     .enable(Feature::IncludeDigits)
//!     .build()?;
//! let password = pgen::generate(&options)?;
//! assert_eq!(password.len(), 20);
//! # Ok::<(), pgen::Error>(())
//! ```

pub mod entropy;
pub mod error;
pub mod options;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;

pub use error::{Error, Result};
pub use options::{ExcludeSet, Feature, FeatureSet, Mode, Options, OptionsBuilder};
pub use pass::{generate, generate_batch, generate_batch_from, generate_from, generate_with};
pub use rand::{EntropySource, OsEntropy};
pub use settings::Settings;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
