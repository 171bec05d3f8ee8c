//! Shared terminal utilities.
//!
//! Box drawing, styled messages and number formatting.

mod output;

pub use output::*;
