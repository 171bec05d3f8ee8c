//! Persisted defaults.

mod file;

use std::path::Path;

use crate::error::Result;
use crate::options::{ExcludeSet, MAX_WORKERS};

pub use file::default_path;

/// Encode an argument list as a single `cli_command` string.
///
/// Spaces, `|` and line breaks inside an argument are `|`-escaped, so
/// [`decode_command`] gives back exactly the same arguments.
pub fn encode_command<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(|a| file::escape_with(a.as_ref(), ' '))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn decode_command(command: &str) -> Vec<String> {
    if command.is_empty() {
        return Vec::new();
    }
    file::split_escaped(command, ' ')
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub length: usize,
    pub workers: usize,
    pub number: usize,
    pub fast_mode: bool,
    pub show_entropy: bool,
    pub exclude: ExcludeSet,
    pub cli_command: String,
}

impl Settings {
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(path, self)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            workers: 4.min(MAX_WORKERS),
            number: 1,
            fast_mode: false,
            show_entropy: false,
            exclude: ExcludeSet::new(),
            cli_command: String::new(),
        }
    }
}
