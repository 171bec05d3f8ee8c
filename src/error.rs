//! Error types shared by the generator core and the CLI.

use thiserror::Error;

/// Everything that can stop a generation run.
///
/// There is no partial-success outcome: any of these aborts the run and no
/// output string is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested length was zero.
    #[error("the string length must be an integer greater than 0")]
    InvalidLength,

    /// Every candidate character was excluded.
    #[error("no characters left to choose from after applying exclusions")]
    NoAlphabet,

    /// Neither the nonblocking syscall nor the random device produced bytes.
    #[error("OS entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    /// A fill worker panicked before finishing its chunk.
    #[error("generation worker {0} panicked")]
    WorkerPanicked(usize),

    /// Reading or writing the settings file failed.
    #[error("settings file: {0}")]
    Settings(#[from] std::io::Error),

    /// Writing generated strings to stdout failed.
    #[error("writing output: {0}")]
    Output(std::io::Error),

    /// Bad command line.
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
