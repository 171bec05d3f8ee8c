//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::Alphabet;
pub use generate::{
    chunk_bounds, fill, generate, generate_batch, generate_batch_from, generate_from,
    generate_with,
};
pub use output::SecureBufWriter;
