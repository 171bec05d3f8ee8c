mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;
mod quiet;

use std::process::ExitCode;

pub use context::{Context, Stop};
pub use flags::{CliFlags, CommandMode};
pub use parse::parse;

use crate::exits;

/// Run the CLI and map the outcome to a process exit code.
pub fn run(args: Vec<String>) -> ExitCode {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::usage_hint();
            return ExitCode::from(exits::code_for(&e));
        }
    };

    match ctx.run() {
        Ok(()) | Err(Stop::Done) => ExitCode::SUCCESS,
        Err(Stop::Failed(e)) => {
            tracing::error!(error = %e, "generation failed");
            prompts::error(&e.to_string());
            ExitCode::from(exits::code_for(&e))
        }
    }
}
