use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod cli;
mod exits;

/// Environment variable holding the log filter, e.g. `PGEN_LOG=debug`.
const LOG_ENV: &str = "PGEN_LOG";

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    exits::install_handlers();
    init_logging();

    let args: Vec<String> = env::args().collect();
    cli::run(args)
}
