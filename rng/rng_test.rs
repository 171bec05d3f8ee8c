//! RNG test binary - outputs random bytes to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test              # Seeded xorshift64 (fast mode)
//!   ./rng_test --secure     # OS entropy (secure mode)
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};
use std::process::ExitCode;

use pgen::rand::{EntropySource, FastRng, OsEntropy};

fn print_help() {
    eprintln!("Usage: rng_test [OPTIONS]");
    eprintln!();
    eprintln!("Outputs random bytes to stdout for statistical testing.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -S, --secure   Stream OS entropy instead of seeded xorshift64");
    eprintln!("  -h, --help     Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  rng_test | dieharder -a -g 200");
    eprintln!("  rng_test -S | RNG_test stdin -tlmax 1TB");
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return ExitCode::SUCCESS;
    }
    let secure = args.iter().any(|a| a == "--secure" || a == "-S");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = [0u8; 8192];

    if secure {
        loop {
            if let Err(e) = OsEntropy.fill(&mut buf) {
                eprintln!("rng_test: {e}");
                return ExitCode::FAILURE;
            }
            if out.write_all(&buf).is_err() {
                return ExitCode::SUCCESS;
            }
        }
    }

    let mut rng = match FastRng::seeded(&OsEntropy) {
        Ok(rng) => rng,
        Err(e) => {
            eprintln!("rng_test: {e}");
            return ExitCode::FAILURE;
        }
    };
    loop {
        for chunk in buf.chunks_exact_mut(8) {
            chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
        }
        if out.write_all(&buf).is_err() {
            return ExitCode::SUCCESS;
        }
    }
}
