//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use pgen::terminal::{print_error, print_warning};

use super::quiet;

/// Warning to stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        print_warning(msg);
    }
}

/// Error to stderr. Never suppressed.
pub fn error(msg: &str) {
    print_error(msg);
}

pub fn usage_hint() {
    eprintln!("Run `pgen --help` for usage.");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Quiet or non-interactive sessions fall back silently.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn command_saved(command: &str) {
    if !quiet::enabled() {
        eprintln!("Saved default command: {command}");
    }
}

pub fn command_cleared() {
    if !quiet::enabled() {
        eprintln!("Saved command cleared");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}
