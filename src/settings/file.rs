//! Settings file persistence.
//!
//! One line, comma separated. `|` escapes a literal `,` or `|` inside a field.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::options::{ExcludeSet, clamp_workers};

const FIELDS: usize = 7;

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/pgen/settings", home))
}

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let exclude = String::from_utf8_lossy(&settings.exclude.to_bytes()).into_owned();

    let data = format!(
        "{},{},{},{},{},{},{}\n",
        settings.length,
        settings.workers,
        settings.number,
        settings.fast_mode,
        settings.show_entropy,
        escape(&exclude),
        escape(&settings.cli_command),
    );

    file.write_all(data.as_bytes())
}

pub fn load(path: &Path, settings: &mut Settings) -> io::Result<()> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, writing defaults");
        return save(path, settings);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return save(path, settings);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        tracing::warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, resetting to defaults"
        );
        return save(path, settings);
    }

    settings.length = parts[0].parse().unwrap_or(settings.length);
    settings.workers = parts[1]
        .parse::<i64>()
        .map(clamp_workers)
        .unwrap_or(settings.workers);
    settings.number = parts[2].parse().unwrap_or(settings.number);
    settings.fast_mode = parts[3].parse().unwrap_or(settings.fast_mode);
    settings.show_entropy = parts[4].parse().unwrap_or(settings.show_entropy);
    settings.exclude = ExcludeSet::from_bytes(parts[5].as_bytes());
    settings.cli_command = parts[6].clone();

    Ok(())
}

fn escape(s: &str) -> String {
    escape_with(s, ',')
}

/// `|`-escape `delimiter` and `|`. Line breaks become `|n` / `|r` so a field
/// never spills onto a second line.
pub(super) fn escape_with(s: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            c if c == delimiter || c == '|' => {
                out.push('|');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

pub(super) fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(match c {
                'n' => '\n',
                'r' => '\r',
                c => c,
            });
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
