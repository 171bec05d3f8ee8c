use pgen::options::{Feature, Mode};
use thiserror::Error;

use super::{CliFlags, CommandMode};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("The string length must be an integer greater than 0, got {0}")]
    InvalidLength(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
}

/// Apply a single-letter boolean flag. Returns false if `c` is not one.
fn short_switch(flags: &mut CliFlags, c: char) -> bool {
    match c {
        'l' => flags.enable_class(Feature::IncludeLower),
        'u' => flags.enable_class(Feature::IncludeUpper),
        'd' => flags.enable_class(Feature::IncludeDigits),
        's' => flags.enable_class(Feature::IncludeSpecial),
        'e' => flags.enable_class(Feature::IncludeExtendedSpecial),
        'f' => flags.mode = Some(Mode::Fast),
        'S' => flags.mode = Some(Mode::Secure),
        'E' => flags.entropy = true,
        'b' => flags.clipboard = true,
        'q' => flags.quiet = true,
        'h' => flags.help = true,
        'v' => flags.version = true,
        _ => return false,
    }
    true
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();

        // Positional length. Negative numbers land here too, not in flag matching.
        if let Ok(n) = arg.parse::<i64>() {
            if n <= 0 {
                return Err(ParseError::InvalidLength(arg.to_string()));
            }
            flags.length = Some(n as usize);
            i += 1;
            continue;
        }

        match arg {
            "--lower" => flags.enable_class(Feature::IncludeLower),
            "--upper" => flags.enable_class(Feature::IncludeUpper),
            "--digits" => flags.enable_class(Feature::IncludeDigits),
            "--special" => flags.enable_class(Feature::IncludeSpecial),
            "--extended" => flags.enable_class(Feature::IncludeExtendedSpecial),
            "--fast" => flags.mode = Some(Mode::Fast),
            "--secure" => flags.mode = Some(Mode::Secure),
            "--entropy" => flags.entropy = true,
            "--board" => flags.clipboard = true,
            "--quiet" => flags.quiet = true,
            "--help" => flags.help = true,
            "--version" => flags.version = true,
            "--saved" => flags.saved = true,
            "--default" => flags.default = true,
            "--save" => flags.save = true,
            "-c" | "--command" => {
                if args.get(i + 1).map(String::as_str) == Some("get") {
                    i += 1;
                    flags.command = CommandMode::Get;
                } else {
                    flags.command = CommandMode::Set;
                }
            }
            "-C" | "--custom" => flags.custom = Some(value(args, &mut i, arg)?.to_string()),
            "-x" | "--exclude" => flags.exclude = Some(value(args, &mut i, arg)?.to_string()),
            "-t" | "--threads" => {
                let v = value(args, &mut i, arg)?;
                flags.threads = Some(
                    v.parse()
                        .map_err(|_| ParseError::InvalidNumber(v.to_string()))?,
                );
            }
            "-n" | "--number" => {
                let v = value(args, &mut i, arg)?;
                flags.number = Some(
                    v.parse()
                        .map_err(|_| ParseError::InvalidNumber(v.to_string()))?,
                );
            }
            "--length" => {
                let v = value(args, &mut i, arg)?;
                match v.parse::<i64>() {
                    Ok(n) if n > 0 => flags.length = Some(n as usize),
                    Ok(_) => return Err(ParseError::InvalidLength(v.to_string())),
                    Err(_) => return Err(ParseError::InvalidNumber(v.to_string())),
                }
            }
            // Bundled short switches: -lud, -fE
            s if s.len() > 1 && s.starts_with('-') && !s.starts_with("--") => {
                for c in s[1..].chars() {
                    if !short_switch(&mut flags, c) {
                        return Err(ParseError::UnknownArg(s.to_string()));
                    }
                }
            }
            other => return Err(ParseError::UnknownArg(other.to_string())),
        }
        i += 1;
    }

    if flags.command == CommandMode::Set && !flags.has_explicit_args() {
        flags.command = CommandMode::Clear;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgen::options::FeatureSet;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("pgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn positional_length_and_classes() {
        let flags = parse(&args(&["-d", "10"])).unwrap();
        assert_eq!(flags.length, Some(10));
        assert!(flags.classes.has(Feature::IncludeDigits));
    }

    #[test]
    fn bundled_switches() {
        let flags = parse(&args(&["-ludE", "8"])).unwrap();
        let expected: FeatureSet = [
            Feature::IncludeLower,
            Feature::IncludeUpper,
            Feature::IncludeDigits,
        ]
        .into_iter()
        .collect();
        assert_eq!(flags.classes, expected);
        assert!(flags.entropy);
    }

    #[test]
    fn repeated_flag_stays_on() {
        let flags = parse(&args(&["-l", "-l", "4"])).unwrap();
        assert!(flags.classes.has(Feature::IncludeLower));
    }

    #[test]
    fn last_mode_wins() {
        let flags = parse(&args(&["-f", "-S", "4"])).unwrap();
        assert_eq!(flags.mode, Some(Mode::Secure));
        let flags = parse(&args(&["-Sf", "4"])).unwrap();
        assert_eq!(flags.mode, Some(Mode::Fast));
    }

    #[test]
    fn values() {
        let flags = parse(&args(&["-C", "XY", "-x", "ab", "-t", "30", "-n", "3", "4"])).unwrap();
        assert_eq!(flags.custom.as_deref(), Some("XY"));
        assert_eq!(flags.exclude.as_deref(), Some("ab"));
        assert_eq!(flags.threads, Some(30));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.length, Some(4));
    }

    #[test]
    fn zero_and_negative_lengths() {
        assert!(matches!(
            parse(&args(&["0"])),
            Err(ParseError::InvalidLength(_))
        ));
        assert!(matches!(
            parse(&args(&["-5"])),
            Err(ParseError::InvalidLength(_))
        ));
    }

    #[test]
    fn missing_value() {
        assert!(matches!(
            parse(&args(&["-x"])),
            Err(ParseError::MissingValue(_))
        ));
    }

    #[test]
    fn unknown_argument() {
        assert!(matches!(
            parse(&args(&["-lz"])),
            Err(ParseError::UnknownArg(_))
        ));
        assert!(matches!(
            parse(&args(&["--nope"])),
            Err(ParseError::UnknownArg(_))
        ));
    }

    #[test]
    fn command_modes() {
        assert_eq!(parse(&args(&["-c"])).unwrap().command, CommandMode::Clear);
        assert_eq!(parse(&args(&["-c", "get"])).unwrap().command, CommandMode::Get);
        assert_eq!(
            parse(&args(&["-c", "-d", "12"])).unwrap().command,
            CommandMode::Set
        );
    }
}
