//! CLI context - bundles settings, flags, and output state.

use std::io;
use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::{Zeroize, Zeroizing};

use pgen::entropy;
use pgen::error::Error;
use pgen::options::{ExcludeSet, Feature, Mode, Options};
use pgen::pass::{self, Alphabet, SecureBufWriter, charset, output};
use pgen::rand::OsEntropy;
use pgen::settings::{self, Settings};
use pgen::terminal::{Panel, format_number};

use super::{CliFlags, CommandMode, help, prompts, quiet};

/// Why [`Context::run`] stopped early.
#[derive(Debug)]
pub enum Stop {
    /// Nothing left to do. Not an error.
    Done,
    Failed(Error),
}

impl From<Error> for Stop {
    fn from(e: Error) -> Self {
        Stop::Failed(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub flags: CliFlags,
    args: Vec<String>,
    settings_path: PathBuf,
}

impl Context {
    /// Parse command-line arguments and load saved settings.
    pub fn new(args: Vec<String>) -> Result<Self, Error> {
        Self::with_settings_path(args, settings::default_path())
    }

    pub fn with_settings_path(args: Vec<String>, settings_path: PathBuf) -> Result<Self, Error> {
        let flags = super::parse(&args).map_err(|e| Error::Cli(e.to_string()))?;

        let saved_settings = Settings::load_from(&settings_path).unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });

        let settings = if flags.saved {
            saved_settings.clone()
        } else {
            Settings {
                cli_command: saved_settings.cli_command.clone(),
                ..Default::default()
            }
        };

        Ok(Self {
            settings,
            saved_settings,
            flags,
            args,
            settings_path,
        })
    }

    /// Run CLI. `Err(Stop::Done)` is an early, successful exit.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        self.handle_command_mode()?;
        self.apply_saved_command();
        quiet::set(self.flags.quiet);
        self.apply_flags();

        let options = self.options()?;
        let alphabet = charset::build(&options)?;
        let clipboard = self.open_clipboard()?;

        let count = self.settings.number.max(1);
        let passwords = pass::generate_batch_from(&alphabet, &options, count, &OsEntropy)?;

        self.emit(&passwords, clipboard)?;

        if options.has(Feature::ShowEntropy) {
            entropy_report(&passwords, &alphabet, &options);
        }

        if self.flags.save {
            self.persist_settings()?;
        }
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            help::print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("pgen {}", pgen::VERSION);
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn handle_command_mode(&mut self) -> Result<(), Stop> {
        match self.flags.command {
            CommandMode::Get => {
                if self.settings.cli_command.is_empty() {
                    println!("(no saved command)");
                } else {
                    println!("{}", shell_words(&self.settings.cli_command));
                }
                Err(Stop::Done)
            }
            CommandMode::Clear => {
                self.saved_settings.cli_command.clear();
                self.saved_settings.save_to(&self.settings_path)?;
                prompts::command_cleared();
                Err(Stop::Done)
            }
            CommandMode::Set => {
                let kept = self.args[1..]
                    .iter()
                    .filter(|a| *a != "-c" && *a != "--command")
                    .collect::<Vec<_>>();
                let command = settings::encode_command(&kept);
                self.saved_settings.cli_command = command.clone();
                self.saved_settings.save_to(&self.settings_path)?;
                prompts::command_saved(&command);
                self.settings.cli_command = command;
                Ok(())
            }
            CommandMode::None => Ok(()),
        }
    }

    /// Replay the saved command when no explicit arguments were given.
    fn apply_saved_command(&mut self) {
        if self.settings.cli_command.is_empty()
            || self.flags.command != CommandMode::None
            || self.flags.has_explicit_args()
        {
            return;
        }

        let mut combined = vec![self.args.first().cloned().unwrap_or_default()];
        combined.extend(settings::decode_command(&self.settings.cli_command));

        match super::parse(&combined) {
            Ok(mut saved) => {
                saved.quiet |= self.flags.quiet;
                saved.clipboard |= self.flags.clipboard;
                saved.save |= self.flags.save;
                tracing::debug!(command = %self.settings.cli_command, "replaying saved command");
                if saved.saved {
                    self.settings = Settings {
                        cli_command: self.settings.cli_command.clone(),
                        ..self.saved_settings.clone()
                    };
                }
                self.flags = saved;
            }
            Err(e) => prompts::warn(&format!("Ignoring saved command: {}", e)),
        }
    }

    /// Fold explicit flags into the working settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number = num;
        }
        if let Some(threads) = self.flags.threads {
            self.settings.workers = pgen::options::clamp_workers(threads);
        }
        if let Some(mode) = self.flags.mode {
            self.settings.fast_mode = mode == Mode::Fast;
        }
        if self.flags.entropy {
            self.settings.show_entropy = true;
        }
        if let Some(ref exclude) = self.flags.exclude {
            self.settings.exclude = ExcludeSet::from_bytes(exclude.as_bytes());
        }
    }

    /// Options for this run, from working settings plus character flags.
    pub fn options(&self) -> Result<Options, Error> {
        let mut builder = Options::builder()
            .length(self.settings.length)
            .workers(self.settings.workers as i64)
            .exclude_set(self.settings.exclude.clone())
            .features(self.flags.classes)
            .enable(if self.settings.fast_mode {
                Feature::FastMode
            } else {
                Feature::SecureMode
            });

        if let Some(ref custom) = self.flags.custom {
            builder = builder.custom_alphabet(custom.as_bytes());
        }
        if self.settings.show_entropy {
            builder = builder.enable(Feature::ShowEntropy);
        }

        builder.build()
    }

    fn open_clipboard(&self) -> Result<Option<ClipboardContext>, Stop> {
        if !self.flags.clipboard {
            return Ok(None);
        }
        match ClipboardContext::new() {
            Ok(ctx) => Ok(Some(ctx)),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                if prompts::clipboard_fallback_prompt() {
                    Ok(None)
                } else {
                    Err(Stop::Done)
                }
            }
        }
    }

    fn emit(
        &self,
        passwords: &[Zeroizing<String>],
        clipboard: Option<ClipboardContext>,
    ) -> Result<(), Error> {
        if let Some(mut ctx) = clipboard {
            let all = output::joined(passwords);
            match ctx.set_contents(all.as_str().to_owned()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(passwords.len());
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            return Ok(());
        }

        let stdout = io::stdout();
        let mut out = SecureBufWriter::new(stdout.lock());
        output::write_lines(&mut out, passwords).map_err(Error::Output)
    }

    fn persist_settings(&mut self) -> Result<(), Error> {
        self.saved_settings = Settings {
            cli_command: self.saved_settings.cli_command.clone(),
            ..self.settings.clone()
        };
        self.saved_settings.save_to(&self.settings_path)?;
        prompts::settings_saved(&self.settings_path.display().to_string());
        Ok(())
    }
}

/// Saved command as the user would type it, quoting arguments that need it.
fn shell_words(command: &str) -> String {
    settings::decode_command(command)
        .iter()
        .map(|arg| {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
                format!("{:?}", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print observed and theoretical entropy to stderr.
fn entropy_report(passwords: &[Zeroizing<String>], alphabet: &Alphabet, options: &Options) {
    let observed = passwords
        .iter()
        .map(|p| entropy::shannon(p.as_bytes()))
        .sum::<f64>()
        / passwords.len().max(1) as f64;
    let bits = entropy::theoretical_bits(options.length(), alphabet.len());

    let observed_label = if passwords.len() > 1 {
        format!("Observed: {:.3} bits/char (Shannon, mean of {})", observed, passwords.len())
    } else {
        format!("Observed: {:.3} bits/char (Shannon)", observed)
    };

    Panel::new("Entropy")
        .line(&observed_label)
        .line(&format!("Maximum:  {:.1} bits ({})", bits, entropy::strength(bits)))
        .line(&format!(
            "Length: {} \u{2022} Alphabet: {} chars \u{2022} Workers: {}",
            format_number(options.length()),
            alphabet.len(),
            options.workers()
        ))
        .line(&format!(
            "Mode: {} \u{2022} Source: {}",
            options.mode().name(),
            OsEntropy::source_name()
        ))
        .bottom()
        .eprint();
}
