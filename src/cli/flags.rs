use pgen::options::{Feature, FeatureSet, Mode};

/// What `-c/--command` should do with the saved command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandMode {
    #[default]
    None,
    /// `-c get`: print the saved command.
    Get,
    /// `-c` alone: forget the saved command.
    Clear,
    /// `-c <FLAGS...>`: save the other flags as the default command.
    Set,
}

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub save: bool,
    pub command: CommandMode,
    pub classes: FeatureSet,
    pub mode: Option<Mode>,
    pub entropy: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub threads: Option<i64>,
    pub custom: Option<String>,
    pub exclude: Option<String>,
}

impl CliFlags {
    /// Anything that shapes the generated output.
    pub fn has_explicit_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.threads.is_some()
            || self.saved
            || self.default
            || self.entropy
            || self.mode.is_some()
            || self.classes != FeatureSet::empty()
            || self.custom.is_some()
            || self.exclude.is_some()
    }

    pub fn enable_class(&mut self, feature: Feature) {
        self.classes.enable(feature);
    }
}
