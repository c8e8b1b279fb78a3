//! Schema-driven parsing of a subcommand's raw argument tail.
//!
//! Each command declares its flags on a [`FlagSet`] and parses the arguments
//! that follow its name on the command line. The set is backed by a
//! `clap::Command` built from the schema, so unknown flags, missing values
//! and stray positional tokens are all rejected with the offending token
//! named in the message.

pub mod error;

pub use error::{FlagError, FlagResult};

use clap::{Arg, ArgAction, ArgMatches, ColorChoice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    String,
}

#[derive(Debug, Clone)]
pub struct FlagSpec {
    pub name: &'static str,
    pub kind: FlagKind,
    pub default: Option<&'static str>,
    pub required: bool,
    pub help: &'static str,
}

#[derive(Debug, Clone)]
pub struct FlagSet {
    command: &'static str,
    specs: Vec<FlagSpec>,
}

impl FlagSet {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            specs: Vec::new(),
        }
    }

    /// A presence flag, `false` unless given.
    pub fn bool(self, name: &'static str, help: &'static str) -> Self {
        self.with(FlagSpec {
            name,
            kind: FlagKind::Bool,
            default: None,
            required: false,
            help,
        })
    }

    pub fn string(self, name: &'static str, help: &'static str) -> Self {
        self.with(FlagSpec {
            name,
            kind: FlagKind::String,
            default: None,
            required: false,
            help,
        })
    }

    pub fn string_or(self, name: &'static str, default: &'static str, help: &'static str) -> Self {
        self.with(FlagSpec {
            name,
            kind: FlagKind::String,
            default: Some(default),
            required: false,
            help,
        })
    }

    pub fn required_string(self, name: &'static str, help: &'static str) -> Self {
        self.with(FlagSpec {
            name,
            kind: FlagKind::String,
            default: None,
            required: true,
            help,
        })
    }

    pub fn with(mut self, spec: FlagSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn parse<I, S>(&self, args: I) -> FlagResult<Flags>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let matches = self
            .to_clap()
            .try_get_matches_from(args)
            .map_err(|e| FlagError::from_clap(self.command, &e))?;

        // Required flags are checked here rather than through clap so the
        // error names the flag instead of printing a usage block.
        if let Some(missing) = self
            .specs
            .iter()
            .find(|spec| spec.required && !matches.contains_id(spec.name))
        {
            return Err(FlagError::MissingRequired {
                command: self.command.to_string(),
                flag: missing.name.to_string(),
            });
        }

        Ok(Flags { matches })
    }

    fn to_clap(&self) -> clap::Command {
        let mut command = clap::Command::new(self.command)
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .color(ColorChoice::Never);

        for spec in &self.specs {
            let arg = Arg::new(spec.name).long(spec.name).help(spec.help);
            let arg = match spec.kind {
                FlagKind::Bool => arg.action(ArgAction::SetTrue),
                FlagKind::String => {
                    let arg = arg.action(ArgAction::Set).num_args(1).value_name(spec.name);
                    match spec.default {
                        Some(default) => arg.default_value(default),
                        None => arg,
                    }
                }
            };
            command = command.arg(arg);
        }

        command
    }
}

/// Parsed flag values. Immutable once produced.
#[derive(Debug, Clone)]
pub struct Flags {
    matches: ArgMatches,
}

impl Flags {
    pub fn bool(&self, name: &str) -> bool {
        self.matches
            .try_get_one::<bool>(name)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.matches
            .try_get_one::<String>(name)
            .ok()
            .flatten()
            .cloned()
    }

    /// Like [`Flags::string`], treating an empty value as absent.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        self.string(name).filter(|value| !value.trim().is_empty())
    }
}
