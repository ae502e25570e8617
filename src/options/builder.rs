//! Option group builder
//!
//! Owns a clap command, registers the shared flag groups on it and turns the
//! matches into a [`ParsedArgs`].

use crate::error::{OptionsError, Result};
use crate::options::groups::{fullhelp_arg, OptionGroup};
use crate::options::parsed::ParsedArgs;
use clap::{Arg, Command};
use clap_complete::{generate, Shell};
use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process;

/// Builder for a tool's command line
#[derive(Debug, Clone)]
pub struct LoosOptions {
    /// The clap command holding every registered flag
    command: Command,
    /// Text printed for `--fullhelp`
    fullhelp: Option<String>,
    /// Groups registered so far, in order
    groups: Vec<OptionGroup>,
}

impl LoosOptions {
    /// Create options for the running program, optionally with full help text
    pub fn new(fullhelp: Option<&str>) -> Self {
        let name = env::args_os()
            .next()
            .as_deref()
            .and_then(|arg0| Path::new(arg0).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

        let mut options = Self::with_name(name);
        if let Some(text) = fullhelp.filter(|text| !text.is_empty()) {
            // Nothing is registered yet, so the switch cannot clash
            options.push_arg(fullhelp_arg());
            options.fullhelp = Some(text.to_string());
        }
        options
    }

    /// Create options with an explicit program name
    pub fn with_name(name: impl Into<String>) -> Self {
        let name: String = name.into();
        LoosOptions {
            command: Command::new(name),
            fullhelp: None,
            groups: Vec::new(),
        }
    }

    /// Set the full help text, builder style
    pub fn with_fullhelp(mut self, text: impl Into<String>) -> Result<Self> {
        self.set_fullhelp(text)?;
        Ok(self)
    }

    /// Set the one-line description shown in usage
    pub fn about(mut self, about: impl Into<String>) -> Self {
        let about: String = about.into();
        self.command = self.command.about(about);
        self
    }

    /// Store the full help text, registering `--fullhelp` the first time
    pub fn set_fullhelp(&mut self, text: impl Into<String>) -> Result<&mut Self> {
        if self.fullhelp.is_none() {
            let arg = fullhelp_arg();
            self.ensure_unique(&arg)?;
            self.push_arg(arg);
        }
        self.fullhelp = Some(text.into());
        Ok(self)
    }

    /// Register `--model` and `--sel`
    pub fn model_selection_options(&mut self) -> Result<&mut Self> {
        self.register(OptionGroup::ModelSelection)
    }

    /// Register `--traj`, `--skip` and `--stride`
    pub fn traj_options(&mut self) -> Result<&mut Self> {
        self.register(OptionGroup::Trajectory)
    }

    /// Register a tool-specific argument
    pub fn arg(&mut self, arg: Arg) -> Result<&mut Self> {
        self.ensure_unique(&arg)?;
        self.push_arg(arg);
        Ok(self)
    }

    /// Register every flag of a group
    ///
    /// Nothing is added if any flag of the group is already present.
    pub fn register(&mut self, group: OptionGroup) -> Result<&mut Self> {
        let args = group.args();
        for arg in &args {
            self.ensure_unique(arg)?;
        }
        for arg in args {
            self.push_arg(arg);
        }
        self.groups.push(group);
        Ok(self)
    }

    /// The command as currently specified
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Full help text, if any
    pub fn fullhelp(&self) -> Option<&str> {
        self.fullhelp.as_deref()
    }

    /// Groups registered so far
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// Render the help message for the current specification
    pub fn render_usage(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Parse the given arguments; the first item is the program name.
    pub fn try_parse_from<I, T>(&self, args: I) -> Result<ParsedArgs>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() <= 1 {
            return Err(OptionsError::NoArguments {
                usage: self.render_usage(),
            });
        }

        let matches = self.command.clone().try_get_matches_from(args)?;
        let parsed = ParsedArgs::from_matches(matches, self.fullhelp.is_some(), &self.groups);

        match (&self.fullhelp, parsed.fullhelp) {
            (Some(text), true) => Err(OptionsError::FullHelp(text.clone())),
            _ => Ok(parsed),
        }
    }

    /// Parse the process arguments, exiting on help, full help or errors
    pub fn parse_args(&self) -> ParsedArgs {
        match self.try_parse_from(env::args_os()) {
            Ok(parsed) => parsed,
            Err(OptionsError::Usage(e)) => e.exit(),
            Err(OptionsError::FullHelp(text)) => {
                eprint!("{}", text);
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{}", e.to_string().trim_end());
                process::exit(e.exit_code());
            }
        }
    }

    /// Write a completion script for `shell` covering every registered flag
    pub fn write_completions(&self, shell: Shell, out: &mut dyn Write) -> Result<()> {
        let mut command = self.command.clone();
        let name = command.get_name().to_string();
        generate(shell, &mut command, name, out);
        out.flush()?;
        Ok(())
    }

    fn ensure_unique(&self, arg: &Arg) -> Result<()> {
        let id = arg.get_id();
        let clash = self.command.get_arguments().any(|existing| {
            existing.get_id() == id
                || (arg.get_long().is_some() && existing.get_long() == arg.get_long())
        });

        if clash {
            let name = arg.get_long().unwrap_or(id.as_str());
            return Err(OptionsError::DuplicateFlag(name.to_string()));
        }
        Ok(())
    }

    fn push_arg(&mut self, arg: Arg) {
        self.command = std::mem::take(&mut self.command).arg(arg);
    }
}
