//! Main CLI application

use crate::error::OptionsError;
use crate::options::{LoosOptions, ParsedArgs};
use anyhow::Context;
use clap::{value_parser, Arg};
use clap_complete::Shell;
use std::io::{self, Write};

/// Text shown for `--fullhelp`
pub const FULLHELP: &str = "\
SYNOPSIS
\tShow how a tool would see its trajectory and model selection options.

DESCRIPTION
\tRegisters the model selection and trajectory option groups, parses
\tthe command line and prints the resulting values as YAML on stdout.

EXAMPLES
\tloos-options --model foo.pdb --sel 'name CA' --traj a.dcd b.dcd --skip 10 --stride 2
\t\tShow every option with an explicit value

\tloos-options --completions bash > loos-options.bash
\t\tWrite a bash completion script
";

/// CLI application
pub struct App {
    /// Options with every group registered
    options: LoosOptions,
}

impl App {
    /// Create an app for the running program
    pub fn new() -> Result<Self, OptionsError> {
        Self::with_options(LoosOptions::new(Some(FULLHELP)))
    }

    /// Create an app on top of existing options
    pub fn with_options(options: LoosOptions) -> Result<Self, OptionsError> {
        let mut options = options.about("Inspect shared trajectory and selection options");
        options
            .model_selection_options()?
            .traj_options()?
            .arg(
                Arg::new("completions")
                    .long("completions")
                    .value_name("SHELL")
                    .help("Print a shell completion script and exit")
                    .value_parser(value_parser!(Shell)),
            )?;

        Ok(App { options })
    }

    /// The registered options
    pub fn options(&self) -> &LoosOptions {
        &self.options
    }

    /// Run the application with command line arguments
    pub fn run(self) -> anyhow::Result<()> {
        let parsed = self.options.parse_args();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.report(&parsed, &mut out)
    }

    /// Write either a completion script or the parsed values to `out`
    pub fn report(&self, parsed: &ParsedArgs, out: &mut dyn Write) -> anyhow::Result<()> {
        if let Some(shell) = parsed.matches().get_one::<Shell>("completions").copied() {
            self.options
                .write_completions(shell, out)
                .context("Failed to write completion script")?;
            return Ok(());
        }

        let yaml = serde_yaml::to_string(parsed).context("Failed to serialize parsed options")?;
        out.write_all(yaml.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Run the CLI application with process arguments
pub fn run() -> anyhow::Result<()> {
    App::new()?.run()
}
