//! Flag group definitions
//!
//! Each group is a bundle of related options that tools register together.

use clap::{value_parser, Arg, ArgAction};

/// Id of the full help flag
pub const FULLHELP: &str = "fullhelp";
/// Id of the model file option
pub const MODEL: &str = "model";
/// Id of the selection option
pub const SEL: &str = "sel";
/// Id of the trajectory file list option
pub const TRAJ: &str = "traj";
/// Id of the skip option
pub const SKIP: &str = "skip";
/// Id of the stride option
pub const STRIDE: &str = "stride";

/// Selection used when `--sel` is omitted
pub const DEFAULT_SELECTION: &str = "all";
/// Frames skipped when `--skip` is omitted
pub const DEFAULT_SKIP: i64 = 0;
/// Step used when `--stride` is omitted
pub const DEFAULT_STRIDE: i64 = 1;

/// Named bundles of options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionGroup {
    /// `--model` and `--sel`
    ModelSelection,
    /// `--traj`, `--skip` and `--stride`
    Trajectory,
}

impl OptionGroup {
    /// Human readable group name, used as the help heading
    pub fn name(self) -> &'static str {
        match self {
            OptionGroup::ModelSelection => "Model selection",
            OptionGroup::Trajectory => "Trajectory",
        }
    }

    /// Build the argument definitions for this group
    pub fn args(self) -> Vec<Arg> {
        let args = match self {
            OptionGroup::ModelSelection => vec![
                Arg::new(MODEL)
                    .long(MODEL)
                    .value_name("MODEL")
                    .help("Model file describing system contents"),
                Arg::new(SEL)
                    .long(SEL)
                    .value_name("SEL")
                    .help("Use this selection for computation")
                    .default_value(DEFAULT_SELECTION),
            ],
            OptionGroup::Trajectory => vec![
                Arg::new(TRAJ)
                    .long(TRAJ)
                    .value_name("TRAJ")
                    .help("Filename of trajectory or trajectories")
                    .num_args(1..)
                    .action(ArgAction::Append),
                Arg::new(SKIP)
                    .long(SKIP)
                    .value_name("SKIP")
                    .help("Skip frames from the trajectory start")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .default_value("0"),
                Arg::new(STRIDE)
                    .long(STRIDE)
                    .value_name("STRIDE")
                    .help("Step through the trajectory by this")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .default_value("1"),
            ],
        };

        args.into_iter()
            .map(|arg| arg.help_heading(self.name()))
            .collect()
    }
}

/// Build the `--fullhelp` switch
pub fn fullhelp_arg() -> Arg {
    Arg::new(FULLHELP)
        .long(FULLHELP)
        .help("Print the full description of this tool")
        .action(ArgAction::SetTrue)
}
