//! Typed parse results
//!
//! clap hands back a bag of named values; these structures give each
//! registered flag a named, typed field instead.

use crate::options::groups::{
    OptionGroup, DEFAULT_SELECTION, DEFAULT_SKIP, DEFAULT_STRIDE, FULLHELP, MODEL, SEL, SKIP,
    STRIDE, TRAJ,
};
use clap::ArgMatches;
use serde::Serialize;

/// Values of the model selection group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSelection {
    /// Model file describing system contents
    pub model: Option<String>,
    /// Atom selection, `"all"` unless given
    pub sel: String,
}

impl ModelSelection {
    fn from_matches(matches: &ArgMatches) -> Self {
        ModelSelection {
            model: matches.get_one::<String>(MODEL).cloned(),
            sel: matches
                .get_one::<String>(SEL)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SELECTION.to_string()),
        }
    }
}

/// Values of the trajectory group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrajectoryArgs {
    /// Trajectory filenames, in the order given
    pub traj: Vec<String>,
    /// Frames to skip from the trajectory start
    pub skip: i64,
    /// Step size through the trajectory
    pub stride: i64,
}

impl TrajectoryArgs {
    fn from_matches(matches: &ArgMatches) -> Self {
        TrajectoryArgs {
            traj: matches
                .get_many::<String>(TRAJ)
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            skip: matches.get_one::<i64>(SKIP).copied().unwrap_or(DEFAULT_SKIP),
            stride: matches
                .get_one::<i64>(STRIDE)
                .copied()
                .unwrap_or(DEFAULT_STRIDE),
        }
    }

    /// Frame indices selected by `skip` and `stride` out of `nframes` frames.
    ///
    /// A negative skip starts at the first frame; a stride below one steps by one.
    pub fn frames(&self, nframes: usize) -> impl Iterator<Item = usize> {
        let skip = usize::try_from(self.skip.max(0)).unwrap_or(usize::MAX);
        let stride = usize::try_from(self.stride.max(1)).unwrap_or(usize::MAX);
        (skip..nframes).step_by(stride)
    }
}

/// Result of parsing the command line
#[derive(Debug, Clone, Serialize)]
pub struct ParsedArgs {
    /// Whether `--fullhelp` was given
    #[serde(skip)]
    pub(crate) fullhelp: bool,
    /// Present when the model selection group was registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_selection: Option<ModelSelection>,
    /// Present when the trajectory group was registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<TrajectoryArgs>,
    #[serde(skip)]
    matches: ArgMatches,
}

impl ParsedArgs {
    /// Assemble typed values for the registered groups
    pub(crate) fn from_matches(
        matches: ArgMatches,
        has_fullhelp: bool,
        groups: &[OptionGroup],
    ) -> Self {
        let fullhelp = has_fullhelp && matches.get_flag(FULLHELP);
        let model_selection = groups
            .contains(&OptionGroup::ModelSelection)
            .then(|| ModelSelection::from_matches(&matches));
        let trajectory = groups
            .contains(&OptionGroup::Trajectory)
            .then(|| TrajectoryArgs::from_matches(&matches));

        ParsedArgs {
            fullhelp,
            model_selection,
            trajectory,
            matches,
        }
    }

    /// Raw matches, for tool-specific options added with `LoosOptions::arg`
    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }
}
