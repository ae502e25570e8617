//! Common test utilities

use assert_cmd::Command;
use loos_options::LoosOptions;

/// Command for the `loos-options` binary
pub fn loos_options_cmd() -> Command {
    Command::cargo_bin("loos-options").unwrap()
}

/// Options with both groups and full help registered
pub fn full_options(fullhelp: &str) -> LoosOptions {
    let mut opts = LoosOptions::with_name("tool").with_fullhelp(fullhelp).unwrap();
    opts.model_selection_options().unwrap();
    opts.traj_options().unwrap();
    opts
}
