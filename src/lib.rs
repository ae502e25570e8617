//! loos-options - shared command-line options for trajectory analysis tools
//!
//! Tools build a [`LoosOptions`], register the option groups they need and
//! get back a typed [`ParsedArgs`].

// Public modules
pub mod cli;
pub mod error;
pub mod options;

// Re-export commonly used types
pub use error::{OptionsError, Result};
pub use options::{LoosOptions, ModelSelection, OptionGroup, ParsedArgs, TrajectoryArgs};

/// Current version of loos-options
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
