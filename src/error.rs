//! Error types for loos-options

use std::io;
use thiserror::Error;

/// Result type alias for option handling
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Every way option handling can end without a parsed result
#[derive(Error, Debug)]
pub enum OptionsError {
    /// The program was run without any arguments; carries the rendered help
    #[error("{usage}")]
    NoArguments { usage: String },

    /// `--fullhelp` was requested; carries the full help text
    #[error("{0}")]
    FullHelp(String),

    /// Malformed, unknown or missing arguments, as reported by clap
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// A flag with this name is already registered
    #[error("Option '--{0}' is already registered")]
    DuplicateFlag(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl OptionsError {
    /// Process exit code for this condition
    pub fn exit_code(&self) -> i32 {
        match self {
            OptionsError::NoArguments { .. } => 1,
            OptionsError::FullHelp(_) => 0,
            OptionsError::Usage(e) => e.exit_code(),
            OptionsError::DuplicateFlag(_) | OptionsError::Io(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let no_args = OptionsError::NoArguments {
            usage: "Usage: tool".to_string(),
        };
        assert_eq!(no_args.exit_code(), 1);
        assert_eq!(OptionsError::FullHelp("text".to_string()).exit_code(), 0);
        assert_eq!(OptionsError::DuplicateFlag("traj".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_display() {
        let err = OptionsError::DuplicateFlag("skip".to_string());
        assert_eq!(err.to_string(), "Option '--skip' is already registered");

        let err = OptionsError::FullHelp("Long description\n".to_string());
        assert_eq!(err.to_string(), "Long description\n");
    }
}
