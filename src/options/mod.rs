//! Shared command-line option groups
//!
//! This module holds the flag group definitions, the builder that registers
//! them on a clap command, and the typed results of parsing.

pub mod builder;
pub mod groups;
pub mod parsed;

// Re-export main types
pub use builder::*;
pub use groups::{OptionGroup, DEFAULT_SELECTION, DEFAULT_SKIP, DEFAULT_STRIDE};
pub use parsed::*;
