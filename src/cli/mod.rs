//! CLI interface
//!
//! The `loos-options` binary: registers every option group and reports
//! what was parsed.

pub mod app;

// Re-export main types
pub use app::*;
