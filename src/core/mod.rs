//! Core application functionality
//!
//! This module contains the application shell around the font engine:
//! - Command line parsing and command dispatch
//! - Error types and context helpers
//! - Settings and tunable constants

pub mod app;
pub mod cli;
pub mod errors;
pub mod settings;

// Re-export commonly used items
pub use app::run;
pub use cli::CliArgs;
pub use errors::{FontError, FontResult};
