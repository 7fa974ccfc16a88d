//! CLI support for caustic-syntax
//!
//! Provides programmatic access to the `caustic` commands so other tools can
//! embed them.

mod inspect;
mod path;

pub use inspect::{InspectOptions, InspectReport, execute_inspect};
pub use path::{PathOptions, execute_path};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Tree construction or decoding error
    #[error("{0}")]
    Syntax(#[from] crate::SyntaxError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No input provided
    #[error("No input provided. Use --input or pipe a transaction to stdin.")]
    NoInput,
}
