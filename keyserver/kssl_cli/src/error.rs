//! Errors of the command-line front end.

use std::io;

use kssl_getopt::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad invocation of the tool itself.
    #[error("{0}")]
    Usage(String),
    #[error("invalid option specification: {0}")]
    Spec(#[from] SpecError),
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) | CliError::Spec(_) => 2,
            CliError::Io(_) => 3,
        }
    }
}
