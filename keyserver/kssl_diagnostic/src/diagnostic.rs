//! Structured diagnostic for a scan error.

use std::fmt;

use kssl_getopt::{OptName, ScanResult};

/// Which getopt error a diagnostic describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    IllegalOption,
    MissingArgument,
}

/// A scan error, ready to be rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanDiagnostic<'a> {
    kind: DiagnosticKind,
    option: OptName<'a>,
}

impl<'a> ScanDiagnostic<'a> {
    /// Returns `None` for results that are not errors.
    pub fn from_result(result: &ScanResult<'a>) -> Option<Self> {
        let kind = match result {
            ScanResult::UnknownOption(_) => DiagnosticKind::IllegalOption,
            ScanResult::MissingArgument(_) => DiagnosticKind::MissingArgument,
            _ => return None,
        };
        Some(ScanDiagnostic {
            kind,
            option: result.error_name()?,
        })
    }

    #[inline]
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    #[inline]
    pub fn option(&self) -> OptName<'a> {
        self.option
    }
}

impl fmt::Display for ScanDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::IllegalOption => write!(f, "illegal option -- {}", self.option),
            DiagnosticKind::MissingArgument => {
                write!(f, "option requires an argument -- {}", self.option)
            }
        }
    }
}

/// Program name as shown in diagnostics: `argv[0]` after its last `/`.
pub fn progname(argv0: &str) -> &str {
    argv0.rsplit_once('/').map_or(argv0, |(_, name)| name)
}

#[cfg(test)]
mod tests;
