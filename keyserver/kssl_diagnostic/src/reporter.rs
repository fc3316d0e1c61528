//! Writes scan diagnostics to a sink.

use std::io::{self, Write};

use kssl_getopt::{ScanResult, ScanSpec};
use tracing::trace;

use crate::diagnostic::{progname, ScanDiagnostic};

/// Formats and writes scan errors for one program.
///
/// `enabled` plays the role of the classic `opterr` variable; a silent
/// [`ScanSpec`] (leading `:`) suppresses output independently of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reporter {
    progname: String,
    enabled: bool,
}

impl Reporter {
    pub fn new(progname: impl Into<String>) -> Self {
        Reporter {
            progname: progname.into(),
            enabled: true,
        }
    }

    /// Reporter named after `args[0]`, directories stripped.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let argv0 = args.first().map_or("", AsRef::as_ref);
        Self::new(progname(argv0))
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[inline]
    pub fn progname(&self) -> &str {
        &self.progname
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Full message line (without newline) for an error result, or `None`
    /// if nothing should be printed.
    pub fn message(&self, spec: &ScanSpec, result: &ScanResult<'_>) -> Option<String> {
        let diagnostic = ScanDiagnostic::from_result(result)?;
        if !self.enabled || spec.silent_errors() {
            trace!(%diagnostic, "diagnostic suppressed");
            return None;
        }
        Some(format!("{}: {diagnostic}", self.progname))
    }

    /// Write the message for `result` to `out`. Returns whether anything
    /// was written.
    pub fn emit<W: Write>(
        &self,
        spec: &ScanSpec,
        result: &ScanResult<'_>,
        out: &mut W,
    ) -> io::Result<bool> {
        let Some(message) = self.message(spec, result) else {
            return Ok(false);
        };
        writeln!(out, "{message}")?;
        Ok(true)
    }
}
