//! Diagnostics for option scanning errors.
//!
//! The scanner in `kssl_getopt` only returns structured results. This crate
//! is the thin caller-owned layer that turns error results into the
//! traditional getopt messages and writes them out:
//!
//! ```text
//! prog: illegal option -- x
//! prog: option requires an argument -- o
//! ```
//!
//! Messages are suppressed when the option string started with `:` (silent
//! mode) or when the reporter is disabled (the `opterr = 0` switch).

mod diagnostic;
mod reporter;

pub use diagnostic::{progname, DiagnosticKind, ScanDiagnostic};
pub use reporter::Reporter;
