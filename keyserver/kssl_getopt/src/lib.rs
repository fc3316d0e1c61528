//! Reentrant POSIX `getopt` / GNU `getopt_long` option scanner.
//!
//! The scanner is a pull-based state machine over a borrowed argument
//! vector. Every call to [`Scanner::next_option`] yields exactly one
//! [`ScanResult`]: a recognised option, a structured error, or a terminal
//! condition. Nothing is printed and no global state is touched; turning
//! errors into text is the caller's job (see `kssl_diagnostic`).
//!
//! # Architecture
//!
//! ```text
//! "ab:c::" + [LongOpt]
//!     │
//!     ▼
//! ScanSpec::new() ──► ScanSpec (immutable, Sync)
//!     │
//!     ▼
//! spec.scan(&argv) ──► Scanner (one per session, owns the cursor)
//!     │
//!     ▼
//! next_option() ──► ScanResult, repeatedly, until NonOption / Done
//! ```
//!
//! # Example
//!
//! ```
//! use kssl_getopt::{Arity, LongOpt, OptId, ScanResult, ScanSpec};
//!
//! let spec = ScanSpec::new("vo:", vec![LongOpt::new("output", Arity::Required, 'o')])?;
//! let argv = ["prog", "-v", "--out=a.pem", "file"];
//! let mut scanner = spec.scan(&argv);
//!
//! assert_eq!(scanner.next_option().id(), Some(OptId::from('v')));
//! assert_eq!(scanner.next_option().argument(), Some("a.pem"));
//! assert_eq!(scanner.next_option(), ScanResult::NonOption);
//! assert_eq!(scanner.operands(), &["file"]);
//! # Ok::<(), kssl_getopt::SpecError>(())
//! ```

mod matcher;
mod result;
mod scanner;
mod spec;

pub use matcher::LongMatch;
pub use result::{OptId, OptName, ScanResult};
pub use scanner::Scanner;
pub use spec::{Arity, FlagCell, LongOpt, ScanSpec, SpecError};
