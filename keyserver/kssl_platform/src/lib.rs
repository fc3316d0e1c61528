//! Process-level setup helpers used next to the option scanner.
//!
//! - [`locking`]: a table of mutexes installed once at start-up and removed
//!   at shutdown, backing the locking and thread-id callbacks a C crypto
//!   library expects.
//! - [`clock`]: microsecond wall-clock time (`gettimeofday`).
//!
//! Neither has anything to do with option scanning; they live here so the
//! keyserver binaries can do all one-shot process setup from one crate.

pub mod clock;
pub mod locking;

pub use clock::TimeVal;
pub use locking::{installed, thread_cleanup, thread_id, thread_setup, LockError, LockTable};
