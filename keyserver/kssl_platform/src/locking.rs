//! Lock table behind a crypto library's locking callbacks.
//!
//! The table is owned by the caller and shared through an [`Arc`]. Setup
//! and teardown are an explicit pair:
//!
//! ```text
//! let table = Arc::new(LockTable::new(count));
//! thread_setup(Arc::clone(&table))?;   // once, at process start
//! ...
//! thread_cleanup();                    // once, at shutdown
//! ```
//!
//! Locking is guard-based: the lock callback maps to [`LockTable::lock`],
//! and dropping the guard is the unlock.

use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::{Mutex, MutexGuard, RwLock};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LockError {
    #[error("lock {index} is out of range for a table of {len} locks")]
    OutOfRange { index: usize, len: usize },
    #[error("a lock table is already installed")]
    AlreadyInstalled,
}

/// Fixed-size table of mutexes addressed by index.
#[derive(Debug)]
pub struct LockTable {
    locks: Box<[Mutex<()>]>,
}

impl LockTable {
    pub fn new(count: usize) -> Self {
        LockTable {
            locks: (0..count).map(|_| Mutex::new(())).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    /// Block until lock `index` is held.
    pub fn lock(&self, index: usize) -> Result<MutexGuard<'_, ()>, LockError> {
        Ok(self.slot(index)?.lock())
    }

    /// Take lock `index` if it is free.
    pub fn try_lock(&self, index: usize) -> Result<Option<MutexGuard<'_, ()>>, LockError> {
        Ok(self.slot(index)?.try_lock())
    }

    fn slot(&self, index: usize) -> Result<&Mutex<()>, LockError> {
        self.locks.get(index).ok_or(LockError::OutOfRange {
            index,
            len: self.locks.len(),
        })
    }
}

static INSTALLED: RwLock<Option<Arc<LockTable>>> = parking_lot::const_rwlock(None);

/// Install `table` as the process-wide lock table.
pub fn thread_setup(table: Arc<LockTable>) -> Result<(), LockError> {
    let mut slot = INSTALLED.write();
    if slot.is_some() {
        return Err(LockError::AlreadyInstalled);
    }
    debug!(locks = table.len(), "lock table installed");
    *slot = Some(table);
    Ok(())
}

/// Remove the process-wide lock table. Returns `false` if none was
/// installed.
pub fn thread_cleanup() -> bool {
    let removed = INSTALLED.write().take();
    if let Some(table) = &removed {
        debug!(locks = table.len(), "lock table removed");
    }
    removed.is_some()
}

/// The currently installed table, if any.
pub fn installed() -> Option<Arc<LockTable>> {
    INSTALLED.read().clone()
}

/// Identifier of the calling thread (the id callback).
pub fn thread_id() -> ThreadId {
    thread::current().id()
}
