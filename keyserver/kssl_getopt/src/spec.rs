//! Option specification: the short option string and the long option table.
//!
//! A [`ScanSpec`] is built once and is read-only afterwards, so a single
//! spec can back any number of concurrent scan sessions.
//!
//! # Short option string
//!
//! ```text
//! ":ab:c::"
//!  │││ │└┴─ c takes an optional argument (inline only)
//!  │││ └─── b takes a required argument
//!  ││└───── a takes no argument
//!  │└────── (option characters start here)
//!  └─────── leading ':' selects silent-error mode
//! ```

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::matcher::{self, LongMatch};
use crate::result::OptId;
use crate::scanner::Scanner;

/// Whether an option takes an argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Arity {
    #[default]
    None,
    Required,
    /// GNU extension. Binds only to an inline value (`-xVALUE`,
    /// `--name=VALUE`), never to the next vector entry.
    Optional,
}

impl Arity {
    #[inline]
    pub fn takes_argument(self) -> bool {
        !matches!(self, Arity::None)
    }
}

/// Caller-owned cell a long option writes its value into when matched.
///
/// Clones share the same storage. Pointing two descriptors that are
/// scanned concurrently at one cell is allowed but racy by nature; keeping
/// them apart is up to the caller.
#[derive(Clone, Debug, Default)]
pub struct FlagCell(Arc<AtomicI32>);

impl FlagCell {
    pub fn new(initial: i32) -> Self {
        FlagCell(Arc::new(AtomicI32::new(initial)))
    }

    pub fn get(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, value: i32) {
        self.0.store(value, Ordering::Relaxed);
    }
}

/// A long option descriptor (`struct option` in getopt terms).
#[derive(Clone, Debug)]
pub struct LongOpt {
    name: String,
    arity: Arity,
    id: OptId,
    flag: Option<(FlagCell, i32)>,
}

impl LongOpt {
    /// A long option reported with `id` when matched.
    pub fn new(name: impl Into<String>, arity: Arity, id: impl Into<OptId>) -> Self {
        LongOpt {
            name: name.into(),
            arity,
            id: id.into(),
            flag: None,
        }
    }

    /// A long option that stores `value` into `cell` when matched and is
    /// reported as [`OptId::FLAG`].
    pub fn flag(name: impl Into<String>, arity: Arity, cell: &FlagCell, value: i32) -> Self {
        LongOpt {
            name: name.into(),
            arity,
            id: OptId::FLAG,
            flag: Some((cell.clone(), value)),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// The id reported for this option; [`OptId::FLAG`] for flag options.
    #[inline]
    pub fn id(&self) -> OptId {
        self.id
    }

    pub fn flag_target(&self) -> Option<&FlagCell> {
        self.flag.as_ref().map(|(cell, _)| cell)
    }

    pub fn flag_value(&self) -> Option<i32> {
        self.flag.as_ref().map(|(_, value)| *value)
    }

    /// Writes the flag value if this is a flag option. Returns whether a
    /// write happened.
    pub(crate) fn store_flag(&self) -> bool {
        match &self.flag {
            Some((cell, value)) => {
                cell.set(*value);
                true
            }
            None => false,
        }
    }
}

/// Malformed option specification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("':' at byte {position} of the option string has no option character before it")]
    MissingOptionChar { position: usize },
    #[error("long option #{index} has an empty name")]
    EmptyLongName { index: usize },
    #[error("long option name `{name}` contains '='")]
    InvalidLongName { name: String },
    #[error("long option `--{name}` is declared more than once")]
    DuplicateLongName { name: String },
    #[error("short option `-{option}` is declared more than once")]
    DuplicateShortOption { option: char },
}

/// Immutable option specification.
#[derive(Clone, Debug)]
pub struct ScanSpec {
    short_opts: FxHashMap<char, Arity>,
    silent_errors: bool,
    long_opts: Vec<LongOpt>,
}

impl ScanSpec {
    /// Build a spec from a getopt option string and a long option table.
    pub fn new(short: &str, long_opts: Vec<LongOpt>) -> Result<Self, SpecError> {
        let (short_opts, silent_errors) = parse_short(short)?;

        let mut seen = FxHashSet::default();
        for (index, opt) in long_opts.iter().enumerate() {
            if opt.name.is_empty() {
                return Err(SpecError::EmptyLongName { index });
            }
            // `=` separates an inline value and can never be matched.
            if opt.name.contains('=') {
                return Err(SpecError::InvalidLongName {
                    name: opt.name.clone(),
                });
            }
            if !seen.insert(opt.name.as_str()) {
                return Err(SpecError::DuplicateLongName {
                    name: opt.name.clone(),
                });
            }
        }

        Ok(ScanSpec {
            short_opts,
            silent_errors,
            long_opts,
        })
    }

    /// Plain `getopt`: short options only.
    pub fn short_only(short: &str) -> Result<Self, SpecError> {
        Self::new(short, Vec::new())
    }

    /// `true` when the option string began with `:`. Callers should not
    /// print their default diagnostics in this mode.
    #[inline]
    pub fn silent_errors(&self) -> bool {
        self.silent_errors
    }

    /// Arity of a short option, or `None` if it is not declared.
    ///
    /// `:` is never an option character.
    pub fn short_arity(&self, option: char) -> Option<Arity> {
        if option == ':' {
            return None;
        }
        self.short_opts.get(&option).copied()
    }

    #[inline]
    pub fn long_opts(&self) -> &[LongOpt] {
        &self.long_opts
    }

    /// Resolve a (possibly abbreviated) long option name.
    pub fn resolve_long(&self, name: &str) -> LongMatch {
        matcher::resolve(&self.long_opts, name)
    }

    /// Start a scan session over `args`. `args[0]` is the program name and
    /// is never scanned.
    pub fn scan<'s, 'a, S: AsRef<str>>(&'s self, args: &'a [S]) -> Scanner<'s, 'a, S> {
        Scanner::new(self, args)
    }
}

/// Parse a getopt option string into an arity table and the silent flag.
fn parse_short(spec: &str) -> Result<(FxHashMap<char, Arity>, bool), SpecError> {
    let (silent, body, offset) = match spec.strip_prefix(':') {
        Some(rest) => (true, rest, 1),
        None => (false, spec, 0),
    };

    let mut table = FxHashMap::default();
    let mut chars = body.char_indices().peekable();
    while let Some((position, option)) = chars.next() {
        if option == ':' {
            return Err(SpecError::MissingOptionChar {
                position: position + offset,
            });
        }

        let mut arity = Arity::None;
        if chars.next_if(|&(_, c)| c == ':').is_some() {
            arity = Arity::Required;
            if chars.next_if(|&(_, c)| c == ':').is_some() {
                arity = Arity::Optional;
            }
        }

        if table.insert(option, arity).is_some() {
            return Err(SpecError::DuplicateShortOption { option });
        }
    }

    Ok((table, silent))
}

#[cfg(test)]
mod tests;
