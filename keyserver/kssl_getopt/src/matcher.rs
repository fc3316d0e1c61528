//! Long option name resolution.
//!
//! Resolution order: an exact name match wins outright; otherwise a name
//! that is a prefix of exactly one declared option selects it; otherwise,
//! among several prefix candidates, the first one in declaration order is
//! selected. That last rule is lenient on purpose: ambiguous abbreviations
//! are accepted, not rejected.

use smallvec::SmallVec;

use crate::spec::LongOpt;

/// How a long option name matched the declared table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LongMatch {
    /// The name equals a declared option.
    Exact(usize),
    /// The name abbreviates exactly one declared option.
    Unique(usize),
    /// The name abbreviates several options; `candidates` lists them in
    /// declaration order and the first one is selected.
    Ambiguous { candidates: SmallVec<[usize; 4]> },
    /// Nothing matched, or the name was empty.
    NoMatch,
}

impl LongMatch {
    /// Declaration index of the selected option.
    pub fn selected(&self) -> Option<usize> {
        match self {
            LongMatch::Exact(index) | LongMatch::Unique(index) => Some(*index),
            LongMatch::Ambiguous { candidates } => candidates.first().copied(),
            LongMatch::NoMatch => None,
        }
    }
}

/// Match `name` against `opts` (case-sensitive, byte-wise).
pub(crate) fn resolve(opts: &[LongOpt], name: &str) -> LongMatch {
    if name.is_empty() {
        return LongMatch::NoMatch;
    }

    let mut candidates: SmallVec<[usize; 4]> = SmallVec::new();
    for (index, opt) in opts.iter().enumerate() {
        if opt.name() == name {
            return LongMatch::Exact(index);
        }
        if opt.name().starts_with(name) {
            candidates.push(index);
        }
    }

    match candidates.len() {
        0 => LongMatch::NoMatch,
        1 => LongMatch::Unique(candidates[0]),
        _ => LongMatch::Ambiguous { candidates },
    }
}
