//! The scan session: a cursor over one argument vector.
//!
//! # Design
//!
//! The cursor is two numbers: `index`, the argument under examination, and
//! `cluster_pos`, the byte offset of the next option character inside a
//! clustered short option argument (`-abc`). `index` only ever moves
//! forward, and while a cluster is being consumed it stays on the cluster's
//! argument until the last character has been handed out.

use tracing::{debug, trace};

use crate::matcher::LongMatch;
use crate::result::{OptId, OptName, ScanResult};
use crate::spec::{Arity, ScanSpec};

/// Per-session scanner state. Borrows the spec and the argument vector.
///
/// Error results do not end the session; keep calling
/// [`next_option()`](Self::next_option) until a terminal result.
#[derive(Clone, Debug)]
pub struct Scanner<'s, 'a, S> {
    spec: &'s ScanSpec,
    args: &'a [S],
    /// Next argument to examine. Starts at 1: `args[0]` is the program name.
    index: usize,
    /// Byte offset into `args[index]` while mid-cluster. Only `Some` when at
    /// least one character remains at that offset.
    cluster_pos: Option<usize>,
    /// Most recently examined option (`optopt`).
    last_option: Option<OptName<'a>>,
    /// Set once `--` has been consumed; makes `Done` sticky.
    finished: bool,
}

impl<'s, 'a, S: AsRef<str>> Scanner<'s, 'a, S> {
    pub fn new(spec: &'s ScanSpec, args: &'a [S]) -> Self {
        Scanner {
            spec,
            args,
            index: 1,
            cluster_pos: None,
            last_option: None,
            finished: false,
        }
    }

    /// Advance by exactly one option or terminal condition.
    ///
    /// Terminal results (`NonOption`, `Done`) never move the cursor, so
    /// calling again returns the same result.
    pub fn next_option(&mut self) -> ScanResult<'a> {
        if self.finished {
            return ScanResult::Done;
        }
        if let Some(pos) = self.cluster_pos {
            return self.short_option(pos);
        }

        let Some(arg) = self.arg(self.index) else {
            trace!(index = self.index, "argument vector exhausted");
            return ScanResult::Done;
        };

        if arg == "--" {
            trace!(index = self.index, "end of options marker");
            self.index += 1;
            self.finished = true;
            return ScanResult::Done;
        }
        if let Some(body) = arg.strip_prefix("--") {
            return self.long_option(body);
        }
        if arg.len() < 2 || !arg.starts_with('-') {
            trace!(index = self.index, arg, "operand ends option scanning");
            return ScanResult::NonOption;
        }

        self.short_option(1)
    }

    /// Clear cluster state and re-enable scanning after `--`, keeping the
    /// current index. A cluster that was partly consumed is rescanned from
    /// its first character.
    pub fn reset(&mut self) {
        trace!(index = self.index, "scanner reset");
        self.cluster_pos = None;
        self.finished = false;
    }

    /// Index of the next argument to examine (`optind`).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The most recently examined option (`optopt`), for error messages.
    #[inline]
    pub fn last_option(&self) -> Option<OptName<'a>> {
        self.last_option
    }

    /// Arguments from the current index on. After a terminal result these
    /// are the operands.
    pub fn operands(&self) -> &'a [S] {
        let args: &'a [S] = self.args;
        args.get(self.index..).unwrap_or(&[])
    }

    #[inline]
    pub fn spec(&self) -> &'s ScanSpec {
        self.spec
    }

    fn arg(&self, index: usize) -> Option<&'a str> {
        let args: &'a [S] = self.args;
        args.get(index).map(AsRef::as_ref)
    }

    /// Move to the next character of the cluster, or past the argument if
    /// `next` is its end.
    fn advance_cluster(&mut self, arg: &str, next: usize) {
        if next >= arg.len() {
            self.cluster_pos = None;
            self.index += 1;
        } else {
            self.cluster_pos = Some(next);
        }
    }

    /// Leave the current argument regardless of what remains in it.
    fn end_cluster(&mut self) {
        self.cluster_pos = None;
        self.index += 1;
    }

    fn short_option(&mut self, pos: usize) -> ScanResult<'a> {
        let option = self
            .arg(self.index)
            .and_then(|arg| Some((arg, arg.get(pos..)?.chars().next()?)));
        let Some((arg, option)) = option else {
            // Cluster offset no longer points at a character.
            self.end_cluster();
            return self.next_option();
        };

        let next = pos + option.len_utf8();
        let remainder = &arg[next..];
        self.last_option = Some(OptName::Short(option));

        let Some(arity) = self.spec.short_arity(option) else {
            trace!(index = self.index, %option, "unknown short option");
            self.advance_cluster(arg, next);
            return ScanResult::UnknownOption(OptName::Short(option));
        };
        trace!(index = self.index, %option, ?arity, "short option");

        let argument = match arity {
            Arity::None => {
                self.advance_cluster(arg, next);
                None
            }
            Arity::Optional => {
                self.end_cluster();
                (!remainder.is_empty()).then_some(remainder)
            }
            Arity::Required => {
                self.end_cluster();
                if remainder.is_empty() {
                    match self.take_next_arg() {
                        Some(value) => Some(value),
                        None => return ScanResult::MissingArgument(OptName::Short(option)),
                    }
                } else {
                    Some(remainder)
                }
            }
        };

        ScanResult::Option {
            id: OptId::from(option),
            argument,
            long_index: None,
        }
    }

    /// `body` is the argument with its leading `--` removed; never empty.
    fn long_option(&mut self, body: &'a str) -> ScanResult<'a> {
        // The long argument is consumed whatever the outcome.
        self.index += 1;

        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };
        self.last_option = Some(OptName::Long(name));

        let spec: &'s ScanSpec = self.spec;
        let matched = spec.resolve_long(name);
        let Some(long_index) = matched.selected() else {
            trace!(name, "unknown long option");
            return ScanResult::UnknownOption(OptName::Long(name));
        };
        let opt = &spec.long_opts()[long_index];

        if let LongMatch::Ambiguous { candidates } = &matched {
            let names: Vec<&str> = candidates
                .iter()
                .map(|&i| spec.long_opts()[i].name())
                .collect();
            debug!(name, ?names, selected = opt.name(), "ambiguous long option prefix");
        }
        trace!(name, selected = opt.name(), arity = ?opt.arity(), "long option");

        let argument = match (opt.arity(), inline) {
            (Arity::None, Some(value)) => {
                debug!(name = opt.name(), value, "ignoring value given to option without argument");
                None
            }
            (Arity::None | Arity::Optional, None) => None,
            (Arity::Required | Arity::Optional, Some(value)) => Some(value),
            (Arity::Required, None) => match self.take_next_arg() {
                Some(value) => Some(value),
                None => return ScanResult::MissingArgument(OptName::Long(name)),
            },
        };

        let id = if opt.store_flag() {
            OptId::FLAG
        } else {
            opt.id()
        };
        ScanResult::Option {
            id,
            argument,
            long_index: Some(long_index),
        }
    }

    /// Consume `args[index]` as an option argument, whatever it looks like.
    fn take_next_arg(&mut self) -> Option<&'a str> {
        let value = self.arg(self.index)?;
        self.index += 1;
        Some(value)
    }
}

impl<'a, S: AsRef<str>> Iterator for Scanner<'_, 'a, S> {
    type Item = ScanResult<'a>;

    /// Yields results up to, but excluding, the first terminal one.
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.next_option();
        (!result.is_terminal()).then_some(result)
    }
}
