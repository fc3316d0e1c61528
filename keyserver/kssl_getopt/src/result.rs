//! Values produced by the scanner.

use std::fmt;

/// Identifier reported for a recognised option.
///
/// Short options report their character. Long options report the id their
/// descriptor was declared with, which is usually the character of the
/// equivalent short option, or any other integer for long-only options.
/// [`OptId::FLAG`] is reported when the scanner stored a value into a
/// descriptor's flag cell instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptId(i32);

impl OptId {
    /// Reported when a long option wrote its value into a [`FlagCell`](crate::FlagCell).
    pub const FLAG: OptId = OptId(0);

    #[inline]
    pub const fn new(raw: i32) -> Self {
        OptId(raw)
    }

    /// Id of a short option character.
    #[inline]
    #[allow(
        clippy::cast_possible_wrap,
        reason = "char scalar values end at 0x10FFFF and always fit in i32"
    )]
    pub const fn from_char(c: char) -> Self {
        OptId(c as u32 as i32)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// The character this id was built from, if it is a valid scalar value.
    pub fn as_char(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }

    #[inline]
    pub fn is_flag(self) -> bool {
        self == Self::FLAG
    }
}

impl From<char> for OptId {
    fn from(c: char) -> Self {
        OptId::from_char(c)
    }
}

impl From<i32> for OptId {
    fn from(raw: i32) -> Self {
        OptId(raw)
    }
}

impl fmt::Display for OptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(c) if !self.is_flag() && c.is_ascii_graphic() => write!(f, "{c}"),
            _ => write!(f, "{}", self.0),
        }
    }
}

/// The option an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptName<'a> {
    /// A short option character (`-x`).
    Short(char),
    /// A long option name as written, without `--` and without `=value`.
    Long(&'a str),
}

impl fmt::Display for OptName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptName::Short(c) => write!(f, "{c}"),
            OptName::Long(name) => f.write_str(name),
        }
    }
}

/// Outcome of a single scan step.
///
/// Errors are ordinary values: after `UnknownOption` or `MissingArgument`
/// the scanner stays usable and continues with the following argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanResult<'a> {
    /// A recognised option and its argument, if it took one.
    ///
    /// `long_index` is the declaration index of the matched long option and
    /// is `None` for short options.
    Option {
        id: OptId,
        argument: Option<&'a str>,
        long_index: Option<usize>,
    },
    /// The option character or long name is not in the spec.
    UnknownOption(OptName<'a>),
    /// A required argument is absent at the end of the vector.
    MissingArgument(OptName<'a>),
    /// The next argument is an operand (or a lone `-`); scanning stops here.
    NonOption,
    /// The vector is exhausted or `--` was consumed.
    Done,
}

impl<'a> ScanResult<'a> {
    /// Returns `true` for `NonOption` and `Done`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, ScanResult::NonOption | ScanResult::Done)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ScanResult::UnknownOption(_) | ScanResult::MissingArgument(_)
        )
    }

    /// The option id, for `Option` results.
    pub fn id(&self) -> Option<OptId> {
        match self {
            ScanResult::Option { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The option argument, for `Option` results that carry one.
    pub fn argument(&self) -> Option<&'a str> {
        match self {
            ScanResult::Option { argument, .. } => *argument,
            _ => None,
        }
    }

    /// The option an error result refers to.
    pub fn error_name(&self) -> Option<OptName<'a>> {
        match self {
            ScanResult::UnknownOption(name) | ScanResult::MissingArgument(name) => Some(*name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
