//! Error types for sequence encoding, sample construction and scoring.

use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;

/// The given character is not a valid symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol(pub char);

impl Display for InvalidSymbol {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "invalid symbol {:?}", self.0)
    }
}

impl StdError for InvalidSymbol {}

/// The errors that samples, backgrounds and scoring can produce.
///
/// All of these are deterministic input-validation failures, raised before
/// any partial result is computed; none of them is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A sequence contains a character outside of the alphabet.
    InvalidSymbol(char),
    /// A sequence does not span the requested window.
    SequenceTooShort { length: usize, end: usize },
    /// Aligned sequences were expected to share a single length.
    UnequalLengths { expected: usize, found: usize },
    /// A window with `start > end`, or extending past the available positions.
    InvalidWindow { start: usize, end: usize },
    /// A sample with no sequences behind it.
    EmptySample,
    /// Background frequencies that are non-positive or do not sum to one.
    InvalidBackground,
    /// A scoring target shorter than the sample window.
    TargetTooShort { length: usize, expected: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Error::InvalidSymbol(c) => write!(f, "invalid symbol {:?}", c),
            Error::SequenceTooShort { length, end } => {
                write!(f, "sequence of length {} does not reach position {}", length, end)
            }
            Error::UnequalLengths { expected, found } => {
                write!(f, "expected aligned sequences of length {}, found {}", expected, found)
            }
            Error::InvalidWindow { start, end } => {
                write!(f, "inconsistent window {}..{}", start, end)
            }
            Error::EmptySample => write!(f, "sample contains no sequences"),
            Error::InvalidBackground => write!(f, "invalid background frequencies"),
            Error::TargetTooShort { length, expected } => {
                write!(f, "target of length {} is shorter than the window length {}", length, expected)
            }
        }
    }
}

impl StdError for Error {}

impl From<InvalidSymbol> for Error {
    fn from(error: InvalidSymbol) -> Self {
        Error::InvalidSymbol(error.0)
    }
}
