//! Digital encoding for DNA sequences and background nucleotide frequencies.

use std::fmt::Debug;

use generic_array::ArrayLength;
use generic_array::GenericArray;
use typenum::consts::U4;
use typenum::marker_traits::NonZero;
use typenum::marker_traits::Unsigned;

use super::err::Error;
use super::err::InvalidSymbol;

/// The largest deviation from one a background may sum to.
const BACKGROUND_TOLERANCE: f64 = 1e-6;

// --- Symbol ------------------------------------------------------------------

/// A symbol from a biological alphabet.
pub trait Symbol: Sized + Copy + Eq {
    /// View this symbol as a zero-based index.
    fn as_index(&self) -> usize;
    /// View this symbol as a string character.
    fn as_char(&self) -> char {
        self.as_ascii() as char
    }
    /// Parse a string character into a symbol.
    fn from_char(c: char) -> Result<Self, InvalidSymbol> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            Err(InvalidSymbol(c))
        }
    }
    /// View this symbol as an ASCII character.
    fn as_ascii(&self) -> u8;
    /// Parse an ASCII character into a symbol.
    fn from_ascii(c: u8) -> Result<Self, InvalidSymbol>;
}

// --- Alphabet ----------------------------------------------------------------

/// A biological alphabet with associated metadata.
pub trait Alphabet: Debug + Copy + Default + 'static {
    type Symbol: Symbol + Debug;
    type K: Unsigned + NonZero + ArrayLength<f64> + Debug;

    /// Get all the symbols of this alphabet, in index order.
    fn symbols() -> &'static [Self::Symbol];

    /// Get a string with all symbols from this alphabet.
    fn as_str() -> &'static str;
}

// --- DNA ---------------------------------------------------------------------

/// The strict DNA alphabet composed of the 4 deoxyribonucleotides.
///
/// No wildcard or ambiguity code is part of this alphabet: a sequence must
/// be fully resolved before it can be encoded.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dna;

impl Alphabet for Dna {
    type Symbol = Nucleotide;
    type K = U4;

    fn symbols() -> &'static [Nucleotide] {
        &[
            Nucleotide::A,
            Nucleotide::G,
            Nucleotide::T,
            Nucleotide::C,
        ]
    }

    fn as_str() -> &'static str {
        "AGTC"
    }
}

/// A deoxyribonucleotide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Nucleotide {
    /// Adenine.
    A = 0,
    /// Guanine.
    G = 1,
    /// Thymine.
    T = 2,
    /// Cytosine.
    C = 3,
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> char {
        n.as_char()
    }
}

impl Symbol for Nucleotide {
    fn as_index(&self) -> usize {
        *self as usize
    }

    fn as_ascii(&self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
            Nucleotide::C => b'C',
        }
    }

    fn from_ascii(c: u8) -> Result<Self, InvalidSymbol> {
        match c {
            b'A' => Ok(Nucleotide::A),
            b'G' => Ok(Nucleotide::G),
            b'T' => Ok(Nucleotide::T),
            b'C' => Ok(Nucleotide::C),
            _ => Err(InvalidSymbol(c as char)),
        }
    }
}

// --- Background --------------------------------------------------------------

/// The background frequencies for an alphabet.
#[derive(Clone, Debug, PartialEq)]
pub struct Background<A: Alphabet> {
    frequencies: GenericArray<f64, A::K>,
    alphabet: std::marker::PhantomData<A>,
}

impl<A: Alphabet> Background<A> {
    /// Create a new background with the given frequencies.
    ///
    /// Every frequency must be strictly positive, and together they must
    /// sum to one within a small tolerance. A zero frequency is rejected
    /// here rather than later: it would otherwise end up as the divisor of
    /// a log-odds score.
    pub fn new<F>(frequencies: F) -> Result<Self, Error>
    where
        F: Into<GenericArray<f64, A::K>>,
    {
        let frequencies = frequencies.into();
        let mut sum = 0.0;
        for &f in frequencies.iter() {
            if !(f > 0.0 && f <= 1.0) {
                return Err(Error::InvalidBackground);
            }
            sum += f;
        }
        if (sum - 1.0).abs() > BACKGROUND_TOLERANCE {
            return Err(Error::InvalidBackground);
        }
        Ok(Self {
            frequencies,
            alphabet: std::marker::PhantomData,
        })
    }

    /// Create a new background with uniform frequencies.
    ///
    /// Every symbol of the alphabet `A` is initialized with a frequency
    /// of `1/K`.
    ///
    /// # Note
    /// The `Default` implementation for `Background` uses uniform
    /// frequencies.
    ///
    /// # Example
    /// ```
    /// # use infomotif::abc::*;
    /// let bg = Background::<Dna>::uniform();
    /// assert_eq!(bg.frequencies(), &[0.25, 0.25, 0.25, 0.25]);
    /// ```
    pub fn uniform() -> Self {
        let frequencies = (0..A::K::USIZE)
            .map(|_| 1.0 / (A::K::USIZE as f64))
            .collect();
        Self {
            frequencies,
            alphabet: std::marker::PhantomData,
        }
    }

    /// A reference to the raw background frequencies, in symbol index order.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
}

impl<A: Alphabet> AsRef<[f64]> for Background<A> {
    fn as_ref(&self) -> &[f64] {
        self.frequencies()
    }
}

impl<A: Alphabet> Default for Background<A> {
    fn default() -> Self {
        Self::uniform()
    }
}
