//! Sample abstractions over sets of aligned sequences.
//!
//! A [`Sample`] is anything a weight matrix can be learnt from: it reports
//! how many sequences it stands for, how many positions it covers, and the
//! per-position nucleotide counts over those sequences. Two variants are
//! provided, a literal list of aligned sequences ([`ListSample`]) and a
//! compact per-position probability model ([`ModelSample`]), and everything
//! downstream treats them uniformly through the trait.

use super::abc::Alphabet;
use super::abc::Symbol;
use super::dense::DenseTable;
use super::err::Error;
use super::seq::EncodedSequence;

// --- Sample ------------------------------------------------------------------

/// A set of aligned sequences a weight matrix can be learnt from.
///
/// Implementations validate their inputs at construction time, so the three
/// queries are infallible: by the time a `Sample` exists, every sequence
/// spans the window and every symbol belongs to the alphabet.
pub trait Sample<A: Alphabet> {
    /// The number of sequences this sample is based on. Always positive.
    fn sample_size(&self) -> usize;

    /// The number of positions covered by the sample window.
    fn seq_len(&self) -> usize;

    /// Per-position counts for every symbol of the alphabet.
    ///
    /// Row `i` of the table sums to [`sample_size`] for every position.
    /// Counts may be fractional for model-backed samples, where they are
    /// expected counts reconstructed from probabilities. The table is
    /// recomputed on every call, never cached.
    ///
    /// [`sample_size`]: Sample::sample_size
    fn nucleotide_counts(&self) -> DenseTable<A>;
}

// --- ListSample --------------------------------------------------------------

/// A sample backed by a literal list of aligned sequences.
#[derive(Clone, Debug)]
pub struct ListSample<A: Alphabet> {
    sequences: Vec<EncodedSequence<A>>,
    start: usize,
    end: usize,
}

impl<A: Alphabet> ListSample<A> {
    /// Create a new sample covering the full length of the sequences.
    ///
    /// The sequences must be aligned already: they all have to share a
    /// single length, which becomes the window `0..len`. An empty list is
    /// rejected with [`Error::EmptySample`], a length mismatch with
    /// [`Error::UnequalLengths`].
    pub fn new(sequences: Vec<EncodedSequence<A>>) -> Result<Self, Error> {
        let end = match sequences.first() {
            None => return Err(Error::EmptySample),
            Some(seq) => seq.len(),
        };
        for seq in &sequences {
            if seq.len() != end {
                return Err(Error::UnequalLengths {
                    expected: end,
                    found: seq.len(),
                });
            }
        }
        Ok(Self {
            sequences,
            start: 0,
            end,
        })
    }

    /// Create a new sample restricted to the window `start..end`.
    ///
    /// Every sequence must reach at least position `end`; sequences may be
    /// longer, the extra positions are simply never consulted.
    pub fn with_window(
        sequences: Vec<EncodedSequence<A>>,
        start: usize,
        end: usize,
    ) -> Result<Self, Error> {
        if sequences.is_empty() {
            return Err(Error::EmptySample);
        }
        if start > end {
            return Err(Error::InvalidWindow { start, end });
        }
        for seq in &sequences {
            if seq.len() < end {
                return Err(Error::SequenceTooShort {
                    length: seq.len(),
                    end,
                });
            }
        }
        Ok(Self {
            sequences,
            start,
            end,
        })
    }

    /// Encode the given texts and build a full-length sample from them.
    pub fn from_texts<I>(texts: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        <I as IntoIterator>::Item: AsRef<str>,
    {
        let sequences = texts
            .into_iter()
            .map(|text| EncodedSequence::encode(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sequences)
    }

    /// The sequences backing this sample.
    #[inline]
    pub fn sequences(&self) -> &[EncodedSequence<A>] {
        &self.sequences
    }

    /// Condense this sample into a per-position probability model.
    ///
    /// For each position, every symbol with a nonzero count is recorded
    /// with probability `count / sample_size`, and the position is linked
    /// to its successor (the last one to [`Transition::End`]). The
    /// conversion is lossless with respect to counts: multiplying the
    /// probabilities back by the sample size reconstructs them, up to
    /// floating-point rounding.
    pub fn to_model(&self) -> ModelSample<A> {
        let counts = self.nucleotide_counts();
        let n = self.sample_size() as f64;
        let mut positions = Vec::with_capacity(self.seq_len());
        for (i, row) in counts.iter().enumerate() {
            let emissions = A::symbols()
                .iter()
                .filter(|s| row[s.as_index()] > 0.0)
                .map(|&s| (s, row[s.as_index()] / n))
                .collect();
            let next = if i + 1 < counts.rows() {
                Transition::Next(i + 1)
            } else {
                Transition::End
            };
            positions.push(ModelPosition { emissions, next });
        }
        ModelSample {
            end: positions.len(),
            positions,
            sample_size: self.sample_size(),
            start: 0,
        }
    }
}

impl<A: Alphabet> Sample<A> for ListSample<A> {
    fn sample_size(&self) -> usize {
        self.sequences.len()
    }

    fn seq_len(&self) -> usize {
        self.end - self.start
    }

    fn nucleotide_counts(&self) -> DenseTable<A> {
        let mut counts = DenseTable::blank(self.seq_len());
        for seq in &self.sequences {
            for (i, x) in seq.symbols()[self.start..self.end].iter().enumerate() {
                counts[i][x.as_index()] += 1.0;
            }
        }
        counts
    }
}

// --- ModelSample -------------------------------------------------------------

/// The follow-up link recorded for a model position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The position is followed by the position at this index.
    Next(usize),
    /// The position is the last one of the model.
    End,
}

/// A single position of a per-position probability model.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelPosition<A: Alphabet> {
    /// The symbols observed at this position, with their probabilities.
    ///
    /// Symbols absent from the list were never observed and count as zero.
    /// Probabilities are non-negative and sum to one over the alphabet,
    /// exactly up to floating-point error when derived from true counts.
    pub emissions: Vec<(A::Symbol, f64)>,
    /// Link to the following position.
    ///
    /// Descriptive metadata recording the chain ordering of the model; no
    /// counting or scoring path ever follows it.
    pub next: Transition,
}

/// A sample backed by a probability model instead of raw sequences.
///
/// The model keeps, for each position, the probability of every observed
/// symbol, together with the number of sequences it was derived from. That
/// is enough to reconstruct the expected per-position counts without
/// retaining the sequences themselves.
#[derive(Clone, Debug)]
pub struct ModelSample<A: Alphabet> {
    positions: Vec<ModelPosition<A>>,
    sample_size: usize,
    start: usize,
    end: usize,
}

impl<A: Alphabet> ModelSample<A> {
    /// Create a new sample covering the full length of the model.
    pub fn new(positions: Vec<ModelPosition<A>>, sample_size: usize) -> Result<Self, Error> {
        let end = positions.len();
        Self::with_window(positions, sample_size, 0, end)
    }

    /// Create a new sample restricted to the window `start..end` of the model.
    pub fn with_window(
        positions: Vec<ModelPosition<A>>,
        sample_size: usize,
        start: usize,
        end: usize,
    ) -> Result<Self, Error> {
        if sample_size == 0 {
            return Err(Error::EmptySample);
        }
        if start > end || end > positions.len() {
            return Err(Error::InvalidWindow { start, end });
        }
        Ok(Self {
            positions,
            sample_size,
            start,
            end,
        })
    }

    /// The per-position model backing this sample.
    #[inline]
    pub fn positions(&self) -> &[ModelPosition<A>] {
        &self.positions
    }
}

impl<A: Alphabet> Sample<A> for ModelSample<A> {
    fn sample_size(&self) -> usize {
        self.sample_size
    }

    fn seq_len(&self) -> usize {
        self.end - self.start
    }

    fn nucleotide_counts(&self) -> DenseTable<A> {
        let n = self.sample_size as f64;
        let mut counts = DenseTable::blank(self.seq_len());
        for (i, position) in self.positions[self.start..self.end].iter().enumerate() {
            for &(s, p) in &position.emissions {
                counts[i][s.as_index()] = p * n;
            }
        }
        counts
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::abc::Dna;
    use crate::abc::Nucleotide;

    fn sample() -> ListSample<Dna> {
        ListSample::from_texts(["ACGT", "ACGA", "TCGA"]).unwrap()
    }

    #[test]
    fn test_list_counts() {
        let s = sample();
        assert_eq!(s.sample_size(), 3);
        assert_eq!(s.seq_len(), 4);
        let counts = s.nucleotide_counts();
        assert_eq!(counts[0][Nucleotide::A.as_index()], 2.0);
        assert_eq!(counts[0][Nucleotide::T.as_index()], 1.0);
        assert_eq!(counts[1][Nucleotide::C.as_index()], 3.0);
        assert_eq!(counts[3][Nucleotide::A.as_index()], 2.0);
        assert_eq!(counts[3][Nucleotide::G.as_index()], 0.0);
    }

    #[test]
    fn test_list_window() {
        let sequences = vec![
            EncodedSequence::<Dna>::encode("ACGT").unwrap(),
            EncodedSequence::<Dna>::encode("ACGACC").unwrap(),
        ];
        let s = ListSample::with_window(sequences, 1, 3).unwrap();
        assert_eq!(s.seq_len(), 2);
        let counts = s.nucleotide_counts();
        assert_eq!(counts[0][Nucleotide::C.as_index()], 2.0);
        assert_eq!(counts[1][Nucleotide::G.as_index()], 2.0);
    }

    #[test]
    fn test_list_invalid() {
        assert_eq!(
            ListSample::<Dna>::from_texts(["ACGT", "ACG"]).map(|_| ()),
            Err(Error::UnequalLengths {
                expected: 4,
                found: 3
            }),
        );
        assert_eq!(
            ListSample::<Dna>::from_texts(Vec::<&str>::new()).map(|_| ()),
            Err(Error::EmptySample),
        );
        let sequences = vec![EncodedSequence::<Dna>::encode("ACGT").unwrap()];
        assert_eq!(
            ListSample::with_window(sequences.clone(), 3, 2).map(|_| ()),
            Err(Error::InvalidWindow { start: 3, end: 2 }),
        );
        assert_eq!(
            ListSample::with_window(sequences, 0, 5).map(|_| ()),
            Err(Error::SequenceTooShort { length: 4, end: 5 }),
        );
    }

    #[test]
    fn test_to_model_links() {
        let model = sample().to_model();
        let positions = model.positions();
        assert_eq!(positions.len(), 4);
        for (i, position) in positions.iter().enumerate() {
            if i + 1 < positions.len() {
                assert_eq!(position.next, Transition::Next(i + 1));
            } else {
                assert_eq!(position.next, Transition::End);
            }
        }
        // fully conserved position records a single emission
        assert_eq!(positions[1].emissions, vec![(Nucleotide::C, 1.0)]);
    }

    #[test]
    fn test_model_counts_roundtrip() {
        let s = sample();
        let model = s.to_model();
        assert_eq!(model.sample_size(), s.sample_size());
        assert_eq!(model.seq_len(), s.seq_len());
        let original = s.nucleotide_counts();
        let reconstructed = model.nucleotide_counts();
        for i in 0..s.seq_len() {
            for j in 0..4 {
                assert!((original[i][j] - reconstructed[i][j]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_model_window() {
        let model = sample().to_model();
        let windowed =
            ModelSample::with_window(model.positions().to_vec(), 3, 1, 3).unwrap();
        assert_eq!(windowed.seq_len(), 2);
        let counts = windowed.nucleotide_counts();
        assert_eq!(counts[0][Nucleotide::C.as_index()], 3.0);
        assert_eq!(counts[1][Nucleotide::G.as_index()], 3.0);
    }

    #[test]
    fn test_model_invalid() {
        let positions = sample().to_model().positions().to_vec();
        assert_eq!(
            ModelSample::new(positions.clone(), 0).map(|_| ()),
            Err(Error::EmptySample),
        );
        assert_eq!(
            ModelSample::with_window(positions, 3, 2, 5).map(|_| ()),
            Err(Error::InvalidWindow { start: 2, end: 5 }),
        );
    }
}
