//! Position weight matrices and individual information scoring.

use super::abc::Alphabet;
use super::abc::Background;
use super::abc::Symbol;
use super::dense::DenseTable;
use super::err::Error;
use super::sample::Sample;
use super::seq::EncodedSequence;

// --- WeightMatrix ------------------------------------------------------------

/// A matrix of per-position log-odds scores against a background.
///
/// Each cell holds the base-2 log-odds of observing a symbol at a position
/// in the sample rather than under the background distribution, with a
/// background-proportional pseudocount folded in. Built once from a
/// [`Sample`] snapshot and immutable afterwards.
#[derive(Clone, Debug)]
pub struct WeightMatrix<A: Alphabet> {
    background: Background<A>,
    data: DenseTable<A>,
}

impl<A: Alphabet> WeightMatrix<A> {
    /// Learn a weight matrix from a sample against the given background.
    ///
    /// Passing `None` as the background uses uniform frequencies. Each
    /// score is computed as
    ///
    /// ```text
    /// log2( (count[i][s] + bg[s]) / ((n + 1) * bg[s]) )
    /// ```
    ///
    /// where `n` is the sample size: the background frequency itself acts
    /// as a pseudocount, so a symbol never observed at a position scores
    /// finitely low instead of negative infinity, and the estimate
    /// converges to the plain log-odds `log2((count/n) / bg)` as the
    /// sample grows. The argument of the logarithm is always strictly
    /// positive, as [`Background`] only holds positive frequencies and
    /// counts are never negative.
    pub fn from_sample<S, B>(sample: &S, background: B) -> Self
    where
        S: Sample<A>,
        B: Into<Option<Background<A>>>,
    {
        let bg = background.into().unwrap_or_default();
        let counts = sample.nucleotide_counts();
        let n = sample.sample_size() as f64;
        let mut data = DenseTable::blank(sample.seq_len());
        for (src, dst) in counts.iter().zip(data.iter_mut()) {
            for (j, &f) in bg.frequencies().iter().enumerate() {
                dst[j] = ((src[j] + f) / ((n + 1.0) * f)).log2();
            }
        }
        Self {
            background: bg,
            data,
        }
    }

    /// The length of the motif encoded in this weight matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.rows()
    }

    /// Check whether the matrix covers no position at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The per-position log-odds scores of the matrix.
    #[inline]
    pub fn weights(&self) -> &DenseTable<A> {
        &self.data
    }

    /// The background frequencies the matrix was built against.
    #[inline]
    pub fn background(&self) -> &Background<A> {
        &self.background
    }

    /// Score a target sequence against this matrix.
    ///
    /// Sums the log-odds of `target[i]` over every position of the matrix.
    /// The target may be longer than the matrix, in which case only its
    /// first [`len`] symbols are read; a shorter target is rejected with
    /// [`Error::TargetTooShort`].
    ///
    /// [`len`]: WeightMatrix::len
    pub fn score(&self, target: &EncodedSequence<A>) -> Result<f64, Error> {
        if target.len() < self.len() {
            return Err(Error::TargetTooShort {
                length: target.len(),
                expected: self.len(),
            });
        }
        let mut total = 0.0;
        for (i, x) in target.symbols()[..self.len()].iter().enumerate() {
            total += self.data[i][x.as_index()];
        }
        Ok(total)
    }
}

impl<A: Alphabet> AsRef<DenseTable<A>> for WeightMatrix<A> {
    fn as_ref(&self) -> &DenseTable<A> {
        &self.data
    }
}

// --- Individual information --------------------------------------------------

/// Score how much information `target` carries about the sample pattern.
///
/// Learns a [`WeightMatrix`] from `sample` against `background` and scores
/// `target` with it. Higher values mean the target matches the learnt
/// pattern better than the background expectation; the score can go
/// negative for targets that match worse than background. With a uniform
/// background (the default, passed as `None`) this is the classical
/// individual information of the target, in bits; with empirically
/// measured background frequencies it is the information relative to that
/// population.
pub fn relative_individual_information<A, S, B>(
    target: &EncodedSequence<A>,
    sample: &S,
    background: B,
) -> Result<f64, Error>
where
    A: Alphabet,
    S: Sample<A>,
    B: Into<Option<Background<A>>>,
{
    WeightMatrix::from_sample(sample, background).score(target)
}
