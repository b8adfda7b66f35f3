//! Dense per-position storage for symbol-indexed values.

use std::ops::Index;
use std::ops::IndexMut;

use generic_array::GenericArray;

use super::abc::Alphabet;

/// A table storing one value per alphabet symbol at each position.
///
/// Rows are indexed by position, columns by [`Symbol::as_index`]. Every row
/// always carries a value for every symbol of the alphabet, so a symbol
/// never observed at a position is an explicit zero rather than a missing
/// entry. Depending on where the table comes from, values are counts
/// (possibly fractional), probabilities, or log-odds scores.
///
/// [`Symbol::as_index`]: crate::abc::Symbol::as_index
#[derive(Clone, Debug, PartialEq)]
pub struct DenseTable<A: Alphabet> {
    rows: Vec<GenericArray<f64, A::K>>,
    alphabet: std::marker::PhantomData<A>,
}

impl<A: Alphabet> DenseTable<A> {
    /// Create a new zero-filled table with the given number of positions.
    pub fn blank(rows: usize) -> Self {
        Self {
            rows: vec![GenericArray::default(); rows],
            alphabet: std::marker::PhantomData,
        }
    }

    /// The number of positions in the table.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Check whether the table covers no position at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the per-position rows of the table.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GenericArray<f64, A::K>> {
        self.rows.iter()
    }

    /// Iterate mutably over the per-position rows of the table.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, GenericArray<f64, A::K>> {
        self.rows.iter_mut()
    }
}

impl<A: Alphabet> Index<usize> for DenseTable<A> {
    type Output = GenericArray<f64, A::K>;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<A: Alphabet> IndexMut<usize> for DenseTable<A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<'a, A: Alphabet> IntoIterator for &'a DenseTable<A> {
    type Item = &'a GenericArray<f64, A::K>;
    type IntoIter = std::slice::Iter<'a, GenericArray<f64, A::K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
