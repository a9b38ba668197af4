//! Per-epoch error bookkeeping.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// Misclassification count of every completed epoch, in order.
///
/// Appended to once per epoch during `fit` and read-only afterwards. On
/// data that is not linearly separable the counts plateau above zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ErrorHistory(Vec<usize>);

impl ErrorHistory {
    /// Creates an empty history with room for `epochs` entries.
    #[must_use]
    pub fn with_capacity(epochs: usize) -> Self {
        Self(Vec::with_capacity(epochs))
    }

    pub(crate) fn push(&mut self, errors: usize) {
        self.0.push(errors);
    }

    /// Sum of all epoch counts.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// # Overview
    ///
    /// Index of the first epoch from which every count is zero, if any.
    ///
    /// ```
    /// use gate_perceptron::ErrorHistory;
    ///
    /// let history = ErrorHistory::from(vec![2, 1, 0, 1, 0, 0]);
    /// assert_eq!(history.converged_at(), Some(4));
    /// ```
    #[must_use]
    pub fn converged_at(&self) -> Option<usize> {
        let nonzero_tail = self.0.iter().rposition(|&e| e != 0);
        match nonzero_tail {
            Some(i) if i + 1 < self.0.len() => Some(i + 1),
            Some(_) => None,
            None if self.0.is_empty() => None,
            None => Some(0)
        }
    }

    /// True when the last recorded epoch had no errors.
    #[inline]
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.last() == Some(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for ErrorHistory {
    fn from(counts: Vec<usize>) -> Self {
        Self(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_and_last() {
        let history = ErrorHistory::from(vec![2, 3, 3, 2, 1, 0]);
        assert_eq!(history.total(), 11);
        assert_eq!(history.last(), Some(0));
        assert_eq!(history.len(), 6);
        assert!(history.is_converged());
    }

    #[test]
    fn converged_at_tracks_zero_tail() {
        assert_eq!(ErrorHistory::from(vec![1, 0, 0]).converged_at(), Some(1));
        assert_eq!(ErrorHistory::from(vec![0, 0]).converged_at(), Some(0));
        assert_eq!(ErrorHistory::from(vec![3, 4, 4]).converged_at(), None);
        assert_eq!(ErrorHistory::default().converged_at(), None);
    }

    #[test]
    fn plateau_is_not_converged() {
        let history = ErrorHistory::from(vec![3, 3, 4, 4]);
        assert!(!history.is_converged());
        assert_eq!(history.total(), 14);
    }

    #[test]
    fn push_appends_in_order() {
        let mut history = ErrorHistory::with_capacity(3);
        history.push(2);
        history.push(0);
        assert_eq!(history.as_slice(), &[2, 0]);
        assert_eq!(history.iter().collect::<Vec<_>>(), vec![2, 0]);
    }
}
