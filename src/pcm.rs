//! Partition combination matrices (PCMs).
//!
//! A PCM for a partitioning with `k` partitions over a node space of size `d`
//! is a `d × k` matrix. A *binary* PCM selects one representative node per
//! partition: column `p` holds a single `1` in the row of the node chosen for
//! partition `p`, and zeros elsewhere.
//!
//! Given a weight matrix `M` and PCMs `C_in`, `C_out` for the input and output
//! layers, `C_outᵀ · M · C_in` is the weight matrix obtained by keeping only
//! the chosen representatives.
//!
//! # Example
//!
//! ```
//! use ann_rs::pcm::binary_pcms;
//! use ann_rs::types::Partitioning;
//!
//! let partitioning = Partitioning::from(vec![vec![0, 2], vec![1]]);
//! let pcms: Vec<_> = binary_pcms(&partitioning).collect();
//! assert_eq!(pcms.len(), 2);
//! assert_eq!(pcms[0].shape(), &[3, 2]);
//! ```
//!
//! # Performance
//!
//! The number of binary PCMs is the product of the partition sizes. Both
//! iterators here are lazy: one matrix is materialized per step, never the
//! whole set.

use std::iter::FusedIterator;

use log::debug;
use ndarray::Array2;

use crate::error::{AbstractionError, Result};
use crate::types::Partitioning;

/// Returns the PCMs of `partitioning`.
///
/// With `only_binary = true` this yields every binary PCM. The set of
/// non-binary PCMs is uncountable, so `only_binary = false` always fails with
/// [`AbstractionError::NonComputableEnumeration`].
pub fn pcms(partitioning: &Partitioning, only_binary: bool) -> Result<Pcms<'_>> {
    debug!(
        "pcms(partitions = {}, only_binary = {})",
        partitioning.len(),
        only_binary
    );
    if !only_binary {
        return Err(AbstractionError::NonComputableEnumeration);
    }
    Ok(binary_pcms(partitioning))
}

/// Returns an iterator over all binary PCMs of `partitioning`.
pub fn binary_pcms(partitioning: &Partitioning) -> Pcms<'_> {
    Pcms::new(partitioning)
}

/// Builds the binary PCM selecting `assignment[p]` for every partition `p`.
pub fn pcm_from_assignment(assignment: &[usize], node_count: usize) -> Array2<f64> {
    let mut pcm = Array2::zeros((node_count, assignment.len()));
    for (partition, &node) in assignment.iter().enumerate() {
        pcm[[node, partition]] = 1.0;
    }
    pcm
}

/// Iterator over the Cartesian product of the partitions of a partitioning.
///
/// Each item holds the representative node chosen for every partition, in
/// partition order. The last partition varies fastest.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    partitioning: &'a Partitioning,
    /// Position inside each partition of the next assignment.
    cursor: Vec<usize>,
    remaining: Option<usize>,
    done: bool,
}

impl<'a> Assignments<'a> {
    pub fn new(partitioning: &'a Partitioning) -> Self {
        let done = partitioning.iter().any(|partition| partition.is_empty());
        let remaining = partitioning
            .iter()
            .try_fold(1usize, |acc, partition| acc.checked_mul(partition.len()));
        Assignments {
            partitioning,
            cursor: vec![0; partitioning.len()],
            remaining,
            done,
        }
    }

    /// Moves the cursor to the next assignment, odometer style.
    fn advance(&mut self) {
        for p in (0..self.cursor.len()).rev() {
            self.cursor[p] += 1;
            if self.cursor[p] < self.partitioning[p].len() {
                return;
            }
            self.cursor[p] = 0;
        }
        // Wrapped around every digit (or there are none).
        self.done = true;
    }
}

impl Iterator for Assignments<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let assignment = self
            .cursor
            .iter()
            .zip(self.partitioning.iter())
            .map(|(&i, partition)| partition[i])
            .collect();
        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Assignments<'_> {}

/// Iterator over the binary PCMs of a partitioning.
///
/// Created by [`binary_pcms()`] or [`pcms()`]. A clone continues from the same
/// position; call [`binary_pcms()`] again to enumerate from the beginning.
#[derive(Debug, Clone)]
pub struct Pcms<'a> {
    assignments: Assignments<'a>,
    node_count: usize,
}

impl<'a> Pcms<'a> {
    pub fn new(partitioning: &'a Partitioning) -> Self {
        Pcms {
            assignments: Assignments::new(partitioning),
            node_count: partitioning.node_count(),
        }
    }

    /// Size of the node space, i.e. the number of rows of every PCM.
    pub fn node_count(&self) -> usize {
        self.node_count
    }
}

impl Iterator for Pcms<'_> {
    type Item = Array2<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let assignment = self.assignments.next()?;
        Some(pcm_from_assignment(&assignment, self.node_count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.assignments.size_hint()
    }
}

impl FusedIterator for Pcms<'_> {}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use test_log::test;

    use super::*;

    #[test]
    fn test_non_binary_fails() {
        let partitioning = Partitioning::from(vec![vec![0, 2], vec![1]]);
        assert_eq!(
            pcms(&partitioning, false).unwrap_err(),
            AbstractionError::NonComputableEnumeration
        );
    }

    #[test]
    fn test_binary_pcms() {
        let partitioning = Partitioning::from(vec![vec![0, 2], vec![1]]);
        let output: Vec<_> = pcms(&partitioning, true).unwrap().collect();
        let truth = [
            array![[1., 0.], [0., 1.], [0., 0.]],
            array![[0., 0.], [0., 1.], [1., 0.]],
        ];
        assert_eq!(output.len(), truth.len());
        for matrix in &truth {
            assert!(output.contains(matrix));
        }
    }

    #[test]
    fn test_assignment_order() {
        let partitioning = Partitioning::from(vec![vec![0, 1], vec![2, 3]]);
        let assignments: Vec<_> = Assignments::new(&partitioning).collect();
        assert_eq!(
            assignments,
            vec![vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3]]
        );
    }

    #[test]
    fn test_size_hint() {
        let partitioning = Partitioning::from(vec![vec![0, 1, 2], vec![3, 4]]);
        let mut it = binary_pcms(&partitioning);
        assert_eq!(it.size_hint(), (6, Some(6)));
        it.next();
        assert_eq!(it.size_hint(), (5, Some(5)));
        assert_eq!(it.count(), 5);
    }

    #[test]
    fn test_restartable() {
        let partitioning = Partitioning::from(vec![vec![0, 1], vec![2]]);
        let first: Vec<_> = binary_pcms(&partitioning).collect();
        let second: Vec<_> = binary_pcms(&partitioning).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_partitioning() {
        let partitioning = Partitioning::default();
        let pcms: Vec<_> = binary_pcms(&partitioning).collect();
        assert_eq!(pcms.len(), 1);
        assert_eq!(pcms[0].shape(), &[0, 0]);
    }

    #[test]
    fn test_empty_partition_yields_nothing() {
        let partitioning = Partitioning::from(vec![vec![0], vec![]]);
        assert_eq!(binary_pcms(&partitioning).count(), 0);
    }

    #[test]
    fn test_fused() {
        let partitioning = Partitioning::from(vec![vec![0]]);
        let mut it = binary_pcms(&partitioning);
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_pcm_from_assignment() {
        let pcm = pcm_from_assignment(&[2, 0], 3);
        assert_eq!(pcm, array![[0., 1.], [0., 0.], [1., 0.]]);
    }
}
