//! Partitions and partitionings of a layer of nodes.
//!
//! A [`Partitioning`] groups the node indices `0..d` of one layer into
//! disjoint, covering [`Partition`]s. Each partition is later collapsed into a
//! single abstract node, so the length of a partitioning is the width of that
//! layer in the abstract network.

use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use num_bigint::BigUint;

use crate::error::{AbstractionError, Result};

/// Node indices merged into one abstract node.
pub type Partition = Vec<usize>;

/// An ordered sequence of partitions covering one layer of nodes.
///
/// # Invariants
///
/// - Every partition is non-empty.
/// - Every node `0..node_count()` belongs to exactly one partition.
///
/// These are caller obligations. They are not checked on construction;
/// use [`Partitioning::validate`] to check them explicitly.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Partitioning(Vec<Partition>);

impl Partitioning {
    pub fn new(partitions: Vec<Partition>) -> Self {
        Partitioning(partitions)
    }

    /// Every node of a layer with `n` nodes in its own partition.
    pub fn identity(n: usize) -> Self {
        Partitioning((0..n).map(|i| vec![i]).collect())
    }

    /// All `n` nodes of a layer merged into a single partition.
    pub fn merged(n: usize) -> Self {
        assert!(n > 0, "Cannot merge an empty layer");
        Partitioning(vec![(0..n).collect()])
    }

    /// Number of partitions, i.e. the abstract width of the layer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Partition> {
        self.0.get(index)
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.0.iter()
    }

    /// Size of the node space: one more than the largest node index.
    pub fn node_count(&self) -> usize {
        self.0
            .iter()
            .flat_map(|partition| partition.iter())
            .max()
            .map_or(0, |&max| max + 1)
    }

    /// Partition sizes in partitioning order.
    ///
    /// These are the multiplicities each representative column stands in for
    /// when a weight matrix is merged.
    pub fn sizes(&self) -> Vec<f64> {
        self.0.iter().map(|partition| partition.len() as f64).collect()
    }

    /// Number of binary PCMs, i.e. the product of the partition sizes.
    pub fn binary_pcm_count(&self) -> BigUint {
        self.0
            .iter()
            .fold(BigUint::from(1u32), |acc, partition| acc * partition.len())
    }

    /// Checks that partitions are non-empty, disjoint and cover `0..node_count()`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (i, partition) in self.0.iter().enumerate() {
            if partition.is_empty() {
                return Err(AbstractionError::MalformedPartitioning {
                    reason: format!("partition {} is empty", i),
                });
            }
            for &node in partition {
                if !seen.insert(node) {
                    return Err(AbstractionError::MalformedPartitioning {
                        reason: format!("node {} appears more than once", node),
                    });
                }
            }
        }
        let n = self.node_count();
        if seen.len() != n {
            let missing = (0..n).find(|node| !seen.contains(node)).unwrap_or(n);
            return Err(AbstractionError::MalformedPartitioning {
                reason: format!("node {} is not covered", missing),
            });
        }
        Ok(())
    }
}

impl Index<usize> for Partitioning {
    type Output = Partition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<Vec<usize>>> for Partitioning {
    fn from(partitions: Vec<Vec<usize>>) -> Self {
        Partitioning(partitions)
    }
}

impl<'a> IntoIterator for &'a Partitioning {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Partitioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, partition) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, node) in partition.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", node)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
