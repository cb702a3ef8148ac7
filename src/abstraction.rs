//! Layer-wise abstraction of a network into an abstract neural network (ANN).
//!
//! Merging the nodes of a partition into one abstract node can be done in many
//! ways, one per choice of representative (or, in general, per convex
//! combination of the partition's nodes). [`alpha_hat`] enumerates all merges
//! of one weight matrix and hands them to an [`AbstractDomain`], which
//! over-approximates the whole set by a single abstract element.
//! [`abstract_layer_wise`] does this for every layer of a [`Network`].
//!
//! # Example
//!
//! ```
//! use ann_rs::abstraction::alpha_hat;
//! use ann_rs::interval::{IntervalDomain, IntervalMatrix};
//! use ann_rs::types::Partitioning;
//! use ndarray::array;
//!
//! // Merge both hidden nodes of a 1-2 layer.
//! let weights = array![[1.], [-1.]];
//! let merged = alpha_hat(
//!     &weights,
//!     &Partitioning::identity(1),
//!     &Partitioning::merged(2),
//!     &IntervalDomain,
//! )
//! .unwrap();
//! assert_eq!(merged, IntervalMatrix::new(array![[-1.]], array![[1.]]));
//! ```
//!
//! # Complexity
//!
//! The number of merged matrices is the product of all partition sizes of
//! both partitionings. Callers are expected to bound partition sizes before
//! abstracting; see [`Partitioning::binary_pcm_count`].

use std::fmt;
use std::ops::Index;

use log::{debug, trace};
use ndarray::Array2;

use crate::domain::AbstractDomain;
use crate::error::Result;
use crate::network::Network;
use crate::pcm::pcms;
use crate::scale::scale_columns;
use crate::types::Partitioning;

/// Abstraction of every merge of `matrix` (shape `(out, in)`) according to
/// `partitioning_in` and `partitioning_out`.
///
/// Each merge keeps one representative per partition:
/// `C_outᵀ · matrix · C_in`, with its columns scaled by the input partition
/// sizes, since a representative input node stands in for its whole
/// partition. For a convex domain, binary PCMs are enough.
///
/// # Errors
///
/// [`NonComputableEnumeration`][crate::error::AbstractionError::NonComputableEnumeration]
/// if the domain is not convex. Nothing is enumerated in that case.
pub fn alpha_hat<D: AbstractDomain>(
    matrix: &Array2<f64>,
    partitioning_in: &Partitioning,
    partitioning_out: &Partitioning,
    domain: &D,
) -> Result<D::Element> {
    debug!(
        "alpha_hat(shape = {:?}, in = {} -> {}, out = {} -> {}, merges = {})",
        matrix.dim(),
        partitioning_in.node_count(),
        partitioning_in.len(),
        partitioning_out.node_count(),
        partitioning_out.len(),
        partitioning_in.binary_pcm_count() * partitioning_out.binary_pcm_count()
    );

    let column_weights = partitioning_in.sizes();
    let only_binary = domain.is_convex();
    let in_pcms = pcms(partitioning_in, only_binary)?;
    let out_pcms = pcms(partitioning_out, only_binary)?;

    // Grown on demand: the merge set can be far larger than memory allows.
    let mut merged = Vec::new();
    for in_pcm in in_pcms {
        let projected = matrix.dot(&in_pcm);
        for out_pcm in out_pcms.clone() {
            let reduced = out_pcm.t().dot(&projected);
            let scaled = scale_columns(&reduced, &column_weights);
            trace!("merged matrix #{}: {:?}", merged.len(), scaled);
            merged.push(scaled);
        }
    }

    Ok(domain.alpha(&merged))
}

/// Abstracts `network` layer by layer.
///
/// `partitionings[i]` partitions the `i`-th layer of nodes (the input layer
/// is layer 0), so there must be one more partitioning than there are layers.
/// Layer `i` is abstracted with `domains[i]`. Activations are copied as is.
///
/// Mismatched lengths are not checked: surplus partitionings or domains are
/// ignored, and missing ones silently shorten the result.
///
/// # Errors
///
/// Fails on the first layer whose domain is not convex; no partial network is
/// returned.
pub fn abstract_layer_wise<D, A>(
    network: &Network<A>,
    partitionings: &[Partitioning],
    domains: &[D],
) -> Result<AbstractNetwork<D, A>>
where
    D: AbstractDomain + Clone,
    A: Clone,
{
    debug!(
        "abstract_layer_wise(layers = {}, partitionings = {}, domains = {})",
        network.len(),
        partitionings.len(),
        domains.len()
    );

    let mut layers = Vec::with_capacity(network.len());
    let iterate = network.iter().zip(partitionings.windows(2)).zip(domains);
    for (i, ((layer, partitions), domain)) in iterate.enumerate() {
        let (partitions_from, partitions_to) = (&partitions[0], &partitions[1]);
        debug!(
            "layer {}: {} -> {} abstract nodes",
            i,
            partitions_from.len(),
            partitions_to.len()
        );
        let weights = alpha_hat(&layer.weights, partitions_from, partitions_to, domain)?;
        layers.push(AbstractLayer {
            domain: domain.clone(),
            weights,
            activation: layer.activation.clone(),
        });
    }

    Ok(AbstractNetwork { layers })
}

/// One layer of an ANN: the domain, the abstract weights and the activation.
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractLayer<D: AbstractDomain, A> {
    pub domain: D,
    /// Shape `(out partitions, in partitions)`.
    pub weights: D::Element,
    pub activation: A,
}

/// An abstract neural network, the result of [`abstract_layer_wise`].
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractNetwork<D: AbstractDomain, A> {
    layers: Vec<AbstractLayer<D, A>>,
}

impl<D: AbstractDomain, A> AbstractNetwork<D, A> {
    pub fn layers(&self) -> &[AbstractLayer<D, A>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AbstractLayer<D, A>> {
        self.layers.iter()
    }
}

impl<D: AbstractDomain, A> Index<usize> for AbstractNetwork<D, A> {
    type Output = AbstractLayer<D, A>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.layers[index]
    }
}

impl<D: AbstractDomain, A> IntoIterator for AbstractNetwork<D, A> {
    type Item = AbstractLayer<D, A>;
    type IntoIter = std::vec::IntoIter<AbstractLayer<D, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

impl<'a, D: AbstractDomain, A> IntoIterator for &'a AbstractNetwork<D, A> {
    type Item = &'a AbstractLayer<D, A>;
    type IntoIter = std::slice::Iter<'a, AbstractLayer<D, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

impl<D, A> fmt::Display for AbstractNetwork<D, A>
where
    D: AbstractDomain,
    D::Element: fmt::Display,
    A: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "layer {} ({}):", i, layer.activation)?;
            write!(f, "{}", layer.weights)?;
        }
        Ok(())
    }
}
