//! # ann-rs: Abstract Neural Networks in Rust
//!
//! **`ann-rs`** computes sound over-approximations of feed-forward networks by
//! merging groups of nodes in every layer into single abstract nodes.
//! It follows the construction of Sotoudeh and Thakur, *Abstract Neural
//! Networks* (SAS 2020).
//!
//! ## What is an ANN?
//!
//! An Abstract Neural Network replaces every weight matrix of a network by an
//! element of an *abstract weight-set domain*, for example an interval matrix.
//! When the nodes of a layer are partitioned, each partition becomes one
//! abstract node, and the abstract weights bound every weight matrix obtainable
//! by merging the nodes of each partition.
//!
//! ## Basic Usage
//!
//! ```rust
//! use ann_rs::abstraction::abstract_layer_wise;
//! use ann_rs::interval::{IntervalDomain, IntervalMatrix};
//! use ann_rs::network::{Activation, Layer, Network};
//! use ann_rs::types::Partitioning;
//! use ndarray::array;
//!
//! // 1. A 1-2-3 network
//! let network = Network::new(vec![
//!     Layer::new(array![[1.], [-1.]], Activation::ReLU),
//!     Layer::new(array![[1., 1.], [1., 0.], [0., 1.]], Activation::Identity),
//! ]);
//!
//! // 2. Merge both hidden nodes, keep inputs and outputs apart
//! let partitionings = [
//!     Partitioning::identity(1),
//!     Partitioning::merged(2),
//!     Partitioning::identity(3),
//! ];
//!
//! // 3. Abstract every layer with the interval domain
//! let ann = abstract_layer_wise(&network, &partitionings, &[IntervalDomain, IntervalDomain]).unwrap();
//!
//! assert_eq!(ann[0].weights, IntervalMatrix::new(array![[-1.]], array![[1.]]));
//! assert_eq!(
//!     ann[1].weights,
//!     IntervalMatrix::new(array![[2.], [0.], [0.]], array![[2.], [2.], [2.]])
//! );
//! ```
//!
//! ## Core Components
//!
//! - **[`abstraction`]**: [`alpha_hat`][crate::abstraction::alpha_hat] (one layer) and
//!   [`abstract_layer_wise`][crate::abstraction::abstract_layer_wise] (a whole network).
//! - **[`pcm`]**: Lazy enumeration of partition combination matrices.
//! - **[`domain`]**: The [`AbstractDomain`][crate::domain::AbstractDomain] trait.
//! - **[`interval`]**: The reference interval-matrix domain.
//! - **[`dot`]**: Graphviz export of interval ANNs.
//!
//! Merging is exponential in partition sizes. The crate does no throttling of
//! its own; check [`Partitioning::binary_pcm_count`][crate::types::Partitioning::binary_pcm_count]
//! before abstracting large layers.

pub mod abstraction;
pub mod domain;
pub mod dot;
pub mod error;
pub mod interval;
pub mod network;
pub mod pcm;
pub mod scale;
pub mod types;

pub use error::{AbstractionError, Result};
