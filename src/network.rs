//! Concrete feed-forward networks.
//!
//! A network is an ordered list of layers, each a weight matrix of shape
//! `(out, in)` followed by an activation function. The abstraction never looks
//! at activations: they are carried over to the abstract network unchanged, so
//! any `Clone` type can play that role. [`Activation`] covers the common cases.

use std::fmt;
use std::ops::Index;

use ndarray::Array2;

/// Reference activation functions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Activation {
    Identity,
    ReLU,
}

impl Activation {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Identity => x,
            Activation::ReLU => x.max(0.0),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Identity => write!(f, "Identity"),
            Activation::ReLU => write!(f, "ReLU"),
        }
    }
}

/// One layer: `x ↦ activation(weights · x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<A = Activation> {
    /// Shape `(out, in)`.
    pub weights: Array2<f64>,
    pub activation: A,
}

impl<A> Layer<A> {
    pub fn new(weights: Array2<f64>, activation: A) -> Self {
        Layer { weights, activation }
    }

    pub fn in_dim(&self) -> usize {
        self.weights.ncols()
    }

    pub fn out_dim(&self) -> usize {
        self.weights.nrows()
    }
}

/// A feed-forward network: an ordered sequence of layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Network<A = Activation> {
    layers: Vec<Layer<A>>,
}

impl<A> Network<A> {
    pub fn new(layers: Vec<Layer<A>>) -> Self {
        Network { layers }
    }

    pub fn push(&mut self, layer: Layer<A>) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer<A>] {
        &self.layers
    }

    /// Number of layers (weight matrices).
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Layer<A>> {
        self.layers.iter()
    }

    /// Widths of the layers of nodes: the input layer followed by the output
    /// of every layer. Has one more entry than there are layers, except for an
    /// empty network.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.layers.len() + 1);
        if let Some(first) = self.layers.first() {
            sizes.push(first.in_dim());
        }
        sizes.extend(self.layers.iter().map(|layer| layer.out_dim()));
        sizes
    }
}

impl<A> Default for Network<A> {
    fn default() -> Self {
        Network { layers: Vec::new() }
    }
}

impl<A> Index<usize> for Network<A> {
    type Output = Layer<A>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.layers[index]
    }
}

impl<A> FromIterator<Layer<A>> for Network<A> {
    fn from_iter<I: IntoIterator<Item = Layer<A>>>(iter: I) -> Self {
        Network {
            layers: iter.into_iter().collect(),
        }
    }
}

impl<'a, A> IntoIterator for &'a Network<A> {
    type Item = &'a Layer<A>;
    type IntoIter = std::slice::Iter<'a, Layer<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
