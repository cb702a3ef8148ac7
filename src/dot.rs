//! Interval ANN to DOT (Graphviz) conversion.
//!
//! Renders an abstract network over the [`IntervalDomain`] as a layered
//! directed graph, which can be visualized with Graphviz tools like `dot`.
//!
//! # DOT Format
//!
//! - Every layer of nodes is a cluster, labelled `input` for layer 0 and with
//!   the activation of the incoming layer otherwise.
//! - Every partition is one node, named `L{layer}P{partition}`.
//! - Every entry of an abstract weight matrix is one edge, from the input
//!   partition to the output partition, labelled with its interval.
//!
//! # Examples
//!
//! ```
//! use ann_rs::abstraction::abstract_layer_wise;
//! use ann_rs::interval::IntervalDomain;
//! use ann_rs::network::{Activation, Layer, Network};
//! use ann_rs::types::Partitioning;
//! use ndarray::array;
//!
//! let network = Network::new(vec![Layer::new(array![[1.], [-1.]], Activation::ReLU)]);
//! let partitionings = [Partitioning::identity(1), Partitioning::merged(2)];
//! let ann = abstract_layer_wise(&network, &partitionings, &[IntervalDomain]).unwrap();
//!
//! let dot = ann.to_dot().unwrap();
//! assert!(dot.contains("L0P0 -> L1P0 [label=\"[-1.0, 1.0]\"];"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::{self, Write as _};

use crate::abstraction::AbstractNetwork;
use crate::interval::IntervalDomain;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
///
/// # Examples
///
/// ```
/// use ann_rs::dot::DotConfig;
///
/// let config = DotConfig {
///     hide_zero_edges: false,
///     precision: Some(2),
///     ..DotConfig::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for partition nodes (default: "circle")
    pub node_shape: &'static str,
    /// Graph rank direction (default: "LR")
    pub rank_dir: &'static str,
    /// Whether to omit edges whose interval is exactly `[0, 0]` (default: true)
    pub hide_zero_edges: bool,
    /// Digits after the decimal point in edge labels, `None` for the shortest
    /// exact representation (default: None)
    pub precision: Option<usize>,
    /// Whether to use HTML labels for subscripts (default: true)
    pub use_html_labels: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            rank_dir: "LR",
            hide_zero_edges: true,
            precision: None,
            use_html_labels: true,
        }
    }
}

fn format_bound(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => format!("{:?}", value),
    }
}

impl<A: fmt::Display> AbstractNetwork<IntervalDomain, A> {
    /// Converts the network to DOT format with the default configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - A DOT-formatted string representation of the network
    /// * `Err(std::fmt::Error)` - If string formatting fails (rare)
    pub fn to_dot(&self) -> Result<String, fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the network to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "rankdir={};", config.rank_dir)?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        // Layer widths: inputs of the first layer, then outputs of every layer.
        let mut widths = Vec::with_capacity(self.len() + 1);
        if let Some(first) = self.layers().first() {
            widths.push(first.weights.ncols());
        }
        widths.extend(self.iter().map(|layer| layer.weights.nrows()));

        for (l, &width) in widths.iter().enumerate() {
            writeln!(dot, "subgraph cluster_{} {{", l)?;
            if l == 0 {
                writeln!(dot, "label=\"input\";")?;
            } else {
                writeln!(dot, "label=\"{}\";", self[l - 1].activation)?;
            }
            for p in 0..width {
                let label = if config.use_html_labels {
                    format!("<P<SUB>{}</SUB>>", p)
                } else {
                    format!("\"P{}\"", p)
                };
                writeln!(dot, "L{}P{} [label={}];", l, p, label)?;
            }
            writeln!(dot, "}}")?;
        }

        for (l, layer) in self.iter().enumerate() {
            let (rows, cols) = layer.weights.shape();
            for j in 0..cols {
                for i in 0..rows {
                    // Bottom has no entries.
                    let Some((lower, upper)) = layer.weights.get(i, j) else {
                        continue;
                    };
                    if config.hide_zero_edges && lower == 0.0 && upper == 0.0 {
                        continue;
                    }
                    writeln!(
                        dot,
                        "L{}P{} -> L{}P{} [label=\"[{}, {}]\"];",
                        l,
                        j,
                        l + 1,
                        i,
                        format_bound(lower, config.precision),
                        format_bound(upper, config.precision)
                    )?;
                }
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
