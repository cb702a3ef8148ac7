//! End-to-end abstraction of the paper's example network.

use ndarray::array;
use test_log::test;

use ann_rs::abstraction::{abstract_layer_wise, AbstractLayer};
use ann_rs::interval::{IntervalDomain, IntervalMatrix};
use ann_rs::network::{Activation, Layer, Network};
use ann_rs::pcm::pcms;
use ann_rs::scale::scale_columns;
use ann_rs::types::Partitioning;
use ann_rs::AbstractionError;

#[test]
fn test_paper_example() {
    let network = Network::new(vec![
        Layer::new(array![[1.], [-1.]], Activation::ReLU),
        Layer::new(array![[1., 1.], [1., 0.], [0., 1.]], Activation::Identity),
    ]);

    let partitionings = vec![
        // The single input node gets its own partition.
        Partitioning::from(vec![vec![0]]),
        // Both hidden nodes are collapsed into a single partition.
        Partitioning::from(vec![vec![0, 1]]),
        // Each output node gets its own partition.
        Partitioning::from(vec![vec![0], vec![1], vec![2]]),
    ];

    let domains = [IntervalDomain, IntervalDomain];
    let abstracted = abstract_layer_wise(&network, &partitionings, &domains).unwrap();

    let expected = vec![
        AbstractLayer {
            domain: IntervalDomain,
            weights: IntervalMatrix::new(array![[-1.]], array![[1.]]),
            activation: Activation::ReLU,
        },
        AbstractLayer {
            domain: IntervalDomain,
            weights: IntervalMatrix::new(array![[2.], [0.], [0.]], array![[2.], [2.], [2.]]),
            activation: Activation::Identity,
        },
    ];
    assert_eq!(abstracted.layers(), expected.as_slice());
}

#[test]
fn test_pcms() {
    let partitioning = Partitioning::from(vec![vec![0, 2], vec![1]]);
    assert!(matches!(
        pcms(&partitioning, false),
        Err(AbstractionError::NonComputableEnumeration)
    ));

    let output: Vec<_> = pcms(&partitioning, true).unwrap().collect();
    let truth = [
        array![[1., 0.], [0., 1.], [0., 0.]],
        array![[0., 0.], [0., 1.], [1., 0.]],
    ];
    assert_eq!(output.len(), truth.len());
    for matrix in &truth {
        assert!(output.iter().any(|out| out == matrix));
    }
}

#[test]
fn test_scale_columns() {
    let matrix = array![[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]];
    let scales = [0., 7., 499.];
    let scaled = scale_columns(&matrix, &scales);
    for ((i, j), &value) in scaled.indexed_iter() {
        assert_eq!(value, matrix[[i, j]] * scales[j]);
    }
}

#[test]
fn test_interval_str() {
    let matrix = IntervalMatrix::new(
        array![[1., 2.], [3., 4.], [5., 6.]],
        array![[7., 8.], [9., 10.], [11., 12.]],
    );
    assert_eq!(
        matrix.to_string(),
        "[[1.0, 7.0], [2.0, 8.0]\n".to_owned() + " [3.0, 9.0], [4.0, 10.0]\n" + " [5.0, 11.0], [6.0, 12.0]]"
    );
}
