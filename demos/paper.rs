//! The running example of the Abstract Neural Networks paper.
//!
//! A 1-2-3 network whose two hidden nodes are merged into one abstract node,
//! abstracted with the interval domain.
//!
//! Run with:
//! ```bash
//! cargo run --example paper -- --dot
//! ```

use clap::Parser;
use ndarray::array;

use ann_rs::abstraction::abstract_layer_wise;
use ann_rs::dot::DotConfig;
use ann_rs::interval::IntervalDomain;
use ann_rs::network::{Activation, Layer, Network};
use ann_rs::types::Partitioning;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Keep the hidden nodes apart instead of merging them.
    #[clap(long)]
    no_merge: bool,

    /// Print the abstract network in DOT format.
    #[clap(long)]
    dot: bool,

    /// Show `[0, 0]` edges in the DOT output.
    #[clap(long)]
    zero_edges: bool,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("args = {:?}", args);

    let network = Network::new(vec![
        Layer::new(array![[1.], [-1.]], Activation::ReLU),
        Layer::new(array![[1., 1.], [1., 0.], [0., 1.]], Activation::Identity),
    ]);
    println!("layer sizes = {:?}", network.layer_sizes());

    let hidden = if args.no_merge {
        Partitioning::identity(2)
    } else {
        Partitioning::merged(2)
    };
    let partitionings = [Partitioning::identity(1), hidden, Partitioning::identity(3)];
    for (i, partitioning) in partitionings.iter().enumerate() {
        partitioning.validate()?;
        println!("partitioning {} = {}", i, partitioning);
    }

    let time_abstract = std::time::Instant::now();
    let ann = abstract_layer_wise(&network, &partitionings, &[IntervalDomain, IntervalDomain])?;
    let time_abstract = time_abstract.elapsed();

    println!("{}", ann);
    println!("Abstracted in {:.3} ms", time_abstract.as_secs_f64() * 1000.0);

    if args.dot {
        let config = DotConfig {
            hide_zero_edges: !args.zero_edges,
            ..DotConfig::default()
        };
        println!("{}", ann.to_dot_with_config(&config)?);
    }

    Ok(())
}
