//! Predicts whether online shopping sessions end in a purchase, and
//! reports how good the predictions are.
//!
//! `shopping` takes as input a CSV file of browsing sessions, with a
//! header row, such as:
//!
//!     Administrative,Administrative_Duration,...,Weekend,Revenue
//!     0,0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE
//!     ...
//!
//! where `Revenue` tells whether the session ended in a purchase.
//!
//! The sessions are randomly split into training and test data; each test
//! session is predicted with the nearest neighbor (1-NN) rule, and the
//! predictions are compared against the true outcome.
//!
//! The general syntax is:
//!
//!     shopping [options] <data>
//!
//! Use `--seed` for a reproducible split. Set `RUST_LOG=debug` for more
//! verbose logging.
extern crate docopt;
extern crate serde;

extern crate shopping;

use docopt::Docopt;
use serde::Deserialize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use log::{info, error};
use std::process;

use shopping::classifier::nearest_neighbor;
use shopping::data::{load_data, train_test_split};
use shopping::evaluation::{evaluate, Metric};


const USAGE: &str = "
Predict purchases of online shopping sessions with a nearest neighbor classifier.

Usage: shopping [options] <data>
       shopping (--help | --version)

Options:
    --test-size=<f>             Fraction of the data used for testing
                                [default: 0.4].
    --seed=<s>                  Seed for randomly splitting the data.
    -h, --help                  Show help.
    --version                   Show the version.
";

#[derive(Debug, Deserialize)]
struct Args {
    flag_test_size: f64,
    flag_seed: Option<u64>,
    arg_data: String,
}

/// Formats a rate as a percentage.
fn percent(metric: Metric) -> String {
    match metric {
        Metric::Value(v) => format!("{:.2}%", 100. * v),
        Metric::Undefined => "n/a".to_string(),
    }
}

fn run(args: &Args) -> shopping::Result<()> {
    let (x, y) = load_data(&args.arg_data)?;
    info!("loaded {} sessions from {}", y.len(), args.arg_data);

    let mut rng = match args.flag_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let split = train_test_split(&x.view(), &y.view(), args.flag_test_size,
                                 &mut rng)?;
    info!("training on {} sessions, testing on {}", split.train_y.len(),
          split.test_y.len());

    let predictions = nearest_neighbor(&split.train_x.view(),
                                       &split.train_y.view(),
                                       &split.test_x.view())?;
    let report = evaluate(&split.test_y.view(), &predictions.view())?;

    println!("Correct: {}", report.counts.correct());
    println!("Incorrect: {}", report.counts.incorrect());
    println!("True Positive Rate: {}", percent(report.sensitivity));
    println!("True Negative Rate: {}", percent(report.specificity));
    println!("F1 Score: {:.2}", report.f1);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default()
                                                  .default_filter_or("info"))
                        .init();

    // Parse args from command line.
    let args: Args = Docopt::new(USAGE)
                            .and_then(|d| d.version(Some(env!("CARGO_PKG_VERSION")
                                                             .to_string()))
                                           .deserialize())
                            .unwrap_or_else(|e| e.exit());

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}
