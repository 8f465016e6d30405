//! Predicts whether an online shopping session ends in a purchase.
//!
//! Each session is described by a 17-dimensional feature vector (page
//! counts and durations, bounce and exit rates, page values, month,
//! visitor type, ...). A 1-NN classifier predicts the label of a session
//! as the label of its closest training session under the Euclidean
//! distance, and the predictions are scored in terms of sensitivity,
//! specificity and F1.
//!
//! # Getting started
//!
//! The library is mainly used via the binary it provides, `shopping`,
//! which loads a CSV file, splits it into training and test data, and
//! reports the quality of the predictions: `shopping -h`.
//!
//! The building blocks are:
//!
//! - `data::load_data()` and `data::train_test_split()`;
//! - `classifier::nearest_neighbor()`;
//! - `evaluation::evaluate()`.
//!
//! # Examples
//!
//! ```
//! #[macro_use(array)]
//! extern crate ndarray;
//! extern crate shopping;
//!
//! # fn main() {
//! use shopping::classifier::nearest_neighbor;
//! use shopping::evaluation::evaluate;
//!
//! let train_x = array![[0., 0.], [10., 10.]];
//! let train_y = array![0, 1];
//! let test_x = array![[1., 0.], [9., 11.]];
//! let test_y = array![0, 1];
//!
//! let predictions = nearest_neighbor(&train_x.view(), &train_y.view(),
//!                                    &test_x.view()).unwrap();
//! let report = evaluate(&test_y.view(), &predictions.view()).unwrap();
//!
//! assert_eq!(report.f1, 1.);
//! # }
//! ```
extern crate csv;
extern crate ndarray;
#[macro_use]
extern crate itertools;
extern crate ordered_float;
extern crate float_cmp;

pub mod classifier;
pub mod data;
pub mod error;
pub mod evaluation;

pub use crate::error::{Error, Result};

/// Binary outcome of a session: 0 (no purchase) or 1 (purchase).
pub type Label = usize;

/// Dimensionality of a session's feature vector.
pub const N_FEATURES: usize = 17;
