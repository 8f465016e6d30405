//! 1-NN classifier with exhaustive search.
//!
//! `NearestNeighbor` borrows training data and a distance function, and
//! predicts the label of a query as the label of the training example
//! closest to it. When several training examples are equally close, the
//! one appearing first in the training data wins; predictions are
//! therefore fully determined by the order of the training data.
//!
//! # Examples
//!
//! ```
//! #[macro_use(array)]
//! extern crate ndarray;
//! extern crate shopping;
//!
//! # fn main() {
//! use shopping::classifier::*;
//!
//! let train_x = array![[1.],
//!                      [-1.],
//!                      [5.]];
//! let train_y = array![1, 0, 0];
//!
//! let nn = NearestNeighbor::new(train_x.view(), train_y.view(),
//!                               euclidean_distance).unwrap();
//!
//! // [0.] is equally far from [1.] and [-1.]: the first one wins.
//! assert_eq!(nn.predict_one(&array![0.].view()).unwrap(), 1);
//! assert_eq!(nn.predict(&array![[4.], [-2.]].view()).unwrap(),
//!            array![0, 0]);
//! # }
//! ```
use ndarray::*;
use ordered_float::OrderedFloat;
use log::debug;

use crate::{Error, Label, Result};
use crate::classifier::euclidean_distance;

/// Training example closest to some query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the example in the training data.
    pub index: usize,
    /// Distance from the query.
    pub distance: f64,
    pub label: Label,
}

/// A 1-NN classifier over borrowed training data.
pub struct NearestNeighbor<'a, D>
where D: Fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64 {
    train_x: ArrayView2<'a, f64>,
    train_y: ArrayView1<'a, Label>,
    distance: D,
}

impl<'a, D> NearestNeighbor<'a, D>
where D: Fn(&ArrayView1<f64>, &ArrayView1<f64>) -> f64 + Send + Sync {
    /// Create a new classifier from training objects and their labels.
    ///
    /// Fails if there are no training examples, or if the number of
    /// objects and labels differ.
    pub fn new(train_x: ArrayView2<'a, f64>, train_y: ArrayView1<'a, Label>,
               distance: D) -> Result<NearestNeighbor<'a, D>> {
        if train_x.nrows() != train_y.len() {
            return Err(Error::LengthMismatch {
                expected: train_x.nrows(),
                found: train_y.len(),
            });
        }
        if train_y.is_empty() {
            return Err(Error::InsufficientData);
        }

        Ok(NearestNeighbor {
            train_x,
            train_y,
            distance,
        })
    }

    /// Number of features of each object.
    pub fn n_features(&self) -> usize {
        self.train_x.ncols()
    }

    /// Number of training examples.
    pub fn n_train(&self) -> usize {
        self.train_y.len()
    }

    fn check_dimension(&self, found: usize) -> Result<()> {
        if found != self.n_features() {
            return Err(Error::DimensionMismatch {
                expected: self.n_features(),
                found,
            });
        }
        Ok(())
    }

    /// Returns the training example closest to `x`.
    ///
    /// Ties are split in favour of the example that comes first in the
    /// training data.
    pub fn nearest(&self, x: &ArrayView1<f64>) -> Result<Neighbor> {
        self.check_dimension(x.len())?;

        // NOTE: min_by_key() returns the first of several equal minima.
        self.train_x.outer_iter()
                    .zip(self.train_y.iter())
                    .enumerate()
                    .map(|(index, (xi, yi))| Neighbor {
                        index,
                        distance: (self.distance)(&xi, x),
                        label: *yi,
                    })
                    .min_by_key(|neigh| OrderedFloat::from(neigh.distance))
                    .ok_or(Error::InsufficientData)
    }

    /// Predicts the label of a single object.
    pub fn predict_one(&self, x: &ArrayView1<f64>) -> Result<Label> {
        Ok(self.nearest(x)?.label)
    }

    /// Predicts the label of each row of `test_x`.
    ///
    /// Predictions are returned in the same order as the rows.
    pub fn predict(&self, test_x: &ArrayView2<f64>) -> Result<Array1<Label>> {
        if test_x.nrows() == 0 {
            return Ok(Array1::zeros(0));
        }
        self.check_dimension(test_x.ncols())?;
        debug!("predicting {} objects from {} training examples",
               test_x.nrows(), self.n_train());

        #[cfg(feature = "parallel")]
        let predictions = {
            use rayon::prelude::*;
            (0..test_x.nrows()).into_par_iter()
                               .map(|i| self.predict_one(&test_x.row(i)))
                               .collect::<Result<Vec<_>>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let predictions = test_x.outer_iter()
                                .map(|x| self.predict_one(&x))
                                .collect::<Result<Vec<_>>>()?;

        Ok(Array::from(predictions))
    }
}

/// Predicts the label of each object in `test_x` with the 1-NN rule
/// under the Euclidean distance, given training objects `train_x` with
/// labels `train_y`.
pub fn nearest_neighbor(train_x: &ArrayView2<f64>, train_y: &ArrayView1<Label>,
                        test_x: &ArrayView2<f64>) -> Result<Array1<Label>> {
    let nn = NearestNeighbor::new(train_x.view(), train_y.view(),
                                  euclidean_distance)?;
    nn.predict(test_x)
}
