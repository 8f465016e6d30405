//! Nearest neighbor classification of sessions.
//!
//! The classifier retains its training data and, for each query, scans
//! all of it for the closest example.
pub mod nn;

pub use self::nn::{NearestNeighbor, Neighbor, nearest_neighbor};

use ndarray::prelude::*;


/// Returns the Euclidean distance between two vectors of f64 values.
pub fn euclidean_distance(v1: &ArrayView1<f64>, v2: &ArrayView1<f64>) -> f64 {
    v1.iter()
      .zip(v2.iter())
      .map(|(x,y)| (x - y).powi(2))
      .sum::<f64>()
      .sqrt()
}
