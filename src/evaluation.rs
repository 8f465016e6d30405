//! Quality measures of binary predictions.
//!
//! Predictions are compared against the true labels through a confusion
//! matrix, from which sensitivity (true positive rate), specificity
//! (true negative rate), precision and F1 are derived.
//!
//! A rate whose denominator is zero (e.g., sensitivity when the data
//! contains no positive examples) is `Metric::Undefined` rather than a
//! number. F1 is always a number: an undefined precision or recall
//! counts as 0 when computing it, and F1 is 0 when both are 0.
use std::fmt;
use ndarray::*;
use float_cmp::approx_eq;
use log::{debug, warn};

use crate::{Error, Label, Result};

/// A rate that may be undefined because its denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Undefined,
}

impl Metric {
    /// Returns `numerator / denominator`, or `Undefined` if the
    /// denominator is zero.
    fn ratio(numerator: usize, denominator: usize) -> Metric {
        match denominator {
            0 => Metric::Undefined,
            d => Metric::Value(numerator as f64 / d as f64),
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        self.value().is_some()
    }

    /// Returns the value, or `default` if undefined.
    pub fn unwrap_or(self, default: f64) -> f64 {
        self.value().unwrap_or(default)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{}", v),
            Metric::Undefined => write!(f, "undefined"),
        }
    }
}

/// Counts of a binary confusion matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Counts the confusion matrix cells of paired true and predicted
    /// labels.
    ///
    /// Fails if the two sequences have different lengths, or if any
    /// label is not 0 or 1.
    pub fn from_labels(true_y: &ArrayView1<Label>, pred_y: &ArrayView1<Label>)
            -> Result<ConfusionCounts> {
        if true_y.len() != pred_y.len() {
            return Err(Error::LengthMismatch {
                expected: true_y.len(),
                found: pred_y.len(),
            });
        }

        let mut counts = ConfusionCounts::default();

        for (y, pred) in izip!(true_y, pred_y) {
            match (*y, *pred) {
                (1, 1) => counts.true_positives += 1,
                (1, 0) => counts.false_negatives += 1,
                (0, 0) => counts.true_negatives += 1,
                (0, 1) => counts.false_positives += 1,
                (0, p) | (1, p) => return Err(Error::InvalidLabel(p)),
                (y, _) => return Err(Error::InvalidLabel(y)),
            }
        }
        Ok(counts)
    }

    /// Number of evaluated pairs.
    pub fn total(&self) -> usize {
        self.true_positives + self.true_negatives
            + self.false_positives + self.false_negatives
    }

    /// Number of correct predictions.
    pub fn correct(&self) -> usize {
        self.true_positives + self.true_negatives
    }

    /// Number of wrong predictions.
    pub fn incorrect(&self) -> usize {
        self.false_positives + self.false_negatives
    }

    /// True positive rate: TP / (TP + FN).
    pub fn sensitivity(&self) -> Metric {
        Metric::ratio(self.true_positives,
                      self.true_positives + self.false_negatives)
    }

    /// True negative rate: TN / (TN + FP).
    pub fn specificity(&self) -> Metric {
        Metric::ratio(self.true_negatives,
                      self.true_negatives + self.false_positives)
    }

    /// TP / (TP + FP).
    pub fn precision(&self) -> Metric {
        Metric::ratio(self.true_positives,
                      self.true_positives + self.false_positives)
    }

    /// Same as sensitivity.
    pub fn recall(&self) -> Metric {
        self.sensitivity()
    }

    /// Harmonic mean of precision and recall.
    pub fn f1(&self) -> f64 {
        let precision = self.precision().unwrap_or(0.);
        let recall = self.recall().unwrap_or(0.);

        if approx_eq!(f64, precision + recall, 0.) {
            0.
        } else {
            2. * precision * recall / (precision + recall)
        }
    }
}

/// Summary of the quality of a set of predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsReport {
    pub counts: ConfusionCounts,
    pub sensitivity: Metric,
    pub specificity: Metric,
    pub precision: Metric,
    pub f1: f64,
}

impl From<ConfusionCounts> for MetricsReport {
    fn from(counts: ConfusionCounts) -> MetricsReport {
        MetricsReport {
            counts,
            sensitivity: counts.sensitivity(),
            specificity: counts.specificity(),
            precision: counts.precision(),
            f1: counts.f1(),
        }
    }
}

/// Evaluates predictions `pred_y` against the true labels `true_y`.
pub fn evaluate(true_y: &ArrayView1<Label>, pred_y: &ArrayView1<Label>)
        -> Result<MetricsReport> {
    let counts = ConfusionCounts::from_labels(true_y, pred_y)?;
    debug!("confusion counts: {:?}", counts);

    let report = MetricsReport::from(counts);
    if !report.sensitivity.is_defined() {
        warn!("no positive examples: sensitivity is undefined");
    }
    if !report.specificity.is_defined() {
        warn!("no negative examples: specificity is undefined");
    }
    Ok(report)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_correct() {
        let y = array![1, 0, 0, 1, 1, 0, 1];
        let report = evaluate(&y.view(), &y.view()).unwrap();

        assert_eq!(report.counts.total(), 7);
        assert_eq!(report.counts.correct(), 7);
        assert_eq!(report.sensitivity, Metric::Value(1.));
        assert_eq!(report.specificity, Metric::Value(1.));
        assert_eq!(report.precision, Metric::Value(1.));
        assert_eq!(report.f1, 1.);
    }

    #[test]
    fn one_of_each() {
        let true_y = array![1, 1, 0, 0];
        let pred_y = array![1, 0, 0, 1];
        let report = evaluate(&true_y.view(), &pred_y.view()).unwrap();

        assert_eq!(report.counts, ConfusionCounts {
            true_positives: 1,
            true_negatives: 1,
            false_positives: 1,
            false_negatives: 1,
        });
        assert_eq!(report.sensitivity, Metric::Value(0.5));
        assert_eq!(report.specificity, Metric::Value(0.5));
        assert_eq!(report.precision, Metric::Value(0.5));
        assert!(approx_eq!(f64, report.f1, 0.5));
    }

    #[test]
    fn counts_sum_to_total() {
        let true_y = array![0, 1, 1, 0, 0, 1, 0, 0, 1, 1, 0];
        let pred_y = array![1, 1, 0, 0, 0, 1, 1, 0, 0, 1, 0];
        let counts = ConfusionCounts::from_labels(&true_y.view(),
                                                  &pred_y.view()).unwrap();

        assert_eq!(counts.total(), true_y.len());
        assert_eq!(counts.correct() + counts.incorrect(), true_y.len());
        assert_eq!(counts.true_positives, 3);
        assert_eq!(counts.false_negatives, 2);
        assert_eq!(counts.true_negatives, 4);
        assert_eq!(counts.false_positives, 2);

        // precision = 3/5, recall = 3/5.
        assert!(approx_eq!(f64, counts.f1(), 0.6));
    }

    #[test]
    fn no_actual_positives() {
        let true_y = array![0, 0, 0];
        let pred_y = array![0, 1, 0];
        let report = evaluate(&true_y.view(), &pred_y.view()).unwrap();

        assert_eq!(report.sensitivity, Metric::Undefined);
        assert!(approx_eq!(f64, report.specificity.unwrap_or(-1.), 2. / 3.));
        assert_eq!(report.precision, Metric::Value(0.));
        assert_eq!(report.f1, 0.);
    }

    #[test]
    fn no_predicted_positives() {
        let true_y = array![1, 0, 1, 0];
        let pred_y = array![0, 0, 0, 0];
        let report = evaluate(&true_y.view(), &pred_y.view()).unwrap();

        assert_eq!(report.sensitivity, Metric::Value(0.));
        assert_eq!(report.specificity, Metric::Value(1.));
        assert_eq!(report.precision, Metric::Undefined);
        assert_eq!(report.f1, 0.);
    }

    #[test]
    fn no_actual_negatives() {
        let true_y = array![1, 1];
        let pred_y = array![1, 0];
        let report = evaluate(&true_y.view(), &pred_y.view()).unwrap();

        assert_eq!(report.sensitivity, Metric::Value(0.5));
        assert_eq!(report.specificity, Metric::Undefined);
        // precision = 1, recall = 0.5.
        assert!(approx_eq!(f64, report.f1, 2. / 3.));
    }

    #[test]
    fn empty() {
        let y = Array1::<Label>::zeros(0);
        let report = evaluate(&y.view(), &y.view()).unwrap();

        assert_eq!(report.counts.total(), 0);
        assert_eq!(report.sensitivity, Metric::Undefined);
        assert_eq!(report.specificity, Metric::Undefined);
        assert_eq!(report.f1, 0.);
    }

    #[test]
    fn evaluate_errors() {
        let true_y = array![0, 1, 1];
        let pred_y = array![0, 1];
        assert!(matches!(evaluate(&true_y.view(), &pred_y.view()),
                         Err(Error::LengthMismatch { expected: 3, found: 2 })));

        let pred_y = array![0, 2, 1];
        assert!(matches!(evaluate(&true_y.view(), &pred_y.view()),
                         Err(Error::InvalidLabel(2))));

        let true_y = array![0, 1, 3];
        let pred_y = array![0, 1, 1];
        assert!(matches!(evaluate(&true_y.view(), &pred_y.view()),
                         Err(Error::InvalidLabel(3))));
    }

    #[test]
    fn metric_display() {
        assert_eq!(format!("{}", Metric::Value(0.25)), "0.25");
        assert_eq!(format!("{}", Metric::Undefined), "undefined");
        assert_eq!(Metric::Undefined.unwrap_or(0.), 0.);
    }
}
