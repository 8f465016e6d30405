//! Routines for loading session data and splitting it into training
//! and test data.
use ndarray::prelude::*;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use rand::Rng;
use rand::seq::SliceRandom;
use std::io;
use std::path::Path;
use log::debug;

use crate::{Error, Label, Result, N_FEATURES};

/// One row of the shopping CSV file.
#[derive(Debug, Deserialize)]
struct SessionRecord {
    #[serde(rename = "Administrative")]
    administrative: u32,
    #[serde(rename = "Administrative_Duration")]
    administrative_duration: f64,
    #[serde(rename = "Informational")]
    informational: u32,
    #[serde(rename = "Informational_Duration")]
    informational_duration: f64,
    #[serde(rename = "ProductRelated")]
    product_related: u32,
    #[serde(rename = "ProductRelated_Duration")]
    product_related_duration: f64,
    #[serde(rename = "BounceRates")]
    bounce_rates: f64,
    #[serde(rename = "ExitRates")]
    exit_rates: f64,
    #[serde(rename = "PageValues")]
    page_values: f64,
    #[serde(rename = "SpecialDay")]
    special_day: f64,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "OperatingSystems")]
    operating_systems: u32,
    #[serde(rename = "Browser")]
    browser: u32,
    #[serde(rename = "Region")]
    region: u32,
    #[serde(rename = "TrafficType")]
    traffic_type: u32,
    #[serde(rename = "VisitorType")]
    visitor_type: String,
    #[serde(rename = "Weekend")]
    weekend: String,
    #[serde(rename = "Revenue")]
    revenue: String,
}

impl SessionRecord {
    /// Feature vector, in the order expected by the classifier.
    fn evidence(&self) -> Result<[f64; N_FEATURES]> {
        Ok([
            f64::from(self.administrative),
            self.administrative_duration,
            f64::from(self.informational),
            self.informational_duration,
            f64::from(self.product_related),
            self.product_related_duration,
            self.bounce_rates,
            self.exit_rates,
            self.page_values,
            self.special_day,
            month_index(&self.month)? as f64,
            f64::from(self.operating_systems),
            f64::from(self.browser),
            f64::from(self.region),
            f64::from(self.traffic_type),
            flag(self.visitor_type == "Returning_Visitor"),
            flag(self.weekend == "TRUE"),
        ])
    }

    fn label(&self) -> Label {
        if self.revenue == "TRUE" { 1 } else { 0 }
    }
}

fn flag(b: bool) -> f64 {
    if b { 1. } else { 0. }
}

/// Maps a month's abbreviated name into an index from 0 (January)
/// to 11 (December).
///
/// The dataset writes June in full; "Jun" is accepted as well.
pub fn month_index(name: &str) -> Result<usize> {
    let index = match name {
        "Jan" => 0,
        "Feb" => 1,
        "Mar" => 2,
        "Apr" => 3,
        "May" => 4,
        "Jun" | "June" => 5,
        "Jul" => 6,
        "Aug" => 7,
        "Sep" => 8,
        "Oct" => 9,
        "Nov" => 10,
        "Dec" => 11,
        _ => return Err(Error::UnknownMonth(name.to_owned())),
    };
    Ok(index)
}

/// Loads a shopping CSV data file.
///
/// The file has a header row naming its columns; each row is converted
/// into a feature vector of `N_FEATURES` values (Administrative,
/// Administrative_Duration, Informational, Informational_Duration,
/// ProductRelated, ProductRelated_Duration, BounceRates, ExitRates,
/// PageValues, SpecialDay, Month as 0-11, OperatingSystems, Browser,
/// Region, TrafficType, VisitorType as 1 if returning, Weekend as 1 if
/// true) and a label, which is 1 if Revenue is true.
pub fn load_data<P: AsRef<Path>>(path: P)
        -> Result<(Array2<f64>, Array1<Label>)> {
    let reader = ReaderBuilder::new()
                               .trim(Trim::All)
                               .from_path(path)?;
    read_records(reader)
}

/// Same as `load_data()`, reading CSV data from `reader`.
pub fn load_data_from_reader<R: io::Read>(reader: R)
        -> Result<(Array2<f64>, Array1<Label>)> {
    let reader = ReaderBuilder::new()
                               .trim(Trim::All)
                               .from_reader(reader);
    read_records(reader)
}

fn read_records<R: io::Read>(mut reader: csv::Reader<R>)
        -> Result<(Array2<f64>, Array1<Label>)> {
    let mut inputs: Vec<f64> = Vec::new();
    let mut targets: Vec<Label> = Vec::new();

    for result in reader.deserialize() {
        let record: SessionRecord = result?;
        inputs.extend_from_slice(&record.evidence()?);
        targets.push(record.label());
    }
    debug!("loaded {} sessions", targets.len());

    let inputs = Array::from_shape_vec((targets.len(), N_FEATURES), inputs)?;
    Ok((inputs, Array::from(targets)))
}

/// Training and test data.
#[derive(Debug, Clone)]
pub struct Split {
    pub train_x: Array2<f64>,
    pub train_y: Array1<Label>,
    pub test_x: Array2<f64>,
    pub test_y: Array1<Label>,
}

/// Randomly splits objects `x` and labels `y` into training and test data.
///
/// A fraction `test_size` of the examples, rounded up, is used as test
/// data, and the rest as training data. Each object keeps its label.
pub fn train_test_split<R>(x: &ArrayView2<f64>, y: &ArrayView1<Label>,
                           test_size: f64, rng: &mut R) -> Result<Split>
where R: Rng + ?Sized {
    if x.nrows() != y.len() {
        return Err(Error::LengthMismatch {
            expected: x.nrows(),
            found: y.len(),
        });
    }
    if !(test_size > 0. && test_size < 1.) {
        return Err(Error::InvalidTestSize(test_size));
    }

    let n = y.len();
    let n_test = (test_size * n as f64).ceil() as usize;
    if n_test == 0 || n_test >= n {
        return Err(Error::InsufficientData);
    }

    let mut indices = (0..n).collect::<Vec<_>>();
    indices.shuffle(rng);
    let (test_idx, train_idx) = indices.split_at(n_test);
    debug!("split: {} training, {} test examples", train_idx.len(),
           test_idx.len());

    Ok(Split {
        train_x: x.select(Axis(0), train_idx),
        train_y: y.select(Axis(0), train_idx),
        test_x: x.select(Axis(0), test_idx),
        test_y: y.select(Axis(0), test_idx),
    })
}
