#[macro_use]
extern crate bencher;
extern crate ndarray;
extern crate rustlearn;

extern crate shopping;

use shopping::*;
use shopping::classifier::*;
use shopping::evaluation::evaluate;
use bencher::Bencher;
use ndarray::prelude::*;
use rustlearn::datasets::*;


/// Load the Iris dataset, turned into a binary problem (setosa or not).
///
/// The rows are interleaved so that training and test data both
/// contain every species.
fn load_iris() -> (Array2<f64>, Array1<Label>, Array2<f64>, Array1<Label>) {
    let n = 150;
    let d = 4;

    let (data, target) = iris::load_data();
    let x = Array::from_shape_vec((n, d), data.data().iter()
                                              .map(|x| *x as f64)
                                              .collect()).unwrap();
    let y = Array::from(target.data().iter()
                              .map(|y| if *y == 0. { 1 } else { 0 })
                              .collect::<Vec<Label>>());

    let train_idx = (0..n).filter(|i| i % 3 != 0).collect::<Vec<_>>();
    let test_idx = (0..n).filter(|i| i % 3 == 0).collect::<Vec<_>>();

    (x.select(Axis(0), &train_idx), y.select(Axis(0), &train_idx),
     x.select(Axis(0), &test_idx), y.select(Axis(0), &test_idx))
}

fn bench_nearest_neighbor(b: &mut Bencher) {
    let (train_x, train_y, test_x, _) = load_iris();

    b.iter(|| {
        nearest_neighbor(&train_x.view(), &train_y.view(), &test_x.view())
            .expect("Failed to predict")
    });
}

fn bench_evaluate(b: &mut Bencher) {
    let (train_x, train_y, test_x, test_y) = load_iris();
    let predictions = nearest_neighbor(&train_x.view(), &train_y.view(),
                                       &test_x.view())
                          .expect("Failed to predict");

    b.iter(|| {
        evaluate(&test_y.view(), &predictions.view())
            .expect("Failed to evaluate")
    });
}

benchmark_group!(benches, bench_nearest_neighbor, bench_evaluate);
benchmark_main!(benches);
