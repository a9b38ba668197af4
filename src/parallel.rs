//! Parallel prediction, evaluation and training using rayon.

use rayon::prelude::*;

use crate::{Perceptron, error::Result, model::Classifier};

/// # Overview
///
/// Parallel prediction for any classifier.
pub fn predict_batch<C: Classifier + Sync>(model: &C, x: &[Vec<f32>]) -> Vec<u8> {
    x.par_iter().map(|xi| model.predict(xi)).collect()
}

/// # Overview
///
/// Parallel accuracy, 0.0 for empty input.
pub fn evaluate_parallel<C: Classifier + Sync>(model: &C, x: &[Vec<f32>], y: &[u8]) -> f32 {
    if x.is_empty() {
        return 0.0;
    }
    let correct: usize = x
        .par_iter()
        .zip(y.par_iter())
        .filter(|(xi, yi)| model.predict(xi) == **yi)
        .count();
    correct as f32 / x.len() as f32
}

/// # Overview
///
/// Fits independent models concurrently, model `i` on `data[i]`.
///
/// Each `fit` itself stays sequential. Results are returned in input order.
pub fn fit_all(models: &mut [Perceptron], data: &[(Vec<Vec<f32>>, Vec<u8>)]) -> Vec<Result<()>> {
    models
        .par_iter_mut()
        .zip(data.par_iter())
        .map(|(model, (x, y))| model.fit(x, y).map(|_| ()))
        .collect()
}
