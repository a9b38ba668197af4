//! Unified trait for binary classifiers.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Result;

/// Common interface for binary (0/1) classifiers over real-valued features.
///
/// The plotting and parallel helpers are written against this trait so they
/// work with any model that can label a feature vector.
///
/// # Example
///
/// ```
/// use gate_perceptron::{Classifier, Config, Perceptron};
///
/// let mut model = Perceptron::new(Config::default());
///
/// let x = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
/// let y = vec![0, 1, 1, 1];
///
/// Classifier::fit(&mut model, &x, &y).unwrap();
/// assert_eq!(model.evaluate(&x, &y), 1.0);
/// ```
pub trait Classifier {
    /// Trains the model on labeled data.
    fn fit(&mut self, x: &[Vec<f32>], y: &[u8]) -> Result<()>;

    /// Predicts the label of a single sample.
    fn predict(&self, x: &[f32]) -> u8;

    /// Fraction of samples predicted correctly, 0.0 for empty input.
    fn evaluate(&self, x: &[Vec<f32>], y: &[u8]) -> f32 {
        if x.is_empty() {
            return 0.0;
        }
        let correct = x
            .iter()
            .zip(y)
            .filter(|(xi, yi)| self.predict(xi) == **yi)
            .count();
        correct as f32 / x.len() as f32
    }

    /// Batch prediction for multiple samples.
    fn predict_batch(&self, xs: &[Vec<f32>]) -> Vec<u8> {
        xs.iter().map(|x| self.predict(x)).collect()
    }
}

/// Extension trait for classifiers that threshold a linear net input.
pub trait LinearModel: Classifier {
    /// Returns `w · x + b` for input `x`.
    fn activation(&self, x: &[f32]) -> f32;
}
