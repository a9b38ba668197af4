//! Single-layer perceptron trained with the online update rule.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::{
    Config, WeightInit,
    error::{Error, Result},
    training::ErrorHistory,
    utils::{rng_from_seed, symmetric_uniform}
};

/// # Overview
///
/// Linear threshold classifier over 0/1 labels.
///
/// Predicts `1` when `w · x + b >= 0` and `0` otherwise. Training visits the
/// rows in their given order once per epoch and, for every row, applies
/// `Δ = eta * (y - ŷ)`, `w += Δ·x`, `b += Δ`. A row with `Δ != 0` counts as
/// one error for that epoch.
///
/// # Examples
///
/// ```
/// use gate_perceptron::{Config, Perceptron};
///
/// let config = Config::builder().eta(0.3).epochs(10).build().unwrap();
/// let mut model = Perceptron::new(config);
///
/// let x = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
/// let y = vec![0, 0, 0, 1];
///
/// model.fit(&x, &y).unwrap();
/// assert_eq!(model.predict_batch(&x), y);
/// assert!(model.history().is_converged());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    pub(crate) config:  Config,
    pub(crate) weights: Vec<f32>,
    pub(crate) bias:    f32,
    pub(crate) history: ErrorHistory,
    pub(crate) trained: bool
}

impl Perceptron {
    /// # Overview
    ///
    /// Creates an untrained perceptron. Weights are sized on the first `fit`.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            weights: Vec::new(),
            bias: 0.0,
            history: ErrorHistory::default(),
            trained: false
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn eta(&self) -> f32 {
        self.config.eta
    }

    #[inline]
    pub fn epochs(&self) -> usize {
        self.config.epochs
    }

    /// Learned weights, empty before the first `fit`.
    #[inline]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    #[inline]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Error count of every epoch of the last `fit`.
    #[inline]
    pub fn history(&self) -> &ErrorHistory {
        &self.history
    }

    #[inline]
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// # Overview
    ///
    /// Net input `w · x + b`.
    ///
    /// Before `fit` every weight is implicitly zero, so this returns the bias.
    /// After `fit`, `x` must have the fitted feature count.
    #[inline]
    pub fn activation(&self, x: &[f32]) -> f32 {
        debug_assert!(
            !self.trained || x.len() == self.weights.len(),
            "expected {} features, got {}",
            self.weights.len(),
            x.len()
        );
        let dot: f32 = self.weights.iter().zip(x).map(|(w, xi)| w * xi).sum();
        dot + self.bias
    }

    /// # Overview
    ///
    /// Predicts class (0 or 1).
    #[inline(always)]
    pub fn predict(&self, x: &[f32]) -> u8 {
        if self.activation(x) >= 0.0 { 1 } else { 0 }
    }

    /// # Overview
    ///
    /// Batch prediction for multiple samples.
    #[inline]
    pub fn predict_batch(&self, xs: &[Vec<f32>]) -> Vec<u8> {
        xs.iter().map(|x| self.predict(x)).collect()
    }

    /// Trains for `config.epochs` passes over the data.
    ///
    /// Weights are re-initialized and the history cleared first, so calling
    /// `fit` again retrains from scratch. Invalid input is rejected before any
    /// state changes.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyDataset`], [`Error::LengthMismatch`],
    /// [`Error::DimensionMismatch`] for ragged rows and
    /// [`Error::InvalidLabel`] for labels other than 0 or 1, and the
    /// config errors of [`Config::validate`].
    pub fn fit(&mut self, x: &[Vec<f32>], y: &[u8]) -> Result<&mut Self> {
        self.fit_with_callback(x, y, |_, _| {})
    }

    /// Trains like [`fit`](Self::fit), calling `on_epoch(epoch, errors)`
    /// after every epoch with the 1-based epoch number.
    pub fn fit_with_callback<F>(&mut self, x: &[Vec<f32>], y: &[u8], mut on_epoch: F) -> Result<&mut Self>
    where
        F: FnMut(usize, usize)
    {
        self.config.validate()?;
        let n_features = validate(x, y)?;

        self.weights = initial_weights(self.config.init, n_features);
        self.bias = 0.0;
        self.history = ErrorHistory::with_capacity(self.config.epochs);

        for epoch in 0..self.config.epochs {
            let errors = x
                .iter()
                .zip(y)
                .map(|(xi, &yi)| self.train_one(xi, yi))
                .filter(|&updated| updated)
                .count();

            self.history.push(errors);
            on_epoch(epoch + 1, errors);
        }

        self.trained = true;
        Ok(self)
    }

    /// # Overview
    ///
    /// Applies one online update. Returns `true` if the sample was
    /// misclassified.
    #[inline]
    fn train_one(&mut self, x: &[f32], y: u8) -> bool {
        let delta = self.config.eta * (f32::from(y) - f32::from(self.predict(x)));
        if delta == 0.0 {
            return false;
        }

        for (w, xi) in self.weights.iter_mut().zip(x) {
            *w += delta * xi;
        }
        self.bias += delta;
        true
    }

    /// # Overview
    ///
    /// Sum of the per-epoch error counts of the last `fit`.
    pub fn total_loss(&self) -> Result<usize> {
        if !self.trained {
            return Err(Error::NotFitted);
        }
        Ok(self.history.total())
    }

    /// Evaluates accuracy on test data.
    ///
    /// Returns fraction of correct predictions (0.0 to 1.0).
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: &[Vec<f32>], y: &[u8]) -> f32 {
        crate::model::Classifier::evaluate(self, x, y)
    }
}

/// Checks training input and returns the feature count.
fn validate(x: &[Vec<f32>], y: &[u8]) -> Result<usize> {
    let first = x.first().ok_or(Error::EmptyDataset)?;
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            features: x.len(),
            labels:   y.len()
        });
    }

    let n_features = first.len();
    if let Some(row) = x.iter().find(|row| row.len() != n_features) {
        return Err(Error::DimensionMismatch {
            expected: n_features,
            got:      row.len()
        });
    }
    if let Some((row, &label)) = y.iter().enumerate().find(|&(_, &label)| label > 1) {
        return Err(Error::InvalidLabel {
            row,
            value: f32::from(label)
        });
    }

    Ok(n_features)
}

fn initial_weights(init: WeightInit, n_features: usize) -> Vec<f32> {
    match init {
        WeightInit::Zeros => vec![0.0; n_features],
        WeightInit::SmallRandom { seed, scale } => {
            let mut rng = rng_from_seed(seed);
            (0..n_features)
                .map(|_| symmetric_uniform(&mut rng, scale))
                .collect()
        }
    }
}

impl crate::model::Classifier for Perceptron {
    fn fit(&mut self, x: &[Vec<f32>], y: &[u8]) -> Result<()> {
        Perceptron::fit(self, x, y).map(|_| ())
    }

    fn predict(&self, x: &[f32]) -> u8 {
        Perceptron::predict(self, x)
    }

    fn predict_batch(&self, xs: &[Vec<f32>]) -> Vec<u8> {
        Perceptron::predict_batch(self, xs)
    }
}

impl crate::model::LinearModel for Perceptron {
    fn activation(&self, x: &[f32]) -> f32 {
        Perceptron::activation(self, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> Vec<Vec<f32>> {
        vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]]
    }

    fn model(epochs: usize) -> Perceptron {
        Perceptron::new(Config::builder().eta(0.3).epochs(epochs).build().unwrap())
    }

    #[test]
    fn and_converges() {
        let mut p = model(10);
        p.fit(&inputs(), &[0, 0, 0, 1]).unwrap();

        assert_eq!(p.history().as_slice(), &[2, 3, 3, 2, 1, 0, 0, 0, 0, 0]);
        assert_eq!(p.total_loss().unwrap(), 11);
        assert_eq!(p.predict_batch(&inputs()), vec![0, 0, 0, 1]);
    }

    #[test]
    fn or_converges() {
        let mut p = model(10);
        p.fit(&inputs(), &[0, 1, 1, 1]).unwrap();

        assert_eq!(p.history().converged_at(), Some(3));
        assert_eq!(p.predict_batch(&inputs()), vec![0, 1, 1, 1]);
    }

    #[test]
    fn xor_never_converges() {
        let mut p = model(50);
        p.fit(&inputs(), &[0, 1, 1, 0]).unwrap();

        assert!(p.history().iter().all(|e| e > 0));
        assert!(p.total_loss().unwrap() > 0);
        assert!(p.evaluate(&inputs(), &[0, 1, 1, 0]) < 1.0);
    }

    #[test]
    fn predict_before_fit_is_degenerate() {
        let p = model(10);
        assert!(!p.is_trained());
        assert!(p.weights().is_empty());
        assert_eq!(p.activation(&[1.0, 1.0]), 0.0);
        assert_eq!(p.predict_batch(&inputs()), vec![1, 1, 1, 1]);
    }

    #[test]
    fn total_loss_requires_fit() {
        assert!(matches!(model(10).total_loss(), Err(Error::NotFitted)));
    }

    #[test]
    fn fit_rejects_empty_input() {
        let mut p = model(10);
        assert!(matches!(p.fit(&[], &[]), Err(Error::EmptyDataset)));
        assert!(!p.is_trained());
    }

    #[test]
    fn fit_rejects_mismatched_lengths_without_mutation() {
        let mut p = model(10);
        p.fit(&inputs(), &[0, 0, 0, 1]).unwrap();
        let before = p.clone();

        let result = p.fit(&inputs(), &[0, 1]);
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                features: 4,
                labels:   2
            })
        ));
        assert_eq!(p, before);
    }

    #[test]
    fn fit_rejects_ragged_rows() {
        let mut p = model(10);
        let x = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            p.fit(&x, &[0, 1]),
            Err(Error::DimensionMismatch {
                expected: 2,
                got:      1
            })
        ));
    }

    #[test]
    fn fit_rejects_invalid_label() {
        let mut p = model(10);
        assert!(matches!(
            p.fit(&inputs(), &[0, 1, 2, 0]),
            Err(Error::InvalidLabel { row: 2, .. })
        ));
    }

    #[test]
    fn fit_rejects_hand_built_config() {
        let mut p = Perceptron::new(Config {
            eta:    0.3,
            epochs: 0,
            init:   WeightInit::Zeros
        });
        assert!(matches!(p.fit(&inputs(), &[0, 0, 0, 1]), Err(Error::InvalidEpochs)));
        assert!(!p.is_trained());
        assert!(p.weights().is_empty());

        let mut p = Perceptron::new(Config {
            eta:    -1.0,
            epochs: 10,
            init:   WeightInit::Zeros
        });
        assert!(matches!(p.fit(&inputs(), &[0, 0, 0, 1]), Err(Error::InvalidLearningRate)));
        assert!(matches!(p.total_loss(), Err(Error::NotFitted)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "expected 2 features, got 3")]
    fn predict_checks_row_width_after_fit() {
        let mut p = model(10);
        p.fit(&inputs(), &[0, 0, 0, 1]).unwrap();
        p.predict(&[1.0, 1.0, -100.0]);
    }

    #[test]
    fn refit_resets_state() {
        let mut p = model(10);
        p.fit(&inputs(), &[0, 1, 1, 0]).unwrap();
        p.fit(&inputs(), &[0, 0, 0, 1]).unwrap();

        let mut fresh = model(10);
        fresh.fit(&inputs(), &[0, 0, 0, 1]).unwrap();

        assert_eq!(p, fresh);
    }

    #[test]
    fn callback_sees_every_epoch() {
        let mut seen = Vec::new();
        let mut p = model(4);
        p.fit_with_callback(&inputs(), &[0, 1, 1, 1], |epoch, errors| seen.push((epoch, errors)))
            .unwrap();

        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].0, 1);
        assert_eq!(
            seen.iter().map(|&(_, e)| e).collect::<Vec<_>>(),
            p.history().as_slice()
        );
    }

    #[test]
    fn trait_objects_agree_with_inherent_api() {
        use crate::model::{Classifier, LinearModel};

        let mut p = model(10);
        Classifier::fit(&mut p, &inputs(), &[1, 1, 1, 0]).unwrap();

        let linear: &dyn LinearModel = &p;
        assert_eq!(linear.activation(&[1.0, 1.0]), p.activation(&[1.0, 1.0]));
        assert_eq!(linear.predict_batch(&inputs()), vec![1, 1, 1, 0]);
        assert_eq!(linear.evaluate(&inputs(), &[1, 1, 1, 0]), 1.0);
    }

    #[test]
    fn random_init_is_seeded() {
        let config = Config::builder()
            .epochs(100)
            .init(WeightInit::SmallRandom {
                seed:  42,
                scale: 1e-2
            })
            .build()
            .unwrap();

        let mut a = Perceptron::new(config);
        let mut b = Perceptron::new(config);
        a.fit(&inputs(), &[1, 1, 1, 0]).unwrap();
        b.fit(&inputs(), &[1, 1, 1, 0]).unwrap();

        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.history(), b.history());
        assert!(a.history().is_converged());
        assert_eq!(a.predict_batch(&inputs()), vec![1, 1, 1, 0]);
    }
}
