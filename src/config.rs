//! Hyperparameters and builder for the perceptron.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default learning rate.
pub const DEFAULT_ETA: f32 = 0.3;

/// Default number of training epochs.
pub const DEFAULT_EPOCHS: usize = 10;

/// # Overview
///
/// How weights are initialized at the start of every `fit`.
///
/// The bias always starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "snake_case"))]
pub enum WeightInit {
    /// All weights start at 0.0.
    #[default]
    Zeros,
    /// Weights drawn uniformly from `[-scale, scale)` with a seeded RNG.
    SmallRandom { seed: u64, scale: f32 }
}

/// # Overview
///
/// Hyperparameters of a perceptron, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct Config {
    pub eta:    f32,
    pub epochs: usize,
    pub init:   WeightInit
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eta:    DEFAULT_ETA,
            epochs: DEFAULT_EPOCHS,
            init:   WeightInit::Zeros
        }
    }
}

impl Config {
    /// # Overview
    ///
    /// Creates a new ConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.eta.is_finite() || self.eta <= 0.0 {
            return Err(Error::InvalidLearningRate);
        }
        if self.epochs == 0 {
            return Err(Error::InvalidEpochs);
        }
        if let WeightInit::SmallRandom { scale, .. } = self.init
            && (!scale.is_finite() || scale < 0.0)
        {
            return Err(Error::InvalidInitScale);
        }
        Ok(())
    }
}

/// # Overview
///
/// Builder for Config with validation.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    eta:    Option<f32>,
    epochs: Option<usize>,
    init:   Option<WeightInit>
}

impl ConfigBuilder {
    /// # Overview
    ///
    /// Sets the learning rate (default: 0.3).
    pub fn eta(mut self, eta: f32) -> Self {
        self.eta = Some(eta);
        self
    }

    /// # Overview
    ///
    /// Sets the number of passes over the data (default: 10).
    pub fn epochs(mut self, n: usize) -> Self {
        self.epochs = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the weight initialization policy (default: zeros).
    pub fn init(mut self, init: WeightInit) -> Self {
        self.init = Some(init);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the Config.
    pub fn build(self) -> Result<Config> {
        let config = Config {
            eta:    self.eta.unwrap_or(DEFAULT_ETA),
            epochs: self.epochs.unwrap_or(DEFAULT_EPOCHS),
            init:   self.init.unwrap_or_default()
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_with_defaults() {
        let config = Config::builder().build().unwrap();

        assert!((config.eta - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.epochs, 10);
        assert_eq!(config.init, WeightInit::Zeros);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn builder_rejects_non_positive_eta() {
        assert!(matches!(
            Config::builder().eta(0.0).build(),
            Err(Error::InvalidLearningRate)
        ));
        assert!(matches!(
            Config::builder().eta(-0.1).build(),
            Err(Error::InvalidLearningRate)
        ));
        assert!(matches!(
            Config::builder().eta(f32::NAN).build(),
            Err(Error::InvalidLearningRate)
        ));
    }

    #[test]
    fn builder_rejects_zero_epochs() {
        assert!(matches!(
            Config::builder().epochs(0).build(),
            Err(Error::InvalidEpochs)
        ));
    }

    #[test]
    fn builder_rejects_negative_init_scale() {
        let result = Config::builder()
            .init(WeightInit::SmallRandom {
                seed:  1,
                scale: -1.0
            })
            .build();
        assert!(matches!(result, Err(Error::InvalidInitScale)));
    }

    #[test]
    fn builder_custom_values() {
        let config = Config::builder()
            .eta(0.1)
            .epochs(50)
            .init(WeightInit::SmallRandom {
                seed:  7,
                scale: 1e-4
            })
            .build()
            .unwrap();

        assert_eq!(config.epochs, 50);
        assert!(matches!(config.init, WeightInit::SmallRandom { seed: 7, .. }));
    }
}
