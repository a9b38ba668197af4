//! Saving and loading trained perceptrons as JSON artifacts.

use std::{
    fs,
    path::{Path, PathBuf}
};

use serde::{Deserialize, Serialize};

use crate::{
    Config, Perceptron, WeightInit,
    error::{Error, Result},
    training::ErrorHistory
};

/// # Overview
///
/// On-disk snapshot of a trained perceptron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub weights:       Vec<f32>,
    pub bias:          f32,
    pub eta:           f32,
    pub epochs:        usize,
    #[serde(default)]
    pub init:          WeightInit,
    #[serde(default)]
    pub error_history: ErrorHistory
}

impl ModelArtifact {
    /// # Overview
    ///
    /// Snapshots a trained model. JSON has no encoding for infinities or NaN,
    /// so diverged parameters are rejected.
    pub fn from_model(model: &Perceptron) -> Result<Self> {
        if !model.trained {
            return Err(Error::NotFitted);
        }
        if !model.bias.is_finite() || model.weights.iter().any(|w| !w.is_finite()) {
            return Err(Error::NonFiniteParameters);
        }
        Ok(Self {
            weights:       model.weights.clone(),
            bias:          model.bias,
            eta:           model.config.eta,
            epochs:        model.config.epochs,
            init:          model.config.init,
            error_history: model.history.clone()
        })
    }

    /// # Overview
    ///
    /// Rebuilds a trained model, re-validating the hyperparameters.
    pub fn into_model(self) -> Result<Perceptron> {
        let config = Config {
            eta:    self.eta,
            epochs: self.epochs,
            init:   self.init
        };
        config.validate()?;

        Ok(Perceptron {
            config,
            weights: self.weights,
            bias: self.bias,
            history: self.error_history,
            trained: true
        })
    }
}

/// Path of the artifact `identifier` under `location`.
///
/// The identifier must be a plain file name.
pub fn artifact_path(identifier: &str, location: impl AsRef<Path>) -> Result<PathBuf> {
    let plain = !identifier.is_empty()
        && identifier != "."
        && identifier != ".."
        && !identifier.contains(['/', '\\']);
    if !plain {
        return Err(Error::InvalidIdentifier(identifier.to_string()));
    }
    Ok(location.as_ref().join(identifier))
}

impl Perceptron {
    /// # Overview
    ///
    /// Writes the model to `location/identifier`, creating `location` if
    /// needed and replacing any previous artifact. Returns the written path.
    ///
    /// # Errors
    ///
    /// [`Error::NotFitted`] for an untrained model,
    /// [`Error::NonFiniteParameters`] for diverged weights or bias,
    /// [`Error::InvalidIdentifier`] for an identifier that is not a plain
    /// file name, and [`Error::Io`] on write failure.
    pub fn save(&self, identifier: &str, location: impl AsRef<Path>) -> Result<PathBuf> {
        let artifact = ModelArtifact::from_model(self)?;
        let path = artifact_path(identifier, &location)?;

        fs::create_dir_all(location.as_ref())?;
        fs::write(&path, serde_json::to_string_pretty(&artifact)?)?;
        Ok(path)
    }

    /// # Overview
    ///
    /// Reads a model written by [`save`](Self::save).
    pub fn load(identifier: &str, location: impl AsRef<Path>) -> Result<Self> {
        let path = artifact_path(identifier, location)?;
        let artifact: ModelArtifact = serde_json::from_str(&fs::read_to_string(path)?)?;
        artifact.into_model()
    }
}
