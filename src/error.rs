//! Error types for the perceptron and its collaborators.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// # Overview
///
/// Errors that can occur when building datasets, configuring, training,
/// persisting, or plotting a perceptron.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("column `{0}` not found in dataset")]
    MissingColumn(String),
    #[error("column `{0}` appears more than once")]
    DuplicateColumn(String),
    #[error("column `{name}` has {got} rows, expected {expected}")]
    RaggedColumns {
        name:     String,
        expected: usize,
        got:      usize
    },
    #[error("label {value} at row {row} is not 0 or 1")]
    InvalidLabel { row: usize, value: f32 },
    #[error("dataset cannot be empty")]
    EmptyDataset,
    #[error("feature matrix has {features} rows but label vector has {labels}")]
    LengthMismatch { features: usize, labels: usize },
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("model has not been fitted")]
    NotFitted,
    #[error("eta must be finite and > 0")]
    InvalidLearningRate,
    #[error("epochs must be > 0")]
    InvalidEpochs,
    #[error("weight init scale must be finite and >= 0")]
    InvalidInitScale,
    #[error("model parameters are not finite")]
    NonFiniteParameters,
    #[error("invalid model identifier `{0}`")]
    InvalidIdentifier(String),
    #[cfg(feature = "std")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "std")]
    #[error("model artifact error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "std")]
    #[error("image error: {0}")]
    Image(#[from] image::ImageError)
}

impl Error {
    /// # Overview
    ///
    /// True for errors describing a malformed dataset schema.
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn(_)
                | Self::DuplicateColumn(_)
                | Self::RaggedColumns { .. }
                | Self::InvalidLabel { .. }
        )
    }

    /// # Overview
    ///
    /// True for errors describing mismatched or empty training input.
    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::EmptyDataset | Self::LengthMismatch { .. } | Self::DimensionMismatch { .. }
        )
    }
}

/// # Overview
///
/// Result type for perceptron operations.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::MissingColumn("y".into()).to_string(),
            "column `y` not found in dataset"
        );
        assert_eq!(
            Error::LengthMismatch {
                features: 4,
                labels:   3
            }
            .to_string(),
            "feature matrix has 4 rows but label vector has 3"
        );
        assert_eq!(Error::NotFitted.to_string(), "model has not been fitted");
    }

    #[test]
    fn error_kinds() {
        assert!(Error::MissingColumn("y".into()).is_schema());
        assert!(Error::EmptyDataset.is_shape());
        assert!(
            Error::DimensionMismatch {
                expected: 2,
                got:      3
            }
            .is_shape()
        );
        assert!(!Error::NotFitted.is_shape());
        assert!(!Error::NotFitted.is_schema());
    }
}
