//! # Gate Perceptron
//!
//! Single-layer perceptron trained with the online update rule on two-input
//! logic gate truth tables, with decision-surface plots and model
//! persistence.
//!
//! # Features
//!
//! - `std` (default): persistence, plotting, logging context and gate runner
//! - `serde`: Serialization support
//! - `parallel`: Parallel prediction and training via rayon
//!
//! # Examples
//!
//! ```
//! use gate_perceptron::{Config, Gate, Perceptron, adapter::split_default};
//!
//! let (x, y) = split_default(&Gate::And.truth_table()).unwrap();
//!
//! let mut model = Perceptron::new(Config::builder().eta(0.3).epochs(10).build().unwrap());
//! model.fit(&x, &y).unwrap();
//!
//! assert_eq!(model.predict_batch(&x), vec![0, 0, 0, 1]);
//! assert_eq!(model.total_loss().unwrap(), 11);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod adapter;
mod config;
mod dataset;
pub mod error;
mod gates;
pub mod model;
mod perceptron;
mod training;
pub mod utils;

#[cfg(feature = "std")]
pub mod context;
#[cfg(feature = "std")]
pub mod persist;
#[cfg(feature = "std")]
pub mod plot;
#[cfg(feature = "std")]
pub mod runner;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use config::{Config, ConfigBuilder, DEFAULT_EPOCHS, DEFAULT_ETA, WeightInit};
pub use dataset::{Column, Dataset};
pub use error::{Error, Result};
pub use gates::Gate;
pub use model::{Classifier, LinearModel};
pub use perceptron::Perceptron;
pub use training::ErrorHistory;
