//! # Error Types
//!
//! This module defines the error type shared by every part of the engine.
//! Configuration problems are reported eagerly, at construction or setter
//! time, so a run that has started only fails on programmer error.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use triga::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<f64> {
//!     if (0.0..=1.0).contains(&rate) {
//!         Ok(rate)
//!     } else {
//!         Err(GeneticError::Configuration(format!("rate {} is not in [0, 1]", rate)))
//!     }
//! }
//!
//! assert!(check_rate(0.5).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use triga::error::{GeneticError, OptionExt};
//!
//! fn first_gene(genes: &[f64]) -> triga::error::Result<f64> {
//!     genes.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(first_gene(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// An invalid configuration value: unknown strategy name, out-of-range
    /// number, empty current population or inconsistent settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An operation received an empty population or breeding subset.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A chromosome does not have the length an operator needs.
    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// Selection was asked for more individuals than the population holds.
    #[error("Insufficient population: requested {requested} individuals but only {available} are available")]
    InsufficientPopulation { requested: usize, available: usize },

    /// An evaluation produced a NaN or infinite fitness.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for engine operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Fails unless `value` lies in `[0, 1]`. `name` labels the error message.
pub fn ensure_rate(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeneticError::Configuration(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )))
    }
}
