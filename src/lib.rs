//! A configurable genetic algorithm engine.
//!
//! Populations of real-valued chromosomes evolve under pluggable gene,
//! selection, crossover, mutation and evaluation strategies. The bundled
//! evaluation classifies each chromosome's first three genes as triangle
//! sides and rewards individuals whose class matches the expected one.
pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod evaluation;
pub mod evolution;
pub mod gene;
pub mod mutation;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use chromosome::{Chromosome, Gene, Population, ScoredIndividual};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{ExecutionTrace, GaOptions, GeneticAlgorithm, RunState};
