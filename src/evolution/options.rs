//! # GaOptions
//!
//! The `GaOptions` struct holds the configuration of one run: sizes, the
//! strategy chosen for every family, their rates and the expected solution.
//!
//! ## Example
//!
//! ```rust
//! use triga::crossover::CrossoverType;
//! use triga::evolution::options::{GaOptions, LogLevel};
//! use triga::selection::SelectionType;
//!
//! let options = GaOptions::builder()
//!     .pop_size(10)
//!     .num_generations(5)
//!     .selection_type(SelectionType::SteadyState)
//!     .crossover_type(CrossoverType::TwoPoint)
//!     .expected_solution("equilateral")
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_pop_size(), 10);
//!
//! // Default options are a valid run configuration as well.
//! let default_options = GaOptions::default();
//! assert!(default_options.validate().is_ok());
//! ```
//!
//! ## Validation
//!
//! [`GaOptions::validate_fields`] checks every value on its own: ranges,
//! rates, gene bounds and the expected solution. [`GaOptions::validate`] adds
//! the checks that span several fields: the chromosome must be long enough for
//! the crossover and the evaluation, and the selection rate must keep at least
//! one parent.

use crate::crossover::CrossoverType;
use crate::error::{ensure_rate, GeneticError, Result};
use crate::evaluation::EvaluationType;
use crate::gene::GeneType;
use crate::mutation::MutationType;
use crate::selection::{selection_count, SelectionType};

pub const MIN_CHROMO_LEN: usize = 1;
pub const MAX_CHROMO_LEN: usize = 9999;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

/// Upper bounds for population size and generation count.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeProfile {
    /// Populations and runs of at most 10.
    Compact,
    /// Populations and runs of at most 9999.
    #[default]
    Extended,
}

impl SizeProfile {
    pub fn max_pop_size(&self) -> usize {
        match self {
            SizeProfile::Compact => 10,
            SizeProfile::Extended => 9999,
        }
    }

    pub fn max_generations(&self) -> usize {
        self.max_pop_size()
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaOptions {
    chromo_len: usize,
    pop_size: usize,
    num_generations: usize,
    gene_type: GeneType,
    /// `None` uses the gene type's own default range.
    gene_bounds: Option<(f64, f64)>,
    selection_type: SelectionType,
    selection_rate: f64,
    crossover_type: CrossoverType,
    mutation_type: MutationType,
    mutation_rate: f64,
    evaluation_type: EvaluationType,
    expected_solution: String,
    log_level: LogLevel,
    /// Populations at least this large are scored in parallel.
    parallel_threshold: usize,
    size_profile: SizeProfile,
    seed: Option<u64>,
}

impl GaOptions {
    pub fn get_chromo_len(&self) -> usize {
        self.chromo_len
    }

    pub fn get_pop_size(&self) -> usize {
        self.pop_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_gene_type(&self) -> GeneType {
        self.gene_type
    }

    pub fn get_gene_bounds(&self) -> (f64, f64) {
        self.gene_bounds
            .unwrap_or_else(|| self.gene_type.default_bounds())
    }

    pub fn get_selection_type(&self) -> SelectionType {
        self.selection_type
    }

    pub fn get_selection_rate(&self) -> f64 {
        self.selection_rate
    }

    pub fn get_crossover_type(&self) -> CrossoverType {
        self.crossover_type
    }

    pub fn get_mutation_type(&self) -> MutationType {
        self.mutation_type
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_evaluation_type(&self) -> EvaluationType {
        self.evaluation_type
    }

    pub fn get_expected_solution(&self) -> &str {
        &self.expected_solution
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_size_profile(&self) -> SizeProfile {
        self.size_profile
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub(crate) fn set_chromo_len(&mut self, chromo_len: usize) {
        self.chromo_len = chromo_len;
    }

    pub(crate) fn set_pop_size(&mut self, pop_size: usize) {
        self.pop_size = pop_size;
    }

    pub(crate) fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub(crate) fn set_gene_type(&mut self, gene_type: GeneType) {
        if gene_type != self.gene_type {
            self.gene_bounds = None;
        }
        self.gene_type = gene_type;
    }

    pub(crate) fn set_gene_bounds(&mut self, min_value: f64, max_value: f64) {
        self.gene_bounds = Some((min_value, max_value));
    }

    pub(crate) fn set_selection_type(&mut self, selection_type: SelectionType) {
        self.selection_type = selection_type;
    }

    pub(crate) fn set_selection_rate(&mut self, selection_rate: f64) {
        self.selection_rate = selection_rate;
    }

    pub(crate) fn set_crossover_type(&mut self, crossover_type: CrossoverType) {
        self.crossover_type = crossover_type;
    }

    pub(crate) fn set_mutation_type(&mut self, mutation_type: MutationType) {
        self.mutation_type = mutation_type;
    }

    pub(crate) fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub(crate) fn set_evaluation_type(&mut self, evaluation_type: EvaluationType) {
        self.evaluation_type = evaluation_type;
    }

    pub(crate) fn set_expected_solution(&mut self, expected_solution: &str) {
        self.expected_solution = expected_solution.to_string();
    }

    /// Sets the log level. Logging never affects a run, so this needs no validation.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub(crate) fn set_size_profile(&mut self, size_profile: SizeProfile) {
        self.size_profile = size_profile;
    }

    pub(crate) fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Checks every field on its own.
    pub fn validate_fields(&self) -> Result<()> {
        check_range(
            "Chromosome length",
            self.chromo_len,
            MIN_CHROMO_LEN,
            MAX_CHROMO_LEN,
        )?;
        check_range(
            "Population size",
            self.pop_size,
            1,
            self.size_profile.max_pop_size(),
        )?;
        check_range(
            "Number of generations",
            self.num_generations,
            1,
            self.size_profile.max_generations(),
        )?;
        ensure_rate("Selection rate", self.selection_rate)?;
        ensure_rate("Mutation rate", self.mutation_rate)?;
        self.gene_type.build(self.gene_bounds)?;
        self.evaluation_type
            .build()
            .validate_expected(&self.expected_solution)
    }

    /// Checks every field and the constraints between them.
    pub fn validate(&self) -> Result<()> {
        self.validate_fields()?;

        let crossover = self.crossover_type.build();
        if self.chromo_len < crossover.min_chromosome_len() {
            return Err(GeneticError::Configuration(format!(
                "{} crossover needs a chromosome length of at least {}, got {}",
                crossover.name(),
                crossover.min_chromosome_len(),
                self.chromo_len
            )));
        }

        let evaluation = self.evaluation_type.build();
        if self.chromo_len < evaluation.min_chromosome_len() {
            return Err(GeneticError::Configuration(format!(
                "{} needs a chromosome length of at least {}, got {}",
                evaluation.name(),
                evaluation.min_chromosome_len(),
                self.chromo_len
            )));
        }

        if selection_count(self.selection_rate, self.pop_size) == 0 {
            return Err(GeneticError::Configuration(format!(
                "Selection rate {} keeps no parents out of a population of {}",
                self.selection_rate, self.pop_size
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating a `GaOptions` instance.
    pub fn builder() -> GaOptionsBuilder {
        GaOptionsBuilder::default()
    }
}

fn check_range(name: &str, value: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GeneticError::Configuration(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )))
    }
}

impl Default for GaOptions {
    fn default() -> Self {
        Self {
            chromo_len: 3,
            pop_size: 10,
            num_generations: 50,
            gene_type: GeneType::RealNumber,
            gene_bounds: None,
            selection_type: SelectionType::Random,
            selection_rate: 0.5,
            crossover_type: CrossoverType::Uniform,
            mutation_type: MutationType::RandomResetting,
            mutation_rate: 0.3,
            evaluation_type: EvaluationType::TriangleClassification,
            expected_solution: "scalene".to_string(),
            log_level: LogLevel::None,
            parallel_threshold: 1000,
            size_profile: SizeProfile::Extended,
            seed: None,
        }
    }
}

/// Builder for `GaOptions`.
///
/// Unset fields take their `GaOptions::default()` value.
#[derive(Debug, Clone, Default)]
pub struct GaOptionsBuilder {
    options: GaOptions,
}

impl GaOptionsBuilder {
    pub fn chromo_len(mut self, value: usize) -> Self {
        self.options.set_chromo_len(value);
        self
    }

    pub fn pop_size(mut self, value: usize) -> Self {
        self.options.set_pop_size(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.options.set_num_generations(value);
        self
    }

    pub fn gene_type(mut self, value: GeneType) -> Self {
        self.options.set_gene_type(value);
        self
    }

    pub fn gene_bounds(mut self, min_value: f64, max_value: f64) -> Self {
        self.options.set_gene_bounds(min_value, max_value);
        self
    }

    pub fn selection_type(mut self, value: SelectionType) -> Self {
        self.options.set_selection_type(value);
        self
    }

    pub fn selection_rate(mut self, value: f64) -> Self {
        self.options.set_selection_rate(value);
        self
    }

    pub fn crossover_type(mut self, value: CrossoverType) -> Self {
        self.options.set_crossover_type(value);
        self
    }

    pub fn mutation_type(mut self, value: MutationType) -> Self {
        self.options.set_mutation_type(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.options.set_mutation_rate(value);
        self
    }

    pub fn evaluation_type(mut self, value: EvaluationType) -> Self {
        self.options.set_evaluation_type(value);
        self
    }

    pub fn expected_solution(mut self, value: &str) -> Self {
        self.options.set_expected_solution(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.options.set_log_level(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.options.set_parallel_threshold(value);
        self
    }

    pub fn size_profile(mut self, value: SizeProfile) -> Self {
        self.options.set_size_profile(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.options.set_seed(Some(value));
        self
    }

    /// Builds the `GaOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if [`GaOptions::validate`] fails.
    pub fn build(self) -> Result<GaOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
