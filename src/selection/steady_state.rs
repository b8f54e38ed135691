use crate::chromosome::{compare_fitness_desc, Population, ScoredIndividual};
use crate::error::{ensure_rate, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_available, selection_count, SelectionStrategy};

/// Keeps the fittest individuals.
///
/// The population is sorted by fitness, highest first, and the top
/// `selection_count(rate, pop_size)` are kept. The sort is stable, so equal
/// fitness keeps input order. NaN fitness sorts last.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyStateSelection {
    rate: f64,
}

impl SteadyStateSelection {
    /// Creates a new SteadyStateSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `rate` is outside `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        ensure_rate("Selection rate", rate)?;
        Ok(Self { rate })
    }
}

impl SelectionStrategy for SteadyStateSelection {
    fn name(&self) -> &'static str {
        "steady-state"
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn select(
        &self,
        population: &[ScoredIndividual],
        pop_size: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let count = selection_count(self.rate, pop_size);
        ensure_available(count, population.len())?;

        let mut ranked: Vec<&ScoredIndividual> = population.iter().collect();
        ranked.sort_by(|a, b| compare_fitness_desc(a.fitness, b.fitness));

        Ok(ranked.into_iter().take(count).cloned().collect())
    }
}
