use crate::chromosome::{Population, ScoredIndividual};
use crate::error::{ensure_rate, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{ensure_available, selection_count, SelectionStrategy};

/// Selects individuals uniformly at random, without replacement.
///
/// Fitness plays no part; selection pressure comes only from the rate.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RandomSelection {
    rate: f64,
}

impl RandomSelection {
    /// Creates a new RandomSelection strategy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `rate` is outside `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        ensure_rate("Selection rate", rate)?;
        Ok(Self { rate })
    }
}

impl SelectionStrategy for RandomSelection {
    fn name(&self) -> &'static str {
        "random"
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn select(
        &self,
        population: &[ScoredIndividual],
        pop_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let count = selection_count(self.rate, pop_size);
        ensure_available(count, population.len())?;

        Ok(rng
            .sample_indices(population.len(), count)
            .into_iter()
            .map(|idx| population[idx].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::error::GeneticError;

    fn population(size: usize) -> Population {
        (0..size)
            .map(|i| ScoredIndividual::new(Chromosome::from(vec![i as f64]), 0.0))
            .collect()
    }

    #[test]
    fn test_random_selection_size_and_membership() {
        let population = population(10);
        let mut rng = RandomNumberGenerator::from_seed(42);

        for rate in [0.0, 0.1, 0.35, 0.5, 0.99, 1.0] {
            let selection = RandomSelection::new(rate).unwrap();
            let selected = selection.select(&population, 10, &mut rng).unwrap();

            assert_eq!(selected.len(), selection_count(rate, 10));
            assert!(selected.iter().all(|s| population.contains(s)));
        }
    }

    #[test]
    fn test_random_selection_without_replacement() {
        let population = population(10);
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = RandomSelection::new(1.0).unwrap();
        let selected = selection.select(&population, 10, &mut rng).unwrap();

        let mut genes: Vec<f64> = selected.iter().map(|s| s.chromosome.genes()[0]).collect();
        genes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let expected: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(genes, expected);
    }

    #[test]
    fn test_random_selection_below_one_is_empty() {
        let population = population(3);
        let mut rng = RandomNumberGenerator::new();

        let selection = RandomSelection::new(0.3).unwrap();
        assert!(selection.select(&population, 3, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_random_selection_insufficient_population() {
        let population = population(2);
        let mut rng = RandomNumberGenerator::new();

        let selection = RandomSelection::new(0.5).unwrap();
        let result = selection.select(&population, 10, &mut rng);
        assert_eq!(
            result,
            Err(GeneticError::InsufficientPopulation {
                requested: 5,
                available: 2
            })
        );
    }

    #[test]
    fn test_random_selection_invalid_rate() {
        assert!(RandomSelection::new(-0.1).is_err());
        assert!(RandomSelection::new(1.1).is_err());
    }
}
