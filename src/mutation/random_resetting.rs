use super::MutationStrategy;
use crate::chromosome::Chromosome;
use crate::error::{ensure_rate, Result};
use crate::gene::GeneFactory;
use crate::rng::RandomNumberGenerator;

/// Replaces each gene with a fresh one with probability `rate`.
///
/// A gene is replaced iff `rate > draw`, with `draw` uniform in `[0, 1)`, so a
/// rate of 0 never mutates and a rate of 1 always does.
///
/// # Examples
///
/// ```
/// use triga::chromosome::Chromosome;
/// use triga::gene::RealNumberGene;
/// use triga::mutation::{MutationStrategy, RandomResetting};
/// use triga::rng::RandomNumberGenerator;
///
/// let offspring = vec![Chromosome::from(vec![1.0, 2.0, 3.0])];
/// let mut rng = RandomNumberGenerator::new();
///
/// let mutation = RandomResetting::new(0.0).unwrap();
/// let mutated = mutation
///     .mutate(offspring.clone(), 3, &RealNumberGene::default(), &mut rng)
///     .unwrap();
/// assert_eq!(mutated, offspring);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RandomResetting {
    rate: f64,
}

impl RandomResetting {
    /// Creates a new RandomResetting strategy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `rate` is outside `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        ensure_rate("Mutation rate", rate)?;
        Ok(Self { rate })
    }
}

impl MutationStrategy for RandomResetting {
    fn name(&self) -> &'static str {
        "random-resetting"
    }

    fn rate(&self) -> f64 {
        self.rate
    }

    fn mutate(
        &self,
        offspring: Vec<Chromosome>,
        chromo_len: usize,
        gene_factory: &dyn GeneFactory,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        offspring
            .into_iter()
            .map(|child| {
                child.ensure_len(chromo_len)?;
                let mut genes = child.into_genes();
                for gene in genes.iter_mut().take(chromo_len) {
                    if self.rate > rng.draw() {
                        *gene = gene_factory.create(rng);
                    }
                }
                Ok(Chromosome::from(genes))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use crate::gene::{IntegerGene, RealNumberGene};

    fn offspring() -> Vec<Chromosome> {
        (0..10)
            .map(|i| Chromosome::from(vec![i as f64 + 0.25, i as f64 + 0.5, i as f64 + 0.75]))
            .collect()
    }

    #[test]
    fn test_rate_zero_is_identity() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mutation = RandomResetting::new(0.0).unwrap();

        let mutated = mutation
            .mutate(offspring(), 3, &RealNumberGene::default(), &mut rng)
            .unwrap();
        assert_eq!(mutated, offspring());
    }

    #[test]
    fn test_rate_one_changes_every_gene() {
        let mut rng = RandomNumberGenerator::from_seed(2);
        let mutation = RandomResetting::new(1.0).unwrap();

        // Integer genes can never equal the fractional originals.
        let mutated = mutation
            .mutate(offspring(), 3, &IntegerGene::default(), &mut rng)
            .unwrap();

        assert_eq!(mutated.len(), 10);
        for (before, after) in offspring().iter().zip(&mutated) {
            for (old, new) in before.genes().iter().zip(after.genes()) {
                assert_ne!(old, new);
                assert_eq!(new.fract(), 0.0);
            }
        }
    }

    #[test]
    fn test_partial_rate_mutates_some_genes() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mutation = RandomResetting::new(0.5).unwrap();

        let mutated = mutation
            .mutate(offspring(), 3, &IntegerGene::default(), &mut rng)
            .unwrap();

        let changed = offspring()
            .iter()
            .zip(&mutated)
            .flat_map(|(b, a)| b.genes().iter().zip(a.genes()).filter(|(o, n)| o != n))
            .count();
        assert!(changed > 0 && changed < 30);
    }

    #[test]
    fn test_rejects_short_offspring() {
        let mut rng = RandomNumberGenerator::new();
        let mutation = RandomResetting::new(0.5).unwrap();

        let result = mutation.mutate(
            vec![Chromosome::from(vec![1.0])],
            3,
            &RealNumberGene::default(),
            &mut rng,
        );
        assert!(matches!(result, Err(GeneticError::InvalidChromosome(_))));
    }
}
