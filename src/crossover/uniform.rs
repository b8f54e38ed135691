use super::{check_parents, CrossoverStrategy};
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// For every gene position, a fair coin decides which parent feeds which child.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl CrossoverStrategy for UniformCrossover {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn min_chromosome_len(&self) -> usize {
        1
    }

    fn cross(
        &self,
        chromo_len: usize,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)> {
        check_parents(self, chromo_len, parent1, parent2)?;

        let (child1, child2): (Vec<f64>, Vec<f64>) = parent1
            .genes()
            .iter()
            .zip(parent2.genes())
            .map(|(&g1, &g2)| if rng.coin() { (g2, g1) } else { (g1, g2) })
            .unzip();

        Ok((Chromosome::from(child1), Chromosome::from(child2)))
    }
}
