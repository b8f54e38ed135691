//! # Crossover Strategies
//!
//! A `CrossoverStrategy` combines two parents into two children. Parents are
//! borrowed and never modified; children are new chromosomes.
pub mod one_point;
pub mod two_point;
pub mod uniform;

use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use one_point::OnePointCrossover;
pub use two_point::TwoPointCrossover;
pub use uniform::UniformCrossover;

/// Combines two parent chromosomes into two children.
pub trait CrossoverStrategy: Debug + Send + Sync {
    /// The kebab-case name of the strategy.
    fn name(&self) -> &'static str;

    /// The shortest chromosome this strategy can cut.
    fn min_chromosome_len(&self) -> usize;

    /// Produces two children from two parents of length `chromo_len`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChromosome` if `chromo_len` is below
    /// [`CrossoverStrategy::min_chromosome_len`] or either parent's length
    /// differs from `chromo_len`.
    fn cross(
        &self,
        chromo_len: usize,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)>;
}

pub(crate) fn check_parents(
    strategy: &dyn CrossoverStrategy,
    chromo_len: usize,
    parent1: &Chromosome,
    parent2: &Chromosome,
) -> Result<()> {
    if chromo_len < strategy.min_chromosome_len() {
        return Err(GeneticError::InvalidChromosome(format!(
            "{} crossover needs chromosomes of at least {} genes, got {}",
            strategy.name(),
            strategy.min_chromosome_len(),
            chromo_len
        )));
    }
    for parent in [parent1, parent2] {
        if parent.len() != chromo_len {
            return Err(GeneticError::InvalidChromosome(format!(
                "parent has {} genes, expected {}",
                parent.len(),
                chromo_len
            )));
        }
    }
    Ok(())
}

/// Swaps the genes in `range` between copies of the two parents.
pub(crate) fn swap_segment(
    parent1: &Chromosome,
    parent2: &Chromosome,
    range: std::ops::Range<usize>,
) -> (Chromosome, Chromosome) {
    let mut child1 = parent1.genes().to_vec();
    let mut child2 = parent2.genes().to_vec();
    child1[range.clone()].swap_with_slice(&mut child2[range]);
    (Chromosome::from(child1), Chromosome::from(child2))
}

/// The crossover strategies a configuration can name.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverType {
    OnePoint,
    TwoPoint,
    #[default]
    Uniform,
}

impl CrossoverType {
    pub const ALL: [CrossoverType; 3] = [
        CrossoverType::OnePoint,
        CrossoverType::TwoPoint,
        CrossoverType::Uniform,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrossoverType::OnePoint => "one-point",
            CrossoverType::TwoPoint => "two-point",
            CrossoverType::Uniform => "uniform",
        }
    }

    pub fn build(&self) -> Box<dyn CrossoverStrategy> {
        match self {
            CrossoverType::OnePoint => Box::new(OnePointCrossover),
            CrossoverType::TwoPoint => Box::new(TwoPointCrossover),
            CrossoverType::Uniform => Box::new(UniformCrossover),
        }
    }
}

impl fmt::Display for CrossoverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrossoverType {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        CrossoverType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                GeneticError::Configuration(format!(
                    "Crossover type must be one of {:?}, got '{}'",
                    CrossoverType::ALL.map(|kind| kind.as_str()),
                    s
                ))
            })
    }
}
