//! # Mutation Strategies
//!
//! A `MutationStrategy` takes ownership of the offspring and hands back the
//! mutated generation. The crossover output recorded in a run trace is a
//! separate value and stays untouched.
pub mod random_resetting;

use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::gene::GeneFactory;
use crate::rng::RandomNumberGenerator;

pub use random_resetting::RandomResetting;

/// Perturbs offspring genes stochastically.
pub trait MutationStrategy: Debug + Send + Sync {
    /// The kebab-case name of the strategy.
    fn name(&self) -> &'static str;

    /// Per-gene mutation probability.
    fn rate(&self) -> f64;

    /// Mutates every chromosome of `offspring`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidChromosome` if a chromosome is shorter than `chromo_len`.
    fn mutate(
        &self,
        offspring: Vec<Chromosome>,
        chromo_len: usize,
        gene_factory: &dyn GeneFactory,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>>;
}

/// The mutation strategies a configuration can name.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationType {
    #[default]
    RandomResetting,
}

impl MutationType {
    pub const ALL: [MutationType; 1] = [MutationType::RandomResetting];

    pub fn as_str(&self) -> &'static str {
        match self {
            MutationType::RandomResetting => "random-resetting",
        }
    }

    pub fn build(&self, rate: f64) -> Result<Box<dyn MutationStrategy>> {
        Ok(match self {
            MutationType::RandomResetting => Box::new(RandomResetting::new(rate)?),
        })
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MutationType {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        MutationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                GeneticError::Configuration(format!(
                    "Mutation type must be one of {:?}, got '{}'",
                    MutationType::ALL.map(|kind| kind.as_str()),
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mutation_type() {
        assert_eq!(
            "random-resetting".parse::<MutationType>(),
            Ok(MutationType::RandomResetting)
        );
        assert!("swap".parse::<MutationType>().is_err());
    }

    #[test]
    fn test_build_validates_rate() {
        assert!(MutationType::RandomResetting.build(2.0).is_err());
        assert_eq!(MutationType::RandomResetting.build(0.3).unwrap().rate(), 0.3);
    }
}
