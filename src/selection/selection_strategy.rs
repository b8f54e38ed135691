use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::chromosome::{Population, ScoredIndividual};
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

use super::{RandomSelection, SteadyStateSelection};

/// Trait for selection strategies.
///
/// A selection strategy reduces a scored population to the breeding subset.
/// The subset size is [`selection_count`]`(rate, pop_size)`, so every
/// strategy agrees on how many individuals a given rate keeps.
///
/// # Examples
///
/// ```
/// use triga::chromosome::{Chromosome, ScoredIndividual};
/// use triga::rng::RandomNumberGenerator;
/// use triga::selection::{SelectionStrategy, SteadyStateSelection};
///
/// let population: Vec<ScoredIndividual> = [0.5, 0.8, 0.3, 0.9]
///     .iter()
///     .map(|&fitness| ScoredIndividual::new(Chromosome::from(vec![fitness]), fitness))
///     .collect();
///
/// let selection = SteadyStateSelection::new(0.5).unwrap();
/// let mut rng = RandomNumberGenerator::new();
/// let selected = selection.select(&population, 4, &mut rng).unwrap();
///
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[0].fitness, 0.9);
/// assert_eq!(selected[1].fitness, 0.8);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// The kebab-case name of the strategy.
    fn name(&self) -> &'static str;

    /// The fraction of `pop_size` this strategy keeps.
    fn rate(&self) -> f64;

    /// Selects `selection_count(self.rate(), pop_size)` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientPopulation` if the population holds fewer
    /// individuals than the rate asks for.
    fn select(
        &self,
        population: &[ScoredIndividual],
        pop_size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population>;
}

/// The number of individuals a selection rate keeps out of `pop_size`.
///
/// The product is truncated toward zero, so any rate with
/// `rate * pop_size < 1` keeps nobody.
///
/// ```
/// use triga::selection::selection_count;
///
/// assert_eq!(selection_count(0.5, 10), 5);
/// assert_eq!(selection_count(0.55, 10), 5);
/// assert_eq!(selection_count(0.09, 10), 0);
/// assert_eq!(selection_count(1.0, 7), 7);
/// ```
pub fn selection_count(rate: f64, pop_size: usize) -> usize {
    (rate * pop_size as f64) as usize
}

pub(crate) fn ensure_available(requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(GeneticError::InsufficientPopulation {
            requested,
            available,
        });
    }
    Ok(())
}

/// The selection strategies a configuration can name.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionType {
    #[default]
    Random,
    SteadyState,
}

impl SelectionType {
    pub const ALL: [SelectionType; 2] = [SelectionType::Random, SelectionType::SteadyState];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionType::Random => "random",
            SelectionType::SteadyState => "steady-state",
        }
    }

    pub fn build(&self, rate: f64) -> Result<Box<dyn SelectionStrategy>> {
        Ok(match self {
            SelectionType::Random => Box::new(RandomSelection::new(rate)?),
            SelectionType::SteadyState => Box::new(SteadyStateSelection::new(rate)?),
        })
    }
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionType {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        SelectionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                GeneticError::Configuration(format!(
                    "Selection type must be one of {:?}, got '{}'",
                    SelectionType::ALL.map(|kind| kind.as_str()),
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_count_truncates() {
        assert_eq!(selection_count(0.0, 10), 0);
        assert_eq!(selection_count(0.3, 10), 3);
        assert_eq!(selection_count(0.7, 10), 7);
        assert_eq!(selection_count(0.99, 10), 9);
        assert_eq!(selection_count(0.5, 3), 1);
        assert_eq!(selection_count(0.3, 3), 0);
    }

    #[test]
    fn test_parse_selection_type() {
        assert_eq!("random".parse::<SelectionType>(), Ok(SelectionType::Random));
        assert_eq!(
            "steady-state".parse::<SelectionType>(),
            Ok(SelectionType::SteadyState)
        );
        assert!(matches!(
            "tournament".parse::<SelectionType>(),
            Err(GeneticError::Configuration(_))
        ));
    }

    #[test]
    fn test_build_validates_rate() {
        assert!(SelectionType::Random.build(1.5).is_err());
        let strategy = SelectionType::SteadyState.build(0.25).unwrap();
        assert_eq!(strategy.name(), "steady-state");
        assert_eq!(strategy.rate(), 0.25);
    }
}
