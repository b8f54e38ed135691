//! # Evaluation Strategies
//!
//! An `Evaluation` scores a chromosome against an expected outcome using a
//! problem-specific oracle. Every evaluation in this crate follows the same
//! fitness convention: **higher is better**.
pub mod triangle;

use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::chromosome::{Chromosome, ScoredIndividual};
use crate::error::{GeneticError, Result};

pub use triangle::{classify_triangle, TriangleClass, TriangleClassification};

/// Scores chromosomes against an expected solution.
///
/// Implementations must be pure: the same chromosome and expected solution
/// always produce the same fitness. The orchestrator relies on this to score
/// large populations in parallel.
pub trait Evaluation: Debug + Send + Sync {
    /// The kebab-case name of the evaluation.
    fn name(&self) -> &'static str;

    /// Every expected solution this evaluation understands.
    fn expected_solutions(&self) -> &'static [&'static str];

    /// The fewest genes a chromosome needs to be scored.
    fn min_chromosome_len(&self) -> usize {
        1
    }

    /// Rejects an expected solution outside [`Evaluation::expected_solutions`].
    fn validate_expected(&self, expected_solution: &str) -> Result<()> {
        if self.expected_solutions().contains(&expected_solution) {
            Ok(())
        } else {
            Err(GeneticError::Configuration(format!(
                "Expected solution for {} must be one of {:?}, got '{}'",
                self.name(),
                self.expected_solutions(),
                expected_solution
            )))
        }
    }

    /// Computes the fitness of `chromosome`.
    fn fitness(&self, chromosome: &Chromosome, expected_solution: &str) -> Result<f64>;

    /// Pairs `chromosome` with its fitness.
    fn score(&self, chromosome: Chromosome, expected_solution: &str) -> Result<ScoredIndividual> {
        let fitness = self.fitness(&chromosome, expected_solution)?;
        Ok(ScoredIndividual::new(chromosome, fitness))
    }
}

/// The evaluations a configuration can name.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationType {
    #[default]
    TriangleClassification,
}

impl EvaluationType {
    pub const ALL: [EvaluationType; 1] = [EvaluationType::TriangleClassification];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationType::TriangleClassification => "triangle-classification",
        }
    }

    pub fn build(&self) -> Box<dyn Evaluation> {
        match self {
            EvaluationType::TriangleClassification => Box::new(TriangleClassification),
        }
    }
}

impl fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationType {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        EvaluationType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                GeneticError::Configuration(format!(
                    "Evaluation must be one of {:?}, got '{}'",
                    EvaluationType::ALL.map(|kind| kind.as_str()),
                    s
                ))
            })
    }
}
