//! # Chromosomes and Populations
//!
//! A [`Chromosome`] is a fixed-length sequence of numeric genes. Operators
//! never edit a chromosome they were handed: crossover and mutation return new
//! values, so an old population can never alias a new one.
//!
//! ## Example
//!
//! ```rust
//! use triga::chromosome::{best_individual, Chromosome, ScoredIndividual};
//!
//! let population = vec![
//!     ScoredIndividual::new(Chromosome::from(vec![1.0, 2.0, 3.0]), 0.0),
//!     ScoredIndividual::new(Chromosome::from(vec![2.0, 2.0, 2.0]), 1.0),
//! ];
//!
//! let best = best_individual(&population).unwrap();
//! assert_eq!(best.chromosome.genes(), &[2.0, 2.0, 2.0]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::{GeneticError, Result};
use crate::gene::GeneFactory;
use crate::rng::RandomNumberGenerator;

/// A single encoded value within a chromosome.
pub type Gene = f64;

/// An ordered, fixed-length sequence of genes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Builds a chromosome of `len` fresh genes.
    pub fn random(len: usize, factory: &dyn GeneFactory, rng: &mut RandomNumberGenerator) -> Self {
        Self {
            genes: (0..len).map(|_| factory.create(rng)).collect(),
        }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn into_genes(self) -> Vec<Gene> {
        self.genes
    }

    /// Fails unless the chromosome holds at least `len` genes.
    pub fn ensure_len(&self, len: usize) -> Result<()> {
        if self.genes.len() < len {
            return Err(GeneticError::InvalidChromosome(format!(
                "expected at least {} genes, found {}",
                len,
                self.genes.len()
            )));
        }
        Ok(())
    }
}

impl From<Vec<Gene>> for Chromosome {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", gene)?;
        }
        write!(f, "]")
    }
}

/// A chromosome paired with its fitness. Higher fitness is better.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredIndividual {
    pub chromosome: Chromosome,
    pub fitness: f64,
}

impl ScoredIndividual {
    pub fn new(chromosome: Chromosome, fitness: f64) -> Self {
        Self {
            chromosome,
            fitness,
        }
    }
}

/// A scored population. Order carries no meaning beyond reproducibility.
pub type Population = Vec<ScoredIndividual>;

/// Orders fitness values best first, with NaN sorted after every number.
pub fn compare_fitness_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Returns the fittest individual; the earliest one wins a tie.
pub fn best_individual<'a, I>(population: I) -> Option<&'a ScoredIndividual>
where
    I: IntoIterator<Item = &'a ScoredIndividual>,
{
    population.into_iter().reduce(|best, candidate| {
        if compare_fitness_desc(candidate.fitness, best.fitness) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}
