//! # Gene Factories
//!
//! A `GeneFactory` produces one gene under a given encoding. Chromosome
//! creation and mutation only ever call [`GeneFactory::create`], so adding an
//! encoding never touches the callers.
pub mod integer;
pub mod real_number;

use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::chromosome::Gene;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub use integer::IntegerGene;
pub use real_number::RealNumberGene;

/// Produces single gene values.
pub trait GeneFactory: Debug + Send + Sync {
    /// The kebab-case name of the encoding.
    fn name(&self) -> &'static str;

    /// Creates one fresh gene.
    fn create(&self, rng: &mut RandomNumberGenerator) -> Gene;
}

/// The gene encodings a configuration can name.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeneType {
    #[default]
    RealNumber,
    Integer,
}

impl GeneType {
    pub const ALL: [GeneType; 2] = [GeneType::RealNumber, GeneType::Integer];

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneType::RealNumber => "real-number",
            GeneType::Integer => "integer",
        }
    }

    /// The range used when a configuration gives no explicit bounds.
    pub fn default_bounds(&self) -> (f64, f64) {
        match self {
            GeneType::RealNumber => (real_number::DEFAULT_MIN, real_number::DEFAULT_MAX),
            GeneType::Integer => (integer::DEFAULT_MIN as f64, integer::DEFAULT_MAX as f64),
        }
    }

    /// Builds the factory, validating `bounds` (or the defaults) for this encoding.
    pub fn build(&self, bounds: Option<(f64, f64)>) -> Result<Box<dyn GeneFactory>> {
        let (min, max) = bounds.unwrap_or_else(|| self.default_bounds());
        Ok(match self {
            GeneType::RealNumber => Box::new(RealNumberGene::new(min, max)?),
            GeneType::Integer => Box::new(IntegerGene::from_float_bounds(min, max)?),
        })
    }
}

impl fmt::Display for GeneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneType {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        GeneType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                GeneticError::Configuration(format!(
                    "Gene type must be one of {:?}, got '{}'",
                    GeneType::ALL.map(|kind| kind.as_str()),
                    s
                ))
            })
    }
}
