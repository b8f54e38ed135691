use super::GeneFactory;
use crate::chromosome::Gene;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 100;

/// Integral genes drawn uniformly from the inclusive range `[min_value, max_value]`.
///
/// Genes are still stored as `f64`; every value this factory creates has no
/// fractional part, which makes exact gene equalities reachable.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerGene {
    min_value: i64,
    max_value: i64,
}

impl IntegerGene {
    pub fn new(min_value: i64, max_value: i64) -> Result<Self> {
        check_bounds(min_value, max_value)?;
        Ok(Self {
            min_value,
            max_value,
        })
    }

    /// Builds the factory from configuration bounds, which must be whole numbers.
    pub fn from_float_bounds(min_value: f64, max_value: f64) -> Result<Self> {
        let to_int = |value: f64| -> Result<i64> {
            if !value.is_finite() || value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
                return Err(GeneticError::Configuration(format!(
                    "Integer gene bounds must be whole numbers, got {}",
                    value
                )));
            }
            Ok(value as i64)
        };
        Self::new(to_int(min_value)?, to_int(max_value)?)
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn set_min_value(&mut self, value: i64) -> Result<()> {
        check_bounds(value, self.max_value)?;
        self.min_value = value;
        Ok(())
    }

    pub fn set_max_value(&mut self, value: i64) -> Result<()> {
        check_bounds(self.min_value, value)?;
        self.max_value = value;
        Ok(())
    }
}

fn check_bounds(min_value: i64, max_value: i64) -> Result<()> {
    if min_value >= max_value {
        return Err(GeneticError::Configuration(format!(
            "Min value must be less than max value, got [{}, {}]",
            min_value, max_value
        )));
    }
    Ok(())
}

impl Default for IntegerGene {
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN,
            max_value: DEFAULT_MAX,
        }
    }
}

impl GeneFactory for IntegerGene {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn create(&self, rng: &mut RandomNumberGenerator) -> Gene {
        rng.uniform_inclusive(self.min_value, self.max_value) as Gene
    }
}
