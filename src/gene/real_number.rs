use super::GeneFactory;
use crate::chromosome::Gene;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

pub const DEFAULT_MIN: f64 = -100.0;
pub const DEFAULT_MAX: f64 = 100.0;

/// Real-valued genes drawn uniformly from `[min_value, max_value)`.
///
/// `min_value < max_value` holds at all times; both setters refuse a value
/// that would break it.
///
/// # Examples
///
/// ```
/// use triga::gene::{GeneFactory, RealNumberGene};
/// use triga::rng::RandomNumberGenerator;
///
/// let mut gene = RealNumberGene::default();
/// assert!(gene.set_min_value(200.0).is_err());
/// gene.set_min_value(0.0).unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(9);
/// let value = gene.create(&mut rng);
/// assert!((0.0..100.0).contains(&value));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RealNumberGene {
    min_value: f64,
    max_value: f64,
}

impl RealNumberGene {
    pub fn new(min_value: f64, max_value: f64) -> Result<Self> {
        check_bounds(min_value, max_value)?;
        Ok(Self {
            min_value,
            max_value,
        })
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn set_min_value(&mut self, value: f64) -> Result<()> {
        check_bounds(value, self.max_value)?;
        self.min_value = value;
        Ok(())
    }

    pub fn set_max_value(&mut self, value: f64) -> Result<()> {
        check_bounds(self.min_value, value)?;
        self.max_value = value;
        Ok(())
    }
}

fn check_bounds(min_value: f64, max_value: f64) -> Result<()> {
    if !min_value.is_finite() || !max_value.is_finite() {
        return Err(GeneticError::Configuration(format!(
            "Gene bounds must be finite, got [{}, {}]",
            min_value, max_value
        )));
    }
    if min_value >= max_value {
        return Err(GeneticError::Configuration(format!(
            "Min value must be less than max value, got [{}, {}]",
            min_value, max_value
        )));
    }
    if !(max_value - min_value).is_finite() {
        return Err(GeneticError::Configuration(format!(
            "Gene range is too wide to sample, got [{}, {}]",
            min_value, max_value
        )));
    }
    Ok(())
}

impl Default for RealNumberGene {
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN,
            max_value: DEFAULT_MAX,
        }
    }
}

impl GeneFactory for RealNumberGene {
    fn name(&self) -> &'static str {
        "real-number"
    }

    fn create(&self, rng: &mut RandomNumberGenerator) -> Gene {
        rng.uniform(self.min_value, self.max_value)
    }
}
