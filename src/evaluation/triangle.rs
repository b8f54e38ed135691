//! Triangle classification as a fitness oracle.
//!
//! The first three genes of a chromosome are read as side lengths. A
//! chromosome scores 1 when its classification matches the expected one and 0
//! otherwise.

use std::fmt;
use std::str::FromStr;

use super::Evaluation;
use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};

/// The five possible outcomes of [`classify_triangle`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriangleClass {
    Scalene,
    Equilateral,
    Isosceles,
    Invalid,
    OutOfRange,
}

impl TriangleClass {
    pub const ALL: [TriangleClass; 5] = [
        TriangleClass::Scalene,
        TriangleClass::Equilateral,
        TriangleClass::Isosceles,
        TriangleClass::Invalid,
        TriangleClass::OutOfRange,
    ];

    pub const LABELS: [&'static str; 5] = [
        "scalene",
        "equilateral",
        "isosceles",
        "invalid",
        "out of range",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleClass::Scalene => "scalene",
            TriangleClass::Equilateral => "equilateral",
            TriangleClass::Isosceles => "isosceles",
            TriangleClass::Invalid => "invalid",
            TriangleClass::OutOfRange => "out of range",
        }
    }
}

impl fmt::Display for TriangleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriangleClass {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        TriangleClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| {
                GeneticError::Configuration(format!(
                    "Triangle classification must be one of {:?}, got '{}'",
                    TriangleClass::LABELS,
                    s
                ))
            })
    }
}

/// Classifies three side lengths.
///
/// Rules are applied in order: any side `<= 0` (or NaN) is out of range, a
/// failed strict triangle inequality is invalid (so degenerate triangles are
/// invalid), then scalene, equilateral and isosceles.
///
/// # Examples
///
/// ```
/// use triga::evaluation::{classify_triangle, TriangleClass};
///
/// assert_eq!(classify_triangle(3.0, 4.0, 5.0), TriangleClass::Scalene);
/// assert_eq!(classify_triangle(1.0, 2.0, 3.0), TriangleClass::Invalid);
/// assert_eq!(classify_triangle(0.0, 1.0, 1.0), TriangleClass::OutOfRange);
/// ```
pub fn classify_triangle(a: f64, b: f64, c: f64) -> TriangleClass {
    if !(a > 0.0 && b > 0.0 && c > 0.0) {
        return TriangleClass::OutOfRange;
    }
    if !(a + b > c && b + c > a && c + a > b) {
        return TriangleClass::Invalid;
    }
    if a != b && b != c && c != a {
        TriangleClass::Scalene
    } else if a == b && b == c {
        TriangleClass::Equilateral
    } else {
        TriangleClass::Isosceles
    }
}

/// Scores chromosomes by whether their first three genes classify as the
/// expected triangle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleClassification;

impl Evaluation for TriangleClassification {
    fn name(&self) -> &'static str {
        "triangle-classification"
    }

    fn expected_solutions(&self) -> &'static [&'static str] {
        &TriangleClass::LABELS
    }

    fn min_chromosome_len(&self) -> usize {
        3
    }

    fn fitness(&self, chromosome: &Chromosome, expected_solution: &str) -> Result<f64> {
        let expected: TriangleClass = expected_solution.parse()?;
        chromosome.ensure_len(3)?;

        let genes = chromosome.genes();
        let class = classify_triangle(genes[0], genes[1], genes[2]);
        Ok(if class == expected { 1.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_classifications() {
        assert_eq!(classify_triangle(3.0, 4.0, 5.0), TriangleClass::Scalene);
        assert_eq!(classify_triangle(2.0, 2.0, 2.0), TriangleClass::Equilateral);
        assert_eq!(classify_triangle(2.0, 2.0, 3.0), TriangleClass::Isosceles);
        assert_eq!(classify_triangle(1.0, 2.0, 3.0), TriangleClass::Invalid);
        assert_eq!(classify_triangle(0.0, 1.0, 1.0), TriangleClass::OutOfRange);
        assert_eq!(classify_triangle(-1.0, 2.0, 2.0), TriangleClass::OutOfRange);
    }

    #[test]
    fn test_isosceles_in_every_position() {
        assert_eq!(classify_triangle(3.0, 2.0, 2.0), TriangleClass::Isosceles);
        assert_eq!(classify_triangle(2.0, 3.0, 2.0), TriangleClass::Isosceles);
    }

    #[test]
    fn test_degenerate_is_invalid_in_every_position() {
        assert_eq!(classify_triangle(3.0, 1.0, 2.0), TriangleClass::Invalid);
        assert_eq!(classify_triangle(2.0, 3.0, 1.0), TriangleClass::Invalid);
        assert_eq!(classify_triangle(1.0, 1.0, 2.0), TriangleClass::Invalid);
    }

    #[test]
    fn test_out_of_range_wins_over_equalities() {
        assert_eq!(classify_triangle(0.0, 0.0, 0.0), TriangleClass::OutOfRange);
        assert_eq!(classify_triangle(-2.0, -2.0, -2.0), TriangleClass::OutOfRange);
        assert_eq!(classify_triangle(f64::NAN, 1.0, 1.0), TriangleClass::OutOfRange);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let sides = [(3.0, 4.0, 5.0), (7.5, 7.5, 1.0), (10.0, 1.0, 1.0)];
        for (a, b, c) in sides {
            assert_eq!(classify_triangle(a, b, c), classify_triangle(a, b, c));
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for class in TriangleClass::ALL {
            assert_eq!(class.as_str().parse::<TriangleClass>(), Ok(class));
        }
        assert!("square".parse::<TriangleClass>().is_err());
    }

    #[test]
    fn test_score_is_binary() {
        let evaluation = TriangleClassification;
        let chromosome = Chromosome::from(vec![2.0, 2.0, 2.0]);

        let hit = evaluation.score(chromosome.clone(), "equilateral").unwrap();
        assert_eq!(hit.fitness, 1.0);
        assert_eq!(hit.chromosome, chromosome);

        let miss = evaluation.score(chromosome, "scalene").unwrap();
        assert_eq!(miss.fitness, 0.0);
    }

    #[test]
    fn test_score_ignores_extra_genes() {
        let evaluation = TriangleClassification;
        let chromosome = Chromosome::from(vec![3.0, 4.0, 5.0, -9.0]);
        assert_eq!(evaluation.fitness(&chromosome, "scalene").unwrap(), 1.0);
    }

    #[test]
    fn test_score_rejects_short_chromosome_and_unknown_label() {
        let evaluation = TriangleClassification;

        let short = Chromosome::from(vec![1.0, 1.0]);
        assert!(matches!(
            evaluation.fitness(&short, "isosceles"),
            Err(GeneticError::InvalidChromosome(_))
        ));

        let full = Chromosome::from(vec![1.0, 1.0, 1.0]);
        assert!(matches!(
            evaluation.fitness(&full, "circle"),
            Err(GeneticError::Configuration(_))
        ));
    }
}
