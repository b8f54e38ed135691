use super::{check_parents, swap_segment, CrossoverStrategy};
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Cuts both parents at one point drawn from `[1, chromo_len - 1]` and swaps
/// the tails.
///
/// # Examples
///
/// ```
/// use triga::chromosome::Chromosome;
/// use triga::crossover::{CrossoverStrategy, OnePointCrossover};
/// use triga::rng::RandomNumberGenerator;
///
/// let p1 = Chromosome::from(vec![1.0, 1.0]);
/// let p2 = Chromosome::from(vec![2.0, 2.0]);
/// let mut rng = RandomNumberGenerator::new();
///
/// // With two genes the only cut is after the first one.
/// let (c1, c2) = OnePointCrossover.cross(2, &p1, &p2, &mut rng).unwrap();
/// assert_eq!(c1.genes(), &[1.0, 2.0]);
/// assert_eq!(c2.genes(), &[2.0, 1.0]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePointCrossover;

impl CrossoverStrategy for OnePointCrossover {
    fn name(&self) -> &'static str {
        "one-point"
    }

    fn min_chromosome_len(&self) -> usize {
        2
    }

    fn cross(
        &self,
        chromo_len: usize,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)> {
        check_parents(self, chromo_len, parent1, parent2)?;

        let point = rng.index_in(1, chromo_len);
        Ok(swap_segment(parent1, parent2, point..chromo_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    #[test]
    fn test_children_are_complementary_slices() {
        let p1 = Chromosome::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let p2 = Chromosome::from(vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..50 {
            let (c1, c2) = OnePointCrossover.cross(6, &p1, &p2, &mut rng).unwrap();

            // The cut is where child1 stops matching parent1.
            let point = (0..6)
                .find(|&i| c1.genes()[i] != p1.genes()[i])
                .expect("a cut in [1, 5] always swaps a tail");
            assert!((1..6).contains(&point));

            assert_eq!(&c1.genes()[..point], &p1.genes()[..point]);
            assert_eq!(&c1.genes()[point..], &p2.genes()[point..]);
            assert_eq!(&c2.genes()[..point], &p2.genes()[..point]);
            assert_eq!(&c2.genes()[point..], &p1.genes()[point..]);

            let rebuilt_p1: Vec<f64> = c1.genes()[..point]
                .iter()
                .chain(&c2.genes()[point..])
                .copied()
                .collect();
            assert_eq!(rebuilt_p1, p1.genes());
        }
    }

    #[test]
    fn test_parents_untouched() {
        let p1 = Chromosome::from(vec![1.0, 2.0, 3.0]);
        let p2 = Chromosome::from(vec![4.0, 5.0, 6.0]);
        let mut rng = RandomNumberGenerator::new();

        OnePointCrossover.cross(3, &p1, &p2, &mut rng).unwrap();
        assert_eq!(p1.genes(), &[1.0, 2.0, 3.0]);
        assert_eq!(p2.genes(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_rejects_short_chromosomes() {
        let p1 = Chromosome::from(vec![1.0]);
        let p2 = Chromosome::from(vec![2.0]);
        let mut rng = RandomNumberGenerator::new();

        assert!(matches!(
            OnePointCrossover.cross(1, &p1, &p2, &mut rng),
            Err(GeneticError::InvalidChromosome(_))
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let p1 = Chromosome::from(vec![1.0, 2.0, 3.0]);
        let p2 = Chromosome::from(vec![2.0, 3.0]);
        let mut rng = RandomNumberGenerator::new();

        assert!(OnePointCrossover.cross(3, &p1, &p2, &mut rng).is_err());
    }
}
