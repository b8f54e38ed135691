use super::{check_parents, swap_segment, CrossoverStrategy};
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Cuts both parents at two points and swaps the middle segment.
///
/// `point1` is drawn from `[1, chromo_len - 2]` and `point2` from
/// `[point1 + 1, chromo_len - 1]`, so both outer segments are never empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl CrossoverStrategy for TwoPointCrossover {
    fn name(&self) -> &'static str {
        "two-point"
    }

    fn min_chromosome_len(&self) -> usize {
        3
    }

    fn cross(
        &self,
        chromo_len: usize,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)> {
        check_parents(self, chromo_len, parent1, parent2)?;

        let point1 = rng.index_in(1, chromo_len - 1);
        let point2 = rng.index_in(point1 + 1, chromo_len);
        Ok(swap_segment(parent1, parent2, point1..point2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;

    #[test]
    fn test_children_swap_middle_segment() {
        let p1 = Chromosome::from(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let p2 = Chromosome::from(vec![-1.0, -2.0, -3.0, -4.0, -5.0, -6.0, -7.0]);
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..50 {
            let (c1, c2) = TwoPointCrossover.cross(7, &p1, &p2, &mut rng).unwrap();

            let from_p2: Vec<usize> = (0..7)
                .filter(|&i| c1.genes()[i] == p2.genes()[i])
                .collect();
            let point1 = from_p2[0];
            let point2 = from_p2[from_p2.len() - 1] + 1;

            // The swapped segment is contiguous and strictly inside the chromosome.
            assert_eq!(from_p2.len(), point2 - point1);
            assert!(point1 >= 1);
            assert!(point2 <= 6);

            for i in 0..7 {
                let swapped = (point1..point2).contains(&i);
                let (own, other) = if swapped { (&p2, &p1) } else { (&p1, &p2) };
                assert_eq!(c1.genes()[i], own.genes()[i]);
                assert_eq!(c2.genes()[i], other.genes()[i]);
            }
        }
    }

    #[test]
    fn test_three_genes_swaps_only_the_middle() {
        let p1 = Chromosome::from(vec![1.0, 2.0, 3.0]);
        let p2 = Chromosome::from(vec![4.0, 5.0, 6.0]);
        let mut rng = RandomNumberGenerator::new();

        let (c1, c2) = TwoPointCrossover.cross(3, &p1, &p2, &mut rng).unwrap();
        assert_eq!(c1.genes(), &[1.0, 5.0, 3.0]);
        assert_eq!(c2.genes(), &[4.0, 2.0, 6.0]);
    }

    #[test]
    fn test_rejects_short_chromosomes() {
        let p1 = Chromosome::from(vec![1.0, 2.0]);
        let p2 = Chromosome::from(vec![3.0, 4.0]);
        let mut rng = RandomNumberGenerator::new();

        assert!(matches!(
            TwoPointCrossover.cross(2, &p1, &p2, &mut rng),
            Err(GeneticError::InvalidChromosome(_))
        ));
    }
}
