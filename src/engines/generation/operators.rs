use crate::engines::generation::genome::Dna;
use crate::error::{ExprEvolveError, Result};
use crate::types::{Gene, GENE_MAX};
use rand::Rng;

/// Fixed-point scale for the roulette draw, so it only needs an integer RNG
pub const SELECTION_SCALE: f64 = 1_000_000.0;

/// An individual paired with its selection weight for one generation
#[derive(Debug, Clone, Copy)]
pub struct WeightedIndividual<'a> {
    pub dna: &'a [Gene],
    pub weight: f64,
}

/// Roulette wheel selection: probability proportional to weight, with replacement
pub fn roulette_selection<'a, R: Rng>(
    population: &[WeightedIndividual<'a>],
    rng: &mut R,
) -> Result<&'a [Gene]> {
    if population.is_empty() {
        return Err(ExprEvolveError::EmptyPopulation);
    }

    let total_weight: f64 = population.iter().map(|ind| ind.weight).sum();
    let bound = ((total_weight * SELECTION_SCALE) as u64).max(1);
    let spin = rng.gen_range(0..bound) as f64 / SELECTION_SCALE;

    Ok(land_spin(population, spin))
}

/// Walks the wheel by subtracting each weight from `spin`. `population` must be non-empty.
fn land_spin<'a>(population: &[WeightedIndividual<'a>], mut spin: f64) -> &'a [Gene] {
    for individual in population {
        if spin < individual.weight {
            return individual.dna;
        }
        spin -= individual.weight;
    }

    // Rounding can leave the spin past the last slot
    population[0].dna
}

/// Single-point crossover: swap tails at a uniform cut in `[0, len)`
pub fn crossover<R: Rng>(
    parent1: &[Gene],
    parent2: &[Gene],
    rng: &mut R,
) -> Result<(Dna, Dna)> {
    if parent1.len() != parent2.len() {
        return Err(ExprEvolveError::LengthMismatch {
            left: parent1.len(),
            right: parent2.len(),
        });
    }
    if parent1.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let point = rng.gen_range(0..parent1.len());

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    child1[point..].copy_from_slice(&parent2[point..]);
    child2[point..].copy_from_slice(&parent1[point..]);

    Ok((child1, child2))
}

/// Mutation: each gene is redrawn when a draw in `[0, mutation_chance)` hits 1.
/// `mutation_chance` must be non-zero.
///
/// Returns how many genes were redrawn.
pub fn mutate<R: Rng>(genome: &mut [Gene], mutation_chance: u32, rng: &mut R) -> usize {
    let mut redrawn = 0;
    for gene in genome.iter_mut() {
        if rng.gen_range(0..mutation_chance) == 1 {
            *gene = random_gene(rng);
            redrawn += 1;
        }
    }
    redrawn
}

/// Uniform gene in `[0, GENE_MAX]`; includes the inert code 10
pub fn random_gene<R: Rng>(rng: &mut R) -> Gene {
    rng.gen_range(0..=GENE_MAX)
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Dna {
    (0..length).map(|_| random_gene(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_selection_empty_population() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = roulette_selection(&[], &mut rng);
        assert!(matches!(result, Err(ExprEvolveError::EmptyPopulation)));
    }

    #[test]
    fn test_selection_frequencies_follow_weights() {
        let genomes: Vec<Dna> = vec![vec![1], vec![2], vec![3]];
        let weights = [1.0, 2.0, 7.0];
        let population: Vec<WeightedIndividual> = genomes
            .iter()
            .zip(weights.iter())
            .map(|(dna, w)| WeightedIndividual { dna, weight: *w })
            .collect();

        let mut rng = StdRng::seed_from_u64(42);
        let draws = 100_000;
        let mut counts = [0usize; 3];
        for _ in 0..draws {
            let picked = roulette_selection(&population, &mut rng).unwrap();
            let idx = genomes
                .iter()
                .position(|g| g.as_slice() == picked)
                .expect("selected individual must come from the input");
            counts[idx] += 1;
        }

        for (count, w) in counts.iter().zip(weights.iter()) {
            let observed = *count as f64 / draws as f64;
            let expected = w / 10.0;
            assert!(
                (observed - expected).abs() < 0.01,
                "observed {} expected {}",
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_selection_single_tiny_weight() {
        let dna = vec![4, 11, 4];
        let population = [WeightedIndividual { dna: &dna, weight: 1e-9 }];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(roulette_selection(&population, &mut rng).unwrap(), dna.as_slice());
        }
    }

    #[test]
    fn test_spin_past_the_wheel_lands_on_first() {
        let genomes: Vec<Dna> = vec![vec![1], vec![2], vec![3]];
        let population: Vec<WeightedIndividual> = genomes
            .iter()
            .map(|dna| WeightedIndividual { dna, weight: 0.5 })
            .collect();

        assert_eq!(land_spin(&population, 0.0), genomes[0].as_slice());
        assert_eq!(land_spin(&population, 0.75), genomes[1].as_slice());
        assert_eq!(land_spin(&population, 1.49), genomes[2].as_slice());
        assert_eq!(land_spin(&population, 1.5), genomes[0].as_slice());
        assert_eq!(land_spin(&population, 42.0), genomes[0].as_slice());
    }

    #[test]
    fn test_crossover_redistributes_genes() {
        let parent1: Dna = (0..10).collect();
        let parent2: Dna = (20..30).collect();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (child1, child2) = crossover(&parent1, &parent2, &mut rng).unwrap();
            assert_eq!(child1.len(), parent1.len());
            assert_eq!(child2.len(), parent2.len());

            let cut = child1
                .iter()
                .position(|g| *g >= 20)
                .unwrap_or(child1.len());
            assert!(cut < parent1.len(), "cut must lie in [0, len)");
            assert_eq!(&child1[..cut], &parent1[..cut]);
            assert_eq!(&child1[cut..], &parent2[cut..]);
            assert_eq!(&child2[..cut], &parent2[..cut]);
            assert_eq!(&child2[cut..], &parent1[cut..]);
        }
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = crossover(&[1, 2, 3], &[1, 2], &mut rng);
        assert!(matches!(
            result,
            Err(ExprEvolveError::LengthMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_mutation_rate_converges() {
        let mut rng = StdRng::seed_from_u64(7);
        let mutation_chance = 10;
        let trials = 200_000;

        // 15 is never drawn, so every redrawn gene is visible
        let mut genome: Dna = vec![15; trials];
        let redrawn = mutate(&mut genome, mutation_chance, &mut rng);

        let changed: Vec<&Gene> = genome.iter().filter(|g| **g != 15).collect();
        assert_eq!(changed.len(), redrawn);
        assert!(changed.iter().all(|g| **g <= GENE_MAX));

        let observed = redrawn as f64 / trials as f64;
        assert!((observed - 0.1).abs() < 0.005, "observed rate {}", observed);
    }

    #[test]
    fn test_random_genome_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let genome = random_genome(5000, &mut rng);
        assert_eq!(genome.len(), 5000);
        assert!(genome.iter().all(|g| *g <= GENE_MAX));
        assert!(genome.contains(&0));
        assert!(genome.contains(&GENE_MAX));
    }
}
