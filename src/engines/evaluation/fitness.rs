use super::expression::evaluate;
use crate::types::Gene;

/// Floor for selection weights so the roulette total never reaches zero
pub const MIN_WEIGHT: f64 = 1e-6;

/// Distance between the evaluated expression and the target. 0 is a perfect match.
pub fn fitness(dna: &[Gene], target: f64) -> f64 {
    (evaluate(dna) - target).abs()
}

/// Roulette weight for a fitness value: inverse distance, 1.0 for an exact hit.
///
/// Distances above `1 / MIN_WEIGHT` (1e6) get `MIN_WEIGHT` instead of `1 / fitness`,
/// so every individual keeps a positive share of the wheel.
pub fn weight(fitness: f64) -> f64 {
    if fitness == 0.0 {
        1.0
    } else {
        (1.0 / fitness).max(MIN_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_zero_only_on_exact_match() {
        // 4 * 5 + 3 = 23
        let dna = [4, 13, 5, 11, 3];
        assert_eq!(fitness(&dna, 23.0), 0.0);
        assert_eq!(fitness(&dna, 20.0), 3.0);
        assert_eq!(fitness(&dna, 26.5), 3.5);
        assert!(fitness(&dna, 23.000001) > 0.0);
    }

    #[test]
    fn test_weight() {
        assert_eq!(weight(0.0), 1.0);
        assert_eq!(weight(0.5), 2.0);
        assert_eq!(weight(4.0), 0.25);
        assert_eq!(weight(1e12), MIN_WEIGHT);
        assert!(weight(f64::MAX) > 0.0);
    }
}
