use super::traits::ConfigSection;
use crate::error::ExprEvolveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub target: f64,
    pub dna_size: usize,
    pub population_size: usize,
    pub generations: usize,
    /// Denominator of the per-gene mutation probability
    pub mutation_chance: u32,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: 23.0,
            dna_size: 10,
            population_size: 50,
            generations: 5000,
            mutation_chance: 50,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), ExprEvolveError> {
        if !self.target.is_finite() {
            return Err(ExprEvolveError::Configuration(
                "Target must be a finite number".to_string()
            ));
        }
        if self.dna_size == 0 {
            return Err(ExprEvolveError::Configuration(
                "DNA size must be at least 1".to_string()
            ));
        }
        if self.population_size == 0 {
            return Err(ExprEvolveError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.mutation_chance < 2 {
            return Err(ExprEvolveError::Configuration(
                "Mutation chance must be at least 2".to_string()
            ));
        }
        if self.population_size % 2 != 0 {
            log::warn!(
                "Population size {} is odd; bred generations hold {} individuals",
                self.population_size,
                self.bred_population_size()
            );
        }
        Ok(())
    }
}

impl EvolutionConfig {
    /// Size of every bred generation: `population_size / 2 + 1` pairs of children
    pub fn bred_population_size(&self) -> usize {
        (self.population_size / 2 + 1) * 2
    }
}
