use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::evaluation::{evaluate, fitness, weight};
use crate::engines::generation::{
    genome::{render, Dna},
    operators::*,
};
use crate::error::{ExprEvolveError, Result};
use crate::types::Gene;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::Serialize;

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, sample: &[Gene]);
    fn on_solution_found(&mut self, generation: usize, dna: &[Gene]);
}

/// Result of one run
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionOutcome {
    pub best: Dna,
    pub expression: String,
    pub value: f64,
    pub fitness: f64,
    pub generations_run: usize,
    pub solved: bool,
    #[serde(skip)]
    pub final_population: Vec<Dna>,
}

pub struct EvolutionEngine<R: Rng = StdRng> {
    config: EvolutionConfig,
    rng: R,
}

impl EvolutionEngine<StdRng> {
    pub fn new(config: EvolutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EvolutionEngine<R> {
    pub fn with_rng(config: EvolutionConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Run the evolution process
    ///
    /// Generations `0..=generations` are bred unless a generation contains an
    /// exact match, in which case the run stops after that generation.
    /// An invalid config is reported before any individual is bred.
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<EvolutionOutcome> {
        self.config.validate()?;

        let target = self.config.target;
        let mut population = self.initialize_population();
        let mut best: Option<(Dna, f64)> = None;
        let mut generations_run = 0;
        let mut solved = false;

        for generation in 0..=self.config.generations {
            callback.on_generation_start(generation);
            generations_run = generation + 1;

            let next_generation = {
                let weighted = self.weigh_population(&population);
                self.create_next_generation(&weighted)?
            };

            let (best_idx, best_fitness) =
                fittest(&next_generation, target).ok_or(ExprEvolveError::EmptyPopulation)?;

            let improved = best
                .as_ref()
                .map_or(true, |(_, best_so_far)| best_fitness < *best_so_far);
            if improved {
                log::debug!(
                    "Generation {}: new best {} (fitness {})",
                    generation,
                    render(&next_generation[best_idx]),
                    best_fitness
                );
                best = Some((next_generation[best_idx].clone(), best_fitness));
            }

            callback.on_generation_complete(generation, best_fitness, &next_generation[best_idx]);

            population = next_generation;

            if best_fitness == 0.0 {
                callback.on_solution_found(generation, &population[best_idx]);
                solved = true;
                break;
            }
        }

        let (best, fitness) = best.ok_or(ExprEvolveError::EmptyPopulation)?;
        Ok(EvolutionOutcome {
            expression: render(&best),
            value: evaluate(&best),
            best,
            fitness,
            generations_run,
            solved,
            final_population: population,
        })
    }

    fn initialize_population(&mut self) -> Vec<Dna> {
        (0..self.config.population_size)
            .map(|_| random_genome(self.config.dna_size, &mut self.rng))
            .collect()
    }

    fn weigh_population<'a>(&self, population: &'a [Dna]) -> Vec<WeightedIndividual<'a>> {
        population
            .iter()
            .map(|dna| WeightedIndividual {
                dna,
                weight: weight(fitness(dna, self.config.target)),
            })
            .collect()
    }

    /// Breeds `population_size / 2 + 1` pairs, so the result is
    /// `bred_population_size()` long rather than exactly `population_size`.
    fn create_next_generation(&mut self, weighted: &[WeightedIndividual]) -> Result<Vec<Dna>> {
        let pairs = self.config.population_size / 2 + 1;
        let mut next_generation = Vec::with_capacity(pairs * 2);
        let mut redrawn = 0;

        for _ in 0..pairs {
            let parent1 = roulette_selection(weighted, &mut self.rng)?;
            let parent2 = roulette_selection(weighted, &mut self.rng)?;

            let (mut child1, mut child2) = crossover(parent1, parent2, &mut self.rng)?;

            redrawn += mutate(&mut child1, self.config.mutation_chance, &mut self.rng);
            redrawn += mutate(&mut child2, self.config.mutation_chance, &mut self.rng);

            next_generation.push(child1);
            next_generation.push(child2);
        }

        log::trace!("Bred {} individuals, {} genes mutated", next_generation.len(), redrawn);
        Ok(next_generation)
    }
}

/// Index and fitness of the fittest individual; the first one wins ties
fn fittest(population: &[Dna], target: f64) -> Option<(usize, f64)> {
    population
        .iter()
        .enumerate()
        .map(|(idx, dna)| (idx, fitness(dna, target)))
        .fold(None, |best, (idx, f)| match best {
            Some((_, best_f)) if f >= best_f => best,
            _ => Some((idx, f)),
        })
}
