pub mod operators;
pub mod evolution_engine;
pub mod progress;
pub mod genome;

pub use genome::{Dna, parse, render};
pub use evolution_engine::{EvolutionEngine, EvolutionOutcome, ProgressCallback};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
pub use operators::{crossover, mutate, random_genome, roulette_selection, WeightedIndividual};
