use super::evolution_engine::ProgressCallback;
use super::genome::render;
use crate::types::Gene;

/// Logs a rendered sample every `report_interval` generations
pub struct ConsoleProgressCallback {
    report_interval: usize,
}

impl ConsoleProgressCallback {
    pub fn new(report_interval: usize) -> Self {
        Self {
            report_interval: report_interval.max(1),
        }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64, sample: &[Gene]) {
        if generation % self.report_interval == 0 {
            log::info!(
                "Generation {}: {} (fitness {:.6})",
                generation,
                render(sample),
                best_fitness
            );
        }
    }

    fn on_solution_found(&mut self, generation: usize, dna: &[Gene]) {
        log::info!("Exact solution in generation {}: {}", generation, render(dna));
    }
}

/// Discards all progress events
#[derive(Default)]
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64, _sample: &[Gene]) {}

    fn on_solution_found(&mut self, _generation: usize, _dna: &[Gene]) {}
}
