//! Progress reporting hooks for long-running searches.

use log::info;

use super::engine::ProgressCallback;

/// Logs a summary line per generation.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    last_best: f64,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressCallback for ConsoleProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: f64,
        mean_fitness: f64,
        valid_count: usize,
    ) {
        let marker = if best_fitness > self.last_best { " *" } else { "" };
        info!(
            "gen {:>4}  best {:.4}  mean {:.4}  valid {}{}",
            generation, best_fitness, mean_fitness, valid_count, marker
        );
        self.last_best = self.last_best.max(best_fitness);
    }
}

/// Discards all progress events. Useful in tests and batch runs.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(
        &mut self,
        _generation: usize,
        _best_fitness: f64,
        _mean_fitness: f64,
        _valid_count: usize,
    ) {
    }
}

/// Records every generation report for later inspection.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub best: Vec<f64>,
    pub mean: Vec<f64>,
    pub valid: Vec<usize>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressCallback for RecordingProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(
        &mut self,
        _generation: usize,
        best_fitness: f64,
        mean_fitness: f64,
        valid_count: usize,
    ) {
        self.best.push(best_fitness);
        self.mean.push(mean_fitness);
        self.valid.push(valid_count);
    }
}
