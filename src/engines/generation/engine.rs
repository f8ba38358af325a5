//! Genetic search over encoder parameter records.
//!
//! The engine advances a population through discrete generations:
//! evaluate, rank, select, reproduce. The best genome ever seen is kept
//! independently of population turnover, and by default the search runs
//! its full generation budget so the solution space is explored even
//! after the fitness plateaus.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::{OptimizationGoals, SearchConfig};
use crate::engines::evaluation::fitness::FitnessEvaluator;
use crate::engines::evaluation::printability::PrinterConstraints;
use crate::error::{GraydiskError, Result};
use crate::params::EncoderParameters;
use crate::report::OptimizationResult;

use super::genome::Genome;
use super::operators::select_parents;

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(
        &mut self,
        generation: usize,
        best_fitness: f64,
        mean_fitness: f64,
        valid_count: usize,
    );
}

pub struct GeneticSearch {
    config: SearchConfig,
    baseline: Option<EncoderParameters>,
    evaluator: FitnessEvaluator,
    population: Vec<Genome>,
    generation: usize,
    best: Option<Genome>,
    history: Vec<f64>,
    rng: StdRng,
}

impl GeneticSearch {
    pub fn new(
        config: SearchConfig,
        goals: OptimizationGoals,
        printer: PrinterConstraints,
        baseline: Option<EncoderParameters>,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            baseline,
            evaluator: FitnessEvaluator::new(goals, printer),
            population: Vec::new(),
            generation: 0,
            best: None,
            history: Vec::new(),
            rng,
        }
    }

    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    pub fn best(&self) -> Option<&Genome> {
        self.best.as_ref()
    }

    /// Mean population fitness per generation, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }

    /// Genomes carried into the next generation unchanged.
    pub fn elite_count(&self) -> usize {
        let n = self.config.population_size;
        (n.div_ceil(10)).max(2).min(n)
    }

    /// Run the full search and return the best genome found.
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<OptimizationResult> {
        use crate::config::ConfigSection;
        self.config.validate()?;

        info!(
            "Starting genetic search: {} genomes, {} generations, baseline {}",
            self.config.population_size,
            self.config.generations,
            if self.baseline.is_some() { "fixed" } else { "free" },
        );

        self.initialize_population();

        let mut stagnation = 0usize;
        let mut last_best = 0.0f64;

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            self.evaluate_population();
            self.generation = generation + 1;

            let best_fitness = self.best.as_ref().map(|g| g.fitness).unwrap_or(0.0);
            let mean_fitness = self.history.last().copied().unwrap_or(0.0);
            let valid_count = self.population.iter().filter(|g| g.fitness > 0.0).count();

            debug!(
                "Generation {}: best={:.3} avg={:.3} valid={}/{}",
                generation,
                best_fitness,
                mean_fitness,
                valid_count,
                self.population.len()
            );
            callback.on_generation_complete(generation, best_fitness, mean_fitness, valid_count);

            if best_fitness - last_best < self.config.convergence_threshold {
                stagnation += 1;
                if stagnation >= self.config.stagnation_limit {
                    if self.config.early_stop {
                        info!(
                            "Converged after {} stagnant generations, stopping early",
                            stagnation
                        );
                        break;
                    }
                    warn!(
                        "No fitness improvement for {} generations, continuing to explore",
                        stagnation
                    );
                }
            } else {
                stagnation = 0;
                last_best = best_fitness;
            }

            if generation + 1 < self.config.generations {
                self.next_generation();
            }
        }

        let result = self.result()?;
        if result.has_solution() {
            info!(
                "Search complete after {} generations, best fitness {:.3}",
                self.generation, result.fitness
            );
        } else {
            warn!(
                "Search exhausted {} generations without a valid solution",
                self.generation
            );
        }
        Ok(result)
    }

    /// Build the initial population. With a baseline, only the free track
    /// layout genes are randomized.
    pub fn initialize_population(&mut self) {
        self.population = (0..self.config.population_size)
            .map(|_| Genome::random(self.baseline.as_ref(), &mut self.rng))
            .collect();
        self.generation = 0;
        self.best = None;
        self.history.clear();
    }

    /// Score every unevaluated genome, rank the population, and update the
    /// best-ever genome and fitness history.
    pub fn evaluate_population(&mut self) {
        let evaluator = &self.evaluator;
        self.population.par_iter_mut().for_each(|genome| {
            evaluator.evaluate(genome);
        });

        // Stable sort: ties keep their pre-sort order for reproducibility.
        self.population.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(top) = self.population.first() {
            if self.best.as_ref().map_or(true, |b| top.fitness > b.fitness) {
                self.best = Some(top.clone());
            }
        }

        let mean = if self.population.is_empty() {
            0.0
        } else {
            self.population.iter().map(|g| g.fitness).sum::<f64>() / self.population.len() as f64
        };
        self.history.push(mean);
    }

    /// Produce the next generation: elites survive unchanged, the rest are
    /// offspring of tournament-selected parents.
    pub fn next_generation(&mut self) {
        let n = self.config.population_size;
        let elite_count = self.elite_count();

        let mut next: Vec<Genome> = self.population.iter().take(elite_count).cloned().collect();

        let parents = select_parents(
            &self.population,
            n,
            self.config.tournament_size,
            &mut self.rng,
        );

        while next.len() < n {
            let i = self.rng.gen_range(0..parents.len());
            let mut j = self.rng.gen_range(0..parents.len());
            while j == i {
                j = self.rng.gen_range(0..parents.len());
            }

            let (mut child1, mut child2) = parents[i].crossover(parents[j], &mut self.rng);
            child1.mutate(self.config.mutation_rate, &mut self.rng);
            child2.mutate(self.config.mutation_rate, &mut self.rng);

            next.push(child1);
            if next.len() < n {
                next.push(child2);
            }
        }

        drop(parents);
        self.population = next;
    }

    fn result(&self) -> Result<OptimizationResult> {
        let best = self
            .best
            .as_ref()
            .ok_or_else(|| GraydiskError::Search("Search produced no result".to_string()))?;

        Ok(OptimizationResult {
            parameters: best.params.clone(),
            fitness: best.fitness,
            components: best.components.clone(),
            generations: self.generation,
            goals: self.evaluator.goals().clone(),
        })
    }
}
