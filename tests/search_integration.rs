//! Full genetic search runs against the default goals and printer limits.

use graydisk::config::{OptimizationGoals, SearchConfig};
use graydisk::engines::evaluation::PrinterConstraints;
use graydisk::engines::generation::{GeneticSearch, NullProgress, RecordingProgress};
use graydisk::params::EncoderParameters;

fn config(seed: u64) -> SearchConfig {
    SearchConfig {
        population_size: 30,
        generations: 15,
        seed: Some(seed),
        ..SearchConfig::default()
    }
}

fn search_with(config: SearchConfig, baseline: Option<EncoderParameters>) -> GeneticSearch {
    GeneticSearch::new(
        config,
        OptimizationGoals::default(),
        PrinterConstraints::default(),
        baseline,
    )
}

#[test]
fn runs_full_generation_budget_with_monotone_best() {
    let mut search = search_with(config(7), Some(EncoderParameters::default()));
    let mut progress = RecordingProgress::new();
    let result = search.run(&mut progress).unwrap();

    // One report per generation, no early exit by default.
    assert_eq!(progress.best.len(), 15);
    assert_eq!(result.generations, 15);
    assert_eq!(search.history().len(), 15);

    // Best-ever fitness never decreases across generations.
    for window in progress.best.windows(2) {
        assert!(window[1] >= window[0]);
    }

    // The baseline is a known-good design, so a solution must exist.
    assert!(result.has_solution());
    assert_eq!(result.fitness, *progress.best.last().unwrap());
}

#[test]
fn baseline_search_only_moves_track_layout() {
    let baseline = EncoderParameters::default();
    let mut search = search_with(config(11), Some(baseline.clone()));
    let result = search.run(&mut NullProgress).unwrap();

    let p = &result.parameters;
    assert_eq!(p.num_positions, baseline.num_positions);
    assert_eq!(p.num_tracks, baseline.num_tracks);
    assert_eq!(p.outer_diameter_mm, baseline.outer_diameter_mm);
    assert_eq!(p.arc_angle_deg, baseline.arc_angle_deg);
}

#[test]
fn free_search_keeps_positions_and_tracks_consistent() {
    let mut search = search_with(config(13), None);
    let result = search.run(&mut NullProgress).unwrap();

    if result.has_solution() {
        let p = &result.parameters;
        assert_eq!(p.num_tracks, p.required_bits());
        assert!([8, 16, 32, 64].contains(&p.num_positions));
    }
}

#[test]
fn identical_seeds_give_identical_results() {
    let run = |seed| {
        let mut search = search_with(config(seed), Some(EncoderParameters::default()));
        search.run(&mut NullProgress).unwrap()
    };

    let a = run(99);
    let b = run(99);
    assert_eq!(a.parameters, b.parameters);
    assert_eq!(a.fitness, b.fitness);
    assert_eq!(a.components, b.components);
}

#[test]
fn elites_survive_unchanged_between_generations() {
    let mut search = search_with(config(17), Some(EncoderParameters::default()));
    search.initialize_population();
    search.evaluate_population();

    let elite_count = search.elite_count();
    assert_eq!(elite_count, 3); // ceil(30 / 10)

    let elites: Vec<_> = search
        .population()
        .iter()
        .take(elite_count)
        .map(|g| (g.params.clone(), g.fitness))
        .collect();

    search.next_generation();

    for (i, (params, fitness)) in elites.iter().enumerate() {
        let survivor = &search.population()[i];
        assert_eq!(&survivor.params, params);
        assert_eq!(survivor.fitness, *fitness);
    }
}

#[test]
fn cached_elites_are_not_re_evaluated() {
    let mut search = search_with(config(23), Some(EncoderParameters::default()));
    search.initialize_population();
    search.evaluate_population();
    let after_first = search.evaluator().evaluations();
    assert_eq!(after_first, 30);

    search.next_generation();
    search.evaluate_population();
    let after_second = search.evaluator().evaluations();

    // Elites carry their cache; only offspring are scored again.
    assert_eq!(after_second, after_first + 30 - search.elite_count());
}
