use rand::seq::index;
use rand::Rng;

use super::genome::Genome;

/// Tournament selection: draw `tournament_size` distinct genomes and keep
/// the fittest. Ties resolve to the earliest drawn index so that a seeded
/// run is fully reproducible.
pub fn tournament_selection<'a, R: Rng>(
    population: &'a [Genome],
    tournament_size: usize,
    rng: &mut R,
) -> &'a Genome {
    debug_assert!(!population.is_empty());
    let k = tournament_size.clamp(1, population.len());
    let mut drawn: Vec<usize> = index::sample(rng, population.len(), k).into_vec();
    drawn.sort_unstable();

    let mut best = drawn[0];
    for idx in drawn.into_iter().skip(1) {
        if population[idx].fitness > population[best].fitness {
            best = idx;
        }
    }
    &population[best]
}

/// Parent pool of `count` tournament winners, drawn with replacement
/// across tournaments.
pub fn select_parents<'a, R: Rng>(
    population: &'a [Genome],
    count: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<&'a Genome> {
    (0..count)
        .map(|_| tournament_selection(population, tournament_size, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::EncoderParameters;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population_with_fitness(fitnesses: &[f64]) -> Vec<Genome> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut g = Genome::new(EncoderParameters::default());
                g.fitness = f;
                g.validated = true;
                g
            })
            .collect()
    }

    #[test]
    fn full_tournament_picks_the_maximum() {
        let population = population_with_fitness(&[0.1, 0.9, 0.4, 0.2]);
        let mut rng = StdRng::seed_from_u64(1);
        // Tournament over the whole population always returns the best.
        for _ in 0..10 {
            let winner = tournament_selection(&population, population.len(), &mut rng);
            assert_eq!(winner.fitness, 0.9);
        }
    }

    #[test]
    fn zero_fitness_population_still_selects() {
        let population = population_with_fitness(&[0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(2);
        let winner = tournament_selection(&population, 2, &mut rng);
        assert_eq!(winner.fitness, 0.0);
    }

    #[test]
    fn parent_pool_has_requested_size() {
        let population = population_with_fitness(&[0.3, 0.6, 0.1, 0.8, 0.5]);
        let mut rng = StdRng::seed_from_u64(3);
        let pool = select_parents(&population, 5, 3, &mut rng);
        assert_eq!(pool.len(), 5);
    }
}
