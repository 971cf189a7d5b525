//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: elitism and tournament selection.
//

use crate::genome::Genome;
use crate::prng::Prng;

/// Tournament sample size before picking the fittest contestant.
const TOURNAMENT_SIZE: usize = 6;

/// Returns the number of genomes at the front of a sorted active population
/// (lowest fitness first) that count as elite, i.e. carried over verbatim.
pub fn elite_border(population_size: usize, elitism: f64) -> usize {
    (population_size as f64 * elitism) as usize
}

/// Samples `min(TOURNAMENT_SIZE, active.len())` indices with replacement
/// from `active` and returns the index of the fittest contestant.
pub fn tournament_index(active: &[Genome], rng: &mut Prng) -> usize {
    let size = TOURNAMENT_SIZE.min(active.len());
    let mut best = rng.rand_range(0, (active.len() - 1) as u32) as usize;
    for _ in 1..size {
        let candidate = rng.rand_range(0, (active.len() - 1) as u32) as usize;
        if active[candidate].fitness < active[best].fitness {
            best = candidate;
        }
    }
    best
}

/// Convenience wrapper over [`tournament_index`] returning the genome
/// itself rather than its index.
pub fn tournament<'a>(active: &'a [Genome], rng: &mut Prng) -> &'a Genome {
    &active[tournament_index(active, rng)]
}
