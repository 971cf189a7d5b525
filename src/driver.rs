//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: the generational evolution driver.
//

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::arena::Arena;
use crate::config::Config;
use crate::crossover::breed;
use crate::error::Result;
use crate::fitness::score;
use crate::genome::{Genome, TestCase};
use crate::mutation::mutate;
use crate::prng::Prng;
use crate::select::{elite_border, tournament_index};

/// Which half of the two-phase schedule a progress record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Searching for any program that satisfies every test case.
    Find,
    /// Fitness 0 reached; now shrinking the program.
    Optimize,
}

/// Emitted whenever a new best program is found, unless the run is quiet.
pub struct Progress<'a> {
    pub stage: Stage,
    pub generation: u64,
    pub fitness: u32,
    pub program: &'a [u8],
}

/// Final state of a completed (or cancelled) run.
pub struct RunSummary {
    pub generations: u64,
    pub num_bf_programs: u64,
    pub best_program: Vec<u8>,
    pub best_fitness: u32,
    pub seed: u32,
    pub elapsed: std::time::Duration,
}

/// Drives the generational loop described in the module docs of
/// [`crate`]: elitism + tournament selection, one-point crossover, a
/// seven-way mutation operator, and a two-phase find-then-shrink
/// schedule, all sitting on top of a double-buffered [`Arena`].
pub struct Driver {
    stop: Arc<AtomicBool>,
}

impl Default for Driver {
    fn default() -> Driver {
        Driver::new()
    }
}

impl Driver {
    pub fn new() -> Driver {
        Driver { stop: Arc::new(AtomicBool::new(false)) }
    }

    /// Returns a cloneable handle that, when set, requests the run in
    /// progress to stop after its current generation. A `ctrlc` handler
    /// installed by the CLI binary stores into this same handle.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Cooperative, idempotent cancellation request.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn run(
        &self,
        config: &Config,
        testcases: &[TestCase],
        mut on_progress: impl FnMut(Progress),
    ) -> Result<RunSummary> {
        let start = Instant::now();
        let mut rng = match config.seed {
            Some(s) => Prng::new(s),
            None => Prng::from_wall_clock(),
        };
        let seed = rng.seed();

        let population_size = config.population_size as usize;
        let max_program_size = config.max_program_size as usize;
        let border = elite_border(population_size, config.elitism);

        let mut arena = Arena::new(population_size)?;
        for slot in arena.active_mut() {
            let mut g = Genome::random(max_program_size, &mut rng);
            g.fitness = score(&g, testcases, false);
            *slot = g;
        }
        arena.sort_active();

        let mut penalize_length = false;
        let mut optimizing = false;
        let mut opt_count: i64 = 0;
        let mut generation: u64 = 0;
        let mut best_fitness = u32::MAX;
        let mut best_program: Vec<u8> = Vec::new();

        while !self.stop.load(Ordering::SeqCst) {
            let next = evolve_once(
                &arena,
                border,
                config,
                testcases,
                penalize_length,
                max_program_size,
                &mut rng,
            )?;
            for (slot, g) in arena.next_mut().iter_mut().zip(next) {
                *slot = g;
            }
            arena.swap();
            arena.sort_active();

            if arena.active()[0].fitness < best_fitness {
                best_fitness = arena.active()[0].fitness;
                best_program = arena.active()[0].text.clone();
                if !config.quiet {
                    on_progress(Progress {
                        stage: if optimizing { Stage::Optimize } else { Stage::Find },
                        generation,
                        fitness: best_fitness,
                        program: &best_program,
                    });
                }
            }

            generation += 1;

            if best_fitness == 0 && !optimizing {
                if config.optimization_generations == 0 {
                    self.request_stop();
                } else {
                    penalize_length = true;
                    optimizing = true;

                    for g in arena.active_mut() {
                        g.fitness = score(g, testcases, penalize_length);
                    }
                    arena.sort_active();
                    best_fitness = arena.active()[0].fitness;
                    best_program = arena.active()[0].text.clone();
                }
            } else if optimizing {
                if config.optimization_generations > 0 {
                    opt_count += 1;
                    if opt_count >= config.optimization_generations {
                        self.request_stop();
                    }
                }
            }
        }

        Ok(RunSummary {
            generations: generation,
            num_bf_programs: config.population_size as u64 * generation,
            best_program,
            best_fitness,
            seed,
            elapsed: start.elapsed(),
        })
    }
}

/// Builds one full next-generation buffer from `active`, per §4.8 of the
/// evolution driver: elitism-driven breeding and mutation, a verbatim copy
/// of the untouched tail, and a random fill for anything still missing.
#[allow(clippy::too_many_arguments)]
fn evolve_once(
    arena: &Arena,
    border: usize,
    config: &Config,
    testcases: &[TestCase],
    penalize_length: bool,
    max_program_size: usize,
    rng: &mut Prng,
) -> Result<Vec<Genome>> {
    let active = arena.active();
    let population_size = active.len();
    let mut next: Vec<Genome> = Vec::with_capacity(population_size);
    let mut activepos = 0usize;

    while activepos < border {
        if next.len() >= population_size - 1 {
            break;
        }

        let curr1_idx = activepos;
        let mut curr2_idx = curr1_idx;
        while curr2_idx == curr1_idx {
            curr2_idx = tournament_index(active, rng);
        }

        let mut changed = false;
        let (mut n1, mut n2) = if rng.rand_unit() <= config.crossover || activepos == 0 {
            changed = true;
            breed(&active[curr1_idx], &active[curr2_idx], max_program_size, rng)?
        } else {
            (active[curr1_idx].clone(), active[curr2_idx].clone())
        };

        if rng.rand_unit() <= config.mutation {
            mutate(&mut n1, max_program_size, rng);
            mutate(&mut n2, max_program_size, rng);
            changed = true;
        }

        if changed {
            n1.fitness = score(&n1, testcases, penalize_length);
            n2.fitness = score(&n2, testcases, penalize_length);
        }

        next.push(n1);
        next.push(n2);
        activepos += 1;
    }

    if next.len() < population_size {
        let copy_index = activepos;
        let active_remaining = population_size - copy_index;
        let copy_count = active_remaining.min(population_size - next.len());

        for i in copy_index..copy_index + copy_count {
            let mut g = active[i].clone();
            if rng.rand_unit() <= config.mutation {
                mutate(&mut g, max_program_size, rng);
                g.fitness = score(&g, testcases, penalize_length);
            }
            next.push(g);
        }

        while next.len() < population_size {
            let mut g = Genome::random(max_program_size, rng);
            g.fitness = score(&g, testcases, penalize_length);
            next.push(g);
        }
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::genome::TestCase;

    fn tc(output: &str) -> TestCase {
        TestCase::new(Vec::new(), output.as_bytes().to_vec())
    }

    #[test]
    fn finds_exact_single_byte_output_quickly() {
        let config = Config::validated(0.5, 0.5, 1.0, 200, 64, 0, Some(1), false).unwrap();
        let testcases = vec![tc("A")];
        let driver = Driver::new();
        let summary = driver.run(&config, &testcases, |_p| {}).unwrap();
        assert_eq!(summary.best_fitness, 0);
        assert!(summary.num_bf_programs > 0);
    }

    #[test]
    fn cancellation_stops_the_loop_without_reaching_fitness_zero() {
        // An impossible-to-satisfy pair of test cases (same input, different
        // output) keeps fitness above zero forever, so the run only ends via
        // explicit cancellation from another thread.
        let config = Config::validated(0.5, 0.5, 1.0, 20, 32, -1, Some(2), true).unwrap();
        let testcases = vec![
            TestCase::new(b"x".to_vec(), b"A".to_vec()),
            TestCase::new(b"x".to_vec(), b"B".to_vec()),
        ];
        let driver = Driver::new();
        let stop = driver.stop_handle();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(150));
            stop.store(true, Ordering::SeqCst);
        });
        let summary = driver.run(&config, &testcases, |_p| {}).unwrap();
        handle.join().unwrap();
        assert!(summary.generations > 0);
    }

    #[test]
    fn optimization_phase_shrinks_the_best_program() {
        let config = Config::validated(0.5, 0.5, 1.0, 300, 64, 30, Some(9), true).unwrap();
        let testcases = vec![tc("A")];
        let driver = Driver::new();
        let summary = driver.run(&config, &testcases, |_p| {}).unwrap();
        assert_eq!(summary.best_fitness, 0);
    }
}
