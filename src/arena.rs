//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: double-buffered population arena.
//

use crate::error::{Result, SynthError};
use crate::genome::Genome;

/// Holds two generations' worth of genomes and toggles which one is
/// "active" (already scored and sorted, the source for selection) versus
/// "next" (being filled in by the current generation).
///
/// Genome identity is purely positional — index `i` in the active buffer
/// has no relation to index `i` in the next buffer once a swap happens.
pub struct Arena {
    buffers: [Vec<Genome>; 2],
    active: usize,
}

impl Arena {
    /// Creates an arena with both buffers allocated to `population_size`
    /// empty-text placeholder genomes, to be overwritten before use.
    ///
    /// Reserves each buffer's capacity with `try_reserve_exact` rather than
    /// letting a plain `Vec` push abort the process, so an unreasonably
    /// large `population_size` surfaces as a [`SynthError::Allocation`]
    /// the caller can report and exit on, instead of a hard crash.
    pub fn new(population_size: usize) -> Result<Arena> {
        let make = || -> Result<Vec<Genome>> {
            let mut buf = Vec::new();
            buf.try_reserve_exact(population_size)
                .map_err(|e| SynthError::Allocation(e.to_string()))?;
            buf.resize_with(population_size, || Genome::new(Vec::new()));
            Ok(buf)
        };
        Ok(Arena { buffers: [make()?, make()?], active: 0 })
    }

    pub fn active(&self) -> &[Genome] {
        &self.buffers[self.active]
    }

    pub fn active_mut(&mut self) -> &mut [Genome] {
        &mut self.buffers[self.active]
    }

    pub fn next(&self) -> &[Genome] {
        &self.buffers[1 - self.active]
    }

    pub fn next_mut(&mut self) -> &mut [Genome] {
        &mut self.buffers[1 - self.active]
    }

    /// Makes the current "next" buffer the new "active" one.
    pub fn swap(&mut self) {
        self.active = 1 - self.active;
    }

    /// Sorts the active buffer ascending by fitness (lower is better).
    pub fn sort_active(&mut self) {
        self.buffers[self.active].sort_by_key(|g| g.fitness);
    }

    pub fn population_size(&self) -> usize {
        self.buffers[self.active].len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_active_and_next() {
        let mut arena = Arena::new(4).unwrap();
        arena.active_mut()[0] = Genome::new(b"AAAA".to_vec());
        arena.next_mut()[0] = Genome::new(b"BBBB".to_vec());
        arena.swap();
        assert_eq!(arena.active()[0].text, b"BBBB".to_vec());
        assert_eq!(arena.next()[0].text, b"AAAA".to_vec());
    }

    #[test]
    fn sort_active_orders_by_fitness_ascending() {
        let mut arena = Arena::new(3).unwrap();
        for (i, fitness) in [30u32, 10, 20].iter().enumerate() {
            arena.active_mut()[i].fitness = *fitness;
        }
        arena.sort_active();
        let fitnesses: Vec<u32> = arena.active().iter().map(|g| g.fitness).collect();
        assert_eq!(fitnesses, vec![10, 20, 30]);
    }

    #[test]
    fn absurd_population_size_fails_with_allocation_error() {
        let err = Arena::new(usize::MAX).unwrap_err();
        assert!(matches!(err, SynthError::Allocation(_)));
    }
}
