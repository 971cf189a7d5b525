//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: genome mutation operators.
//

use crate::genome::{effective_min_program, random_symbols, Genome};
use crate::prng::Prng;

/// Longest substring a single `AddStr` mutation may insert.
const MUTATE_STR_SIZE: usize = 64;

/// A single structural edit applied to a genome.
///
/// Variants are numbered to match the order they are drawn in, purely so a
/// fixed seed reproduces a fixed sequence of edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Move = 0,
    Copy,
    AddChar,
    AddStr,
    Change,
    RemoveBlock,
    RemoveRandom,
    Swap,
}

const NUM_MUTATIONS: u32 = 8;

impl MutationKind {
    fn from_index(i: u32) -> MutationKind {
        match i {
            0 => MutationKind::Move,
            1 => MutationKind::Copy,
            2 => MutationKind::AddChar,
            3 => MutationKind::AddStr,
            4 => MutationKind::Change,
            5 => MutationKind::RemoveBlock,
            6 => MutationKind::RemoveRandom,
            7 => MutationKind::Swap,
            _ => unreachable!("mutation kind index out of range"),
        }
    }
}

/// Applies one randomly chosen mutation to `genome`, in place.
///
/// Infeasible edits (would exceed `max_program_size`, or would shrink the
/// genome below [`MIN_PROGRAM`]) are silently skipped, leaving the genome
/// unchanged for this call — mirroring a mutation function that returns an
/// ignorable status rather than propagating an error.
pub fn mutate(genome: &mut Genome, max_program_size: usize, rng: &mut Prng) {
    if genome.is_empty() {
        return;
    }

    let min_program = effective_min_program(max_program_size);
    let i = rng.rand_range(1, genome.len() as u32) as usize;
    let kind = MutationKind::from_index(rng.rand_range(0, NUM_MUTATIONS - 1));

    match kind {
        MutationKind::Swap => {
            let j = rng.rand_range(1, genome.len() as u32) as usize;
            genome.text.swap(i - 1, j - 1);
        }

        MutationKind::Move => {
            let j = rng.rand_range_except(1, genome.len() as u32, i as u32) as usize;
            let c = genome.text[i - 1];
            snip_slice(genome, i - 1, 1, min_program);
            insert_substring(genome, &[c], j - 1, max_program_size);
        }

        MutationKind::Copy => {
            let j = rng.rand_range_except(1, genome.len() as u32, i as u32) as usize;
            let c = genome.text[i - 1];
            insert_substring(genome, &[c], j - 1, max_program_size);
        }

        MutationKind::AddChar => {
            let c = random_symbols(1, rng)[0];
            insert_substring(genome, &[c], i - 1, max_program_size);
        }

        MutationKind::AddStr => {
            let stringlen = (MUTATE_STR_SIZE - 1)
                .min((max_program_size.saturating_sub(genome.len())).saturating_sub(1));
            if stringlen > 0 {
                let size = rng.rand_range(1, stringlen as u32) as usize;
                let buf = random_symbols(size, rng);
                insert_substring(genome, &buf, i - 1, max_program_size);
            }
        }

        MutationKind::Change => {
            genome.text[i - 1] = random_symbols(1, rng)[0];
        }

        MutationKind::RemoveBlock => {
            let randlen = rng.rand_range(1, (genome.len() / 2) as u32) as usize;
            let at = rng.rand_range(0, (genome.len() - randlen) as u32) as usize;
            snip_slice(genome, at, randlen, min_program);
        }

        MutationKind::RemoveRandom => {
            let randlen = rng.rand_range(1, (genome.len() / 2) as u32) as usize;
            for _ in 0..randlen {
                if genome.len() <= min_program {
                    break;
                }
                let at = rng.rand_range(1, genome.len() as u32) as usize;
                snip_slice(genome, at - 1, 1, min_program);
            }
        }
    }
}

/// Inserts `sub` before index `at`. No-op if `at` is not a valid existing
/// index, or if the result would exceed `max_program_size`.
fn insert_substring(genome: &mut Genome, sub: &[u8], at: usize, max_program_size: usize) -> bool {
    if at >= genome.len() {
        return false;
    }
    if genome.len() + sub.len() > max_program_size {
        return false;
    }
    genome.text.splice(at..at, sub.iter().copied());
    true
}

/// Removes `size` bytes starting at `i`, clamped to the genome's current
/// length. No-op if the result would shrink below `min_program`.
fn snip_slice(genome: &mut Genome, i: usize, size: usize, min_program: usize) {
    let size = if i + size > genome.len() {
        genome.len().saturating_sub(i)
    } else {
        size
    };
    if size == 0 {
        return;
    }
    if size + min_program > genome.len() {
        return;
    }
    genome.text.drain(i..i + size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::MIN_PROGRAM;

    #[test]
    fn mutation_never_shrinks_below_minimum() {
        let mut rng = Prng::new(11);
        for _ in 0..500 {
            let mut g = Genome::random(64, &mut rng);
            mutate(&mut g, 64, &mut rng);
            assert!(g.len() >= MIN_PROGRAM);
        }
    }

    #[test]
    fn mutation_never_exceeds_max_program_size() {
        let mut rng = Prng::new(12);
        for _ in 0..500 {
            let mut g = Genome::random(64, &mut rng);
            mutate(&mut g, 64, &mut rng);
            assert!(g.len() <= 64);
        }
    }

    #[test]
    fn repeated_mutation_stays_within_bounds() {
        let mut g = Genome::new(b"++++++++++++".to_vec());
        let mut rng = Prng::new(3);
        for _ in 0..200 {
            mutate(&mut g, 64, &mut rng);
            assert!(g.len() >= MIN_PROGRAM && g.len() <= 64);
        }
    }

    #[test]
    fn snip_slice_refuses_to_cross_minimum() {
        let mut g = Genome::new(vec![b'+'; MIN_PROGRAM]);
        snip_slice(&mut g, 0, 1, MIN_PROGRAM);
        assert_eq!(g.len(), MIN_PROGRAM);
    }

    #[test]
    fn mutation_degrades_gracefully_below_min_program() {
        let mut rng = Prng::new(13);
        for max_len in 2..MIN_PROGRAM {
            let mut g = Genome::random(max_len, &mut rng);
            for _ in 0..50 {
                mutate(&mut g, max_len, &mut rng);
                assert!(g.len() <= max_len);
                assert!(!g.is_empty());
            }
        }
    }

    #[test]
    fn insert_substring_refuses_past_max_size() {
        let mut g = Genome::new(vec![b'+'; 10]);
        assert!(!insert_substring(&mut g, b"xx", 5, 11));
        assert_eq!(g.len(), 10);
    }

    proptest::proptest! {
        #[test]
        fn mutation_keeps_genome_in_alphabet_and_in_bounds(
            seed: u32,
            start_len in MIN_PROGRAM..96usize,
            rounds in 1..20u32,
        ) {
            let mut rng = Prng::new(seed);
            let mut g = Genome::new(random_symbols(start_len, &mut rng));
            for _ in 0..rounds {
                mutate(&mut g, 96, &mut rng);
                proptest::prop_assert!(g.len() >= MIN_PROGRAM);
                proptest::prop_assert!(g.len() <= 96);
                proptest::prop_assert!(g.text.iter().all(|b| crate::genome::ALPHABET.contains(b)));
            }
        }
    }
}
