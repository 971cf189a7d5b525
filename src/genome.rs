//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: candidate genome and test case types.
//

use crate::prng::Prng;

/// Brainfuck's full instruction alphabet, including the I/O operators.
pub const ALPHABET: &[u8] = b"+-<>.[],";

/// Shortest program a genome is ever allowed to shrink to.
pub const MIN_PROGRAM: usize = 12;

/// Largest input or output a test case may carry.
pub const MAX_TESTCASE_BYTES: usize = 128;

/// Largest number of test cases a single run accepts.
pub const MAX_TESTCASES: usize = 128;

/// Per-genome interpreter instruction budget during fitness evaluation.
pub const MAX_INSTRUCTIONS_EXEC: usize = 100_000;

/// An input/expected-output pair a candidate program is scored against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    pub input: Vec<u8>,
    pub output: Vec<u8>,
}

impl TestCase {
    pub fn new(input: Vec<u8>, output: Vec<u8>) -> TestCase {
        TestCase { input, output }
    }
}

/// A candidate Brainfuck program plus its cached fitness.
///
/// `fitness` is meaningless (holds `u32::MAX`) until the genome has been
/// scored once; every path that produces a genome — random generation,
/// crossover, mutation — is immediately followed by a call into
/// [`crate::fitness::score`] before the genome is placed back in the
/// population.
#[derive(Clone, Debug)]
pub struct Genome {
    pub text: Vec<u8>,
    pub fitness: u32,
}

impl Genome {
    pub fn new(text: Vec<u8>) -> Genome {
        Genome { text, fitness: u32::MAX }
    }

    /// Generates a random program of length in `[effective_min_program(max_len), max_len]`.
    pub fn random(max_len: usize, rng: &mut Prng) -> Genome {
        let min_len = effective_min_program(max_len);
        let len = rng.rand_range(min_len as u32, max_len as u32) as usize;
        Genome::new(random_symbols(len, rng))
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The shortest a genome may be for a given `max_program_size`.
///
/// Ordinarily [`MIN_PROGRAM`], but a run configured with a smaller
/// `max_program_size` (the CLI only rejects values below 2) clamps down to
/// `max_program_size` instead, so genome generation, mutation, and crossover
/// all degrade gracefully rather than requesting an empty or inverted range.
pub fn effective_min_program(max_program_size: usize) -> usize {
    MIN_PROGRAM.min(max_program_size)
}

/// Draws `n` independent, uniformly chosen symbols from [`ALPHABET`].
pub fn random_symbols(n: usize, rng: &mut Prng) -> Vec<u8> {
    (0..n)
        .map(|_| ALPHABET[rng.rand_range(0, (ALPHABET.len() - 1) as u32) as usize])
        .collect()
}
