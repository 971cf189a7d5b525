//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: fitness evaluation.
//

use crate::genome::{Genome, TestCase, MAX_INSTRUCTIONS_EXEC, MAX_TESTCASE_BYTES};
use crate::interp::interpret;

/// Scores `genome` against every test case in `testcases`; 0 is a perfect
/// match, larger values are worse. Saturates at `u32::MAX` rather than
/// overflowing.
///
/// A genome that fails to interpret against a given test case (crashes,
/// loops, or exhausts its budget) is charged a flat penalty for that test
/// case instead of being scored byte-by-byte against it.
///
/// When `penalize_length` is set, the genome's length is added on top —
/// but only if there is room without overflowing `u32`; otherwise the score
/// is left as-is. So `score(g, true) >= score(g, false)` always, with
/// equality iff adding `len(g)` would have overflowed.
pub fn score(genome: &Genome, testcases: &[TestCase], penalize_length: bool) -> u32 {
    assert!(!testcases.is_empty());

    let mut fitness: u32 = 0;
    let failure_penalty = u32::MAX / testcases.len() as u32;
    let output_cap = MAX_TESTCASE_BYTES - 1;

    for tc in testcases {
        match interpret(&genome.text, &tc.input, output_cap, MAX_INSTRUCTIONS_EXEC) {
            Err(_) => {
                fitness = fitness.saturating_add(failure_penalty);
            }
            Ok(produced) => {
                let len_diff = (produced.len() as i64 - tc.output.len() as i64).unsigned_abs() as u32;
                fitness = fitness.saturating_add(len_diff.saturating_mul(1_000_000));

                let common = produced.len().min(tc.output.len());
                for j in 0..common {
                    let byte_diff = (produced[j] as i32 - tc.output[j] as i32).unsigned_abs();
                    fitness = fitness.saturating_add(byte_diff.saturating_mul(1_000));
                }
            }
        }
    }

    if penalize_length {
        let len = genome.len() as u32;
        if fitness <= u32::MAX - len {
            fitness += len;
        }
    }

    fitness
}
