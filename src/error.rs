//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: library error taxonomy.
//

use thiserror::Error;

/// Fatal errors surfaced by the library to its callers.
///
/// Evaluation failures (a candidate program crashing, looping, or running
/// out of budget) are *not* represented here: they are absorbed into the
/// fitness of the offending genome by [`crate::fitness::score`] and never
/// propagate this far. See [`crate::interp::InterpretError`] for those.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("test case {index} exceeds the maximum size of {max} bytes")]
    TestCaseTooLarge { index: usize, max: usize },

    #[error("at most {max} test cases are supported, got {got}")]
    TooManyTestCases { max: usize, got: usize },

    #[error("could not breed a child program within the length bounds")]
    BreedExhausted,

    #[error("population allocation failed: {0}")]
    Allocation(String),
}

pub type Result<T> = std::result::Result<T, SynthError>;
