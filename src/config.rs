//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Module: validated run configuration.
//

use crate::error::{Result, SynthError};
use crate::genome::{TestCase, MAX_TESTCASES, MAX_TESTCASE_BYTES};

pub const DEFAULT_ELITISM: f64 = 0.5;
pub const DEFAULT_CROSSOVER: f64 = 0.5;
pub const DEFAULT_MUTATION: f64 = 1.0;
pub const DEFAULT_POPULATION_SIZE: u32 = 2048;
pub const DEFAULT_MAX_PROGRAM_SIZE: u32 = 4096;
pub const DEFAULT_OPTIMIZATION_GENERATIONS: i64 = 1000;

/// Validated parameters for one evolution run.
///
/// The only way to build one is [`Config::validated`] — both the CLI
/// binary and any library embedder go through the same checks.
#[derive(Clone, Debug)]
pub struct Config {
    pub elitism: f64,
    pub crossover: f64,
    pub mutation: f64,
    pub population_size: u32,
    pub max_program_size: u32,
    /// Number of generations to spend shrinking the best program once it
    /// reaches fitness 0. `-1` means optimize indefinitely (until
    /// cancelled), `0` means stop as soon as fitness 0 is reached.
    pub optimization_generations: i64,
    pub seed: Option<u32>,
    pub quiet: bool,
}

impl Config {
    #[allow(clippy::too_many_arguments)]
    pub fn validated(
        elitism: f64,
        crossover: f64,
        mutation: f64,
        population_size: u32,
        max_program_size: u32,
        optimization_generations: i64,
        seed: Option<u32>,
        quiet: bool,
    ) -> Result<Config> {
        let in_unit = |name: &str, v: f64| -> Result<()> {
            if !(0.0..=1.0).contains(&v) {
                return Err(SynthError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {v}"
                )));
            }
            Ok(())
        };
        in_unit("elitism", elitism)?;
        in_unit("crossover", crossover)?;
        in_unit("mutation", mutation)?;

        if population_size < 2 {
            return Err(SynthError::InvalidConfig(
                "population_size must be at least 2".to_string(),
            ));
        }
        if max_program_size < 2 {
            return Err(SynthError::InvalidConfig(
                "max_program_size must be at least 2".to_string(),
            ));
        }

        Ok(Config {
            elitism,
            crossover,
            mutation,
            population_size,
            max_program_size,
            optimization_generations,
            seed,
            quiet,
        })
    }
}

/// Parses a single `INPUT:OUTPUT` or `OUTPUT` positional test-case
/// argument. A bare `OUTPUT` (no `:`) has an empty input.
pub fn parse_testcase_arg(index: usize, arg: &str) -> Result<TestCase> {
    let (input, output) = match arg.split_once(':') {
        Some((i, o)) => (i.as_bytes().to_vec(), o.as_bytes().to_vec()),
        None => (Vec::new(), arg.as_bytes().to_vec()),
    };

    if input.len() > MAX_TESTCASE_BYTES || output.len() > MAX_TESTCASE_BYTES {
        return Err(SynthError::TestCaseTooLarge { index, max: MAX_TESTCASE_BYTES });
    }

    Ok(TestCase::new(input, output))
}

/// Parses all positional test-case arguments, enforcing the count cap.
pub fn parse_testcases(args: &[String]) -> Result<Vec<TestCase>> {
    if args.len() > MAX_TESTCASES {
        return Err(SynthError::TooManyTestCases { max: MAX_TESTCASES, got: args.len() });
    }
    args.iter()
        .enumerate()
        .map(|(i, a)| parse_testcase_arg(i, a))
        .collect()
}
