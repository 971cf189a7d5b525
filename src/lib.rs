//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Library: genetic synthesis of Brainfuck programs from test cases.
//

pub mod arena;
pub mod config;
pub mod crossover;
pub mod driver;
pub mod error;
pub mod fitness;
pub mod format;
pub mod genome;
pub mod interp;
pub mod mutation;
pub mod prng;
pub mod select;

pub use config::Config;
pub use driver::{Driver, Progress, RunSummary, Stage};
pub use error::{Result, SynthError};
pub use genome::TestCase;
