//
// bf-genetic - genetic synthesis of Brainfuck programs
//
// File description:
//   Binary: command-line front end for the synthesis engine.
//

use std::process::ExitCode;
use std::sync::atomic::Ordering;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use colored::Colorize;

use bf_genetic::config::parse_testcases;
use bf_genetic::{Config, Driver, Progress, Stage};
use bf_genetic::format::{human_count, human_size};

/// Synthesizes a Brainfuck program matching the given input/output test
/// cases, by genetic search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Fraction of each generation carried over as elites, in [0, 1]
    #[arg(short = 'e', long, default_value_t = bf_genetic::config::DEFAULT_ELITISM)]
    elitism: f64,

    /// Probability of crossover between two parents, in [0, 1]
    #[arg(short = 'c', long, default_value_t = bf_genetic::config::DEFAULT_CROSSOVER)]
    crossover: f64,

    /// Probability of mutating a freshly produced child, in [0, 1]
    #[arg(short = 'm', long, default_value_t = bf_genetic::config::DEFAULT_MUTATION)]
    mutation: f64,

    /// Number of programs in the population
    #[arg(short = 's', long, default_value_t = bf_genetic::config::DEFAULT_POPULATION_SIZE)]
    population_size: u32,

    /// Longest Brainfuck program the search may produce
    #[arg(short = 'l', long, default_value_t = bf_genetic::config::DEFAULT_MAX_PROGRAM_SIZE)]
    max_program_size: u32,

    /// Generations to spend shrinking the program once it is correct;
    /// 0 stops immediately, a negative value optimizes indefinitely
    #[arg(short = 'o', long, default_value_t = bf_genetic::config::DEFAULT_OPTIMIZATION_GENERATIONS)]
    optimization_generations: i64,

    /// PRNG seed; defaults to the current time
    #[arg(short = 'r', long)]
    seed: Option<u32>,

    /// Suppress per-generation progress output
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Test cases, each `INPUT:OUTPUT` or a bare `OUTPUT` (empty input)
    #[arg(required = true)]
    testcases: Vec<String>,
}

fn init_logger() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let level_str = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };
            out.finish(format_args!(
                "[{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                level_str,
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()
        .expect("failed to initialize logger");
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = Config::validated(
        args.elitism,
        args.crossover,
        args.mutation,
        args.population_size,
        args.max_program_size,
        args.optimization_generations,
        args.seed,
        args.quiet,
    )?;
    let testcases = parse_testcases(&args.testcases)?;

    let alloc_estimate =
        2u64 * config.population_size as u64 * (config.max_program_size as u64 + 1);
    log::info!("{} allocated", human_size(alloc_estimate));
    log::info!(
        "elitism={:.2}, crossover={:.2}, mutation={:.2}",
        config.elitism,
        config.crossover,
        config.mutation
    );
    log::info!(
        "population_size={}, max_program_size={}, optimization_generations={}",
        config.population_size,
        config.max_program_size,
        config.optimization_generations
    );

    let driver = Driver::new();
    let stop = driver.stop_handle();
    ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;

    let summary = driver.run(&config, &testcases, |p: Progress| {
        let stage = match p.stage {
            Stage::Find => 1,
            Stage::Optimize => 2,
        };
        log::info!(
            "(stage {}) gen. #{}, fitness {}, {}",
            stage,
            p.generation,
            p.fitness,
            String::from_utf8_lossy(p.program)
        );
    })?;

    let rate = if summary.elapsed.as_secs_f64() > 0.0 {
        (summary.num_bf_programs as f64 / summary.elapsed.as_secs_f64()) as u64
    } else {
        summary.num_bf_programs
    };

    log::info!("finished in {:.2?}", summary.elapsed);
    log::info!(
        "{} BF programs executed ({}/sec)",
        human_count(summary.num_bf_programs),
        human_count(rate)
    );
    log::info!("seed used: {}", summary.seed);
    println!("{}", String::from_utf8_lossy(&summary.best_program));

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logger();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
