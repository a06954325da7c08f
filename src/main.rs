//! Bulls and Cows Solver - CLI
//!
//! Runs many simulated games and reports the mean and standard deviation of
//! the number of guesses needed.

use anyhow::Result;
use bulls_cows::{
    commands::{SimulationConfig, run_simulation, seeded_rng, trace_game},
    core::{CandidateSpace, Code},
    error::ConfigError,
    output::{print_distribution, print_statistics, print_strategies, print_trace},
    solver::StrategyType,
};
use clap::Parser;
use log::info;
use std::io::Write;

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and cows solver simulation by candidate elimination",
    version,
    author
)]
struct Cli {
    /// Alphabet length
    #[arg(short = 'a', long = "alen", value_name = "LEN", default_value_t = SimulationConfig::DEFAULT_ALPHABET_LEN)]
    alphabet_len: usize,

    /// Secret length
    #[arg(short = 's', long = "slen", value_name = "LEN", default_value_t = SimulationConfig::DEFAULT_SECRET_LEN)]
    secret_len: usize,

    /// Solver: random (default), middle, first, last, least-guessed, most-remaining
    #[arg(short = 'c', long = "solver", value_name = "NAME", default_value = "random")]
    solver: String,

    /// Number of secrets (default: all possible secrets)
    #[arg(short = 'n', long = "num", value_name = "NUM", conflicts_with = "secret")]
    num_secrets: Option<usize>,

    /// Parallelize games over all available cores
    #[arg(short = 'm', long = "multiprocess", conflicts_with = "secret")]
    parallel: bool,

    /// Verbose output (per-game debug logging)
    #[arg(short, long)]
    verbose: bool,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Trace a single game against this secret (e.g. 0123 or 10,4,7)
    #[arg(long, value_name = "CODE")]
    secret: Option<String>,

    /// Print the move count distribution after the summary
    #[arg(short = 'd', long, conflicts_with = "secret")]
    distribution: bool,

    /// List available solvers and exit
    #[arg(long)]
    list_solvers: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {}: {}",
                buf.timestamp(),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_solvers {
        print_strategies();
        return Ok(());
    }

    let strategy = StrategyType::from_name(&cli.solver)?;

    if let Some(secret) = &cli.secret {
        return run_trace_command(&cli, strategy, secret);
    }

    let config = SimulationConfig::new(strategy)
        .with_alphabet_len(cli.alphabet_len)
        .with_secret_len(cli.secret_len)
        .with_num_secrets(cli.num_secrets)
        .with_parallel(cli.parallel)
        .with_seed(cli.seed)
        .with_progress(!cli.verbose);

    let report = run_simulation(&config)?;

    print_statistics(&report);
    if cli.distribution {
        print_distribution(&report);
    }

    Ok(())
}

fn run_trace_command(cli: &Cli, strategy: StrategyType, secret: &str) -> Result<()> {
    let secret: Code = secret.parse().map_err(ConfigError::from)?;
    let space = CandidateSpace::new(cli.alphabet_len, cli.secret_len)?;

    info!("possible secrets: {}", space.len());
    info!("solver: {}", strategy.name());

    let result = trace_game(&strategy, &space, &secret, &mut seeded_rng(cli.seed, 0))?;
    print_trace(&result, cli.verbose);

    Ok(())
}
