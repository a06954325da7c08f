//! Batch simulation command
//!
//! Plays one independent game per secret and collects the move counts. The
//! secrets are split into contiguous batches which run either one after the
//! other on the calling thread or fanned out over the rayon worker pool.

use super::statistics::Statistics;
use crate::core::{CandidateSpace, Code, Response};
use crate::error::{ConfigError, Error};
use crate::solver::{Solver, SolverError, Strategy, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub alphabet_len: usize,
    pub secret_len: usize,
    pub strategy: StrategyType,
    /// Secrets to solve; `None` means one pass over the whole space
    pub num_secrets: Option<usize>,
    /// Fan batches out over the worker pool instead of running them in order
    pub parallel: bool,
    /// Number of batches the secrets are split into
    pub workers: usize,
    /// Seed for the secret shuffle and every batch generator
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulationConfig {
    pub const DEFAULT_ALPHABET_LEN: usize = 10;
    pub const DEFAULT_SECRET_LEN: usize = 4;

    /// Create a configuration with the default 10-symbol alphabet and 4-symbol secrets
    ///
    /// The worker count defaults to the size of the rayon thread pool.
    #[must_use]
    pub fn new(strategy: StrategyType) -> Self {
        Self {
            alphabet_len: Self::DEFAULT_ALPHABET_LEN,
            secret_len: Self::DEFAULT_SECRET_LEN,
            strategy,
            num_secrets: None,
            parallel: false,
            workers: rayon::current_num_threads(),
            seed: None,
            show_progress: false,
        }
    }

    #[must_use]
    pub const fn with_alphabet_len(mut self, alphabet_len: usize) -> Self {
        self.alphabet_len = alphabet_len;
        self
    }

    #[must_use]
    pub const fn with_secret_len(mut self, secret_len: usize) -> Self {
        self.secret_len = secret_len;
        self
    }

    #[must_use]
    pub const fn with_num_secrets(mut self, num_secrets: Option<usize>) -> Self {
        self.num_secrets = num_secrets;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check the configuration before any game is played
    ///
    /// # Errors
    /// Returns `ConfigError` for an invalid alphabet/secret length pair, a
    /// zero secret count or a zero worker count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        CandidateSpace::size_for(self.alphabet_len, self.secret_len)?;

        if self.num_secrets == Some(0) {
            return Err(ConfigError::NoSecrets);
        }
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }

        Ok(())
    }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub strategy: &'static str,
    pub space_size: usize,
    pub workers: usize,
    pub batches: usize,
    pub move_counts: Vec<usize>,
    pub statistics: Statistics,
    pub duration: Duration,
}

impl SimulationReport {
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        self.move_counts.len() as f64 / self.duration.as_secs_f64().max(f64::EPSILON)
    }
}

/// Play one game against `secret` and return the number of guesses used
///
/// The winning guess is counted.
///
/// # Errors
/// Returns `SolverError` if the solver runs out of candidates.
pub fn solve<S: Strategy, R: Rng + ?Sized>(
    strategy: &S,
    space: &CandidateSpace,
    secret: &Code,
    rng: &mut R,
) -> Result<usize, SolverError> {
    let mut solver = Solver::new(strategy, space);
    let mut move_count = 0;

    loop {
        move_count += 1;

        let guess = solver.get_guess(rng)?;
        let response = Response::calculate(&guess, secret);

        if response.is_solved(secret.len()) {
            debug!("solved {secret} in {move_count} moves");
            return Ok(move_count);
        }

        solver.update_response(&guess, response);
    }
}

/// Play one game per secret, in order, and return the move counts in the same order
///
/// # Errors
/// Returns the first `SolverError` raised by any game.
pub fn batch_solve<S: Strategy, R: Rng + ?Sized>(
    strategy: &S,
    space: &CandidateSpace,
    secrets: &[Code],
    rng: &mut R,
    progress: &ProgressBar,
) -> Result<Vec<usize>, SolverError> {
    secrets
        .iter()
        .map(|secret| {
            let moves = solve(strategy, space, secret, rng)?;
            progress.inc(1);
            Ok(moves)
        })
        .collect()
}

/// Shuffle the space and cycle through it until `count` secrets are drawn
#[must_use]
pub fn select_secrets<R: Rng + ?Sized>(
    space: &CandidateSpace,
    count: usize,
    rng: &mut R,
) -> Vec<Code> {
    let mut shuffled = space.codes().to_vec();
    shuffled.shuffle(rng);

    shuffled.iter().cycle().take(count).cloned().collect()
}

/// Split secrets into contiguous batches of `ceil(len / workers)` secrets
///
/// The last batch may be smaller. No batch is empty.
#[must_use]
pub fn partition(secrets: &[Code], workers: usize) -> Vec<&[Code]> {
    if secrets.is_empty() {
        return Vec::new();
    }

    let batch_size = secrets.len().div_ceil(workers.max(1));
    secrets.chunks(batch_size).collect()
}

/// Random source for one stream of a run
///
/// Stream 0 shuffles the secrets, stream `i + 1` drives batch `i`. Without a
/// seed the generator is drawn from the thread-local generator.
#[must_use]
pub fn seeded_rng(seed: Option<u64>, stream: u64) -> ChaCha8Rng {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    rng.set_stream(stream);
    rng
}

/// Run every batch with its own generator and concatenate the results in batch order
///
/// # Errors
/// Returns the first `SolverError` of any batch; no partial results are kept.
pub fn run_batches<S: Strategy + Sync>(
    strategy: &S,
    space: &CandidateSpace,
    batches: &[&[Code]],
    seed: Option<u64>,
    parallel: bool,
    progress: &ProgressBar,
) -> Result<Vec<usize>, SolverError> {
    let run = |(index, batch): (usize, &&[Code])| {
        let mut rng = seeded_rng(seed, index as u64 + 1);
        batch_solve(strategy, space, batch, &mut rng, progress)
    };

    let per_batch: Vec<Vec<usize>> = if parallel {
        batches
            .par_iter()
            .enumerate()
            .map(run)
            .collect::<Result<_, _>>()?
    } else {
        batches
            .iter()
            .enumerate()
            .map(run)
            .collect::<Result<_, _>>()?
    };

    Ok(per_batch.into_iter().flatten().collect())
}

/// Run a full simulation: build the space, draw secrets, play every game, summarize
///
/// # Errors
/// Returns `Error::Config` before any game is played if the configuration is
/// invalid, or `Error::Solver` if any game fails.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationReport, Error> {
    config.validate()?;

    let space = CandidateSpace::new(config.alphabet_len, config.secret_len)?;
    let num_secrets = config.num_secrets.unwrap_or(space.len());

    info!("alphabet length: {}", space.alphabet_len());
    info!("secret length: {}", space.secret_len());
    info!("possible secrets: {}", space.len());
    info!("secrets to solve: {num_secrets}");
    info!("solver: {}", config.strategy.name());

    let secrets = select_secrets(&space, num_secrets, &mut seeded_rng(config.seed, 0));
    let batches = partition(&secrets, config.workers);

    if config.parallel {
        info!(
            "workers: {} ({} batches)",
            config.workers,
            batches.len()
        );
    }

    let progress = progress_bar(num_secrets, config.show_progress);
    let start = Instant::now();

    let move_counts = run_batches(
        &config.strategy,
        &space,
        &batches,
        config.seed,
        config.parallel,
        &progress,
    )?;

    let duration = start.elapsed();
    progress.finish_and_clear();

    let statistics = Statistics::from_move_counts(&move_counts).ok_or(ConfigError::NoSecrets)?;

    let report = SimulationReport {
        strategy: config.strategy.name(),
        space_size: space.len(),
        workers: config.workers,
        batches: batches.len(),
        move_counts,
        statistics,
        duration,
    };

    info!(
        "solved {} secrets in {:.2}s ({:.0} games/s)",
        report.move_counts.len(),
        report.duration.as_secs_f64(),
        report.games_per_second()
    );

    Ok(report)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}")
        .map(|style| style.progress_chars("█▓▒░"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{MiddleStrategy, STRATEGIES};

    fn code(symbols: &[usize]) -> Code {
        Code::new(symbols).unwrap()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    /// Strategy that never produces a guess
    struct Broken;

    impl Strategy for Broken {
        fn select_guess<'a, R: Rng + ?Sized>(
            &self,
            _candidates: &'a [Code],
            _guessed: &[Code],
            _rng: &mut R,
        ) -> Option<&'a Code> {
            None
        }
    }

    #[test]
    fn middle_solves_its_first_guess_in_one_move() {
        let space = CandidateSpace::new(3, 2).unwrap();
        let moves = solve(&MiddleStrategy, &space, &code(&[1, 2]), &mut rng()).unwrap();
        assert_eq!(moves, 1);
    }

    #[test]
    fn middle_golden_game() {
        // (1, 2) → 0B1C leaves [(0, 1), (2, 0)]; (2, 0) → 0B1C leaves [(0, 1)]
        let space = CandidateSpace::new(3, 2).unwrap();
        let moves = solve(&MiddleStrategy, &space, &code(&[0, 1]), &mut rng()).unwrap();
        assert_eq!(moves, 3);
    }

    #[test]
    fn every_strategy_solves_every_secret_of_small_space() {
        let space = CandidateSpace::new(4, 2).unwrap();
        let mut rng = rng();

        for entry in STRATEGIES {
            let strategy = (entry.build)();
            for secret in space.codes() {
                let moves = solve(&strategy, &space, secret, &mut rng).unwrap();
                assert!(
                    (1..=space.len()).contains(&moves),
                    "{} took {moves} moves for {secret}",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn deterministic_strategies_repeat_move_counts() {
        let space = CandidateSpace::new(6, 3).unwrap();

        for name in ["middle", "first", "last"] {
            let strategy = StrategyType::from_name(name).unwrap();
            for secret in space.codes().iter().step_by(7) {
                let first = solve(&strategy, &space, secret, &mut rng()).unwrap();
                let again = solve(&strategy, &space, secret, &mut ChaCha8Rng::seed_from_u64(9))
                    .unwrap();
                assert_eq!(first, again, "{name} is not repeatable for {secret}");
            }
        }
    }

    #[test]
    fn solve_reports_solver_errors() {
        let space = CandidateSpace::new(3, 2).unwrap();
        let result = solve(&Broken, &space, &code(&[0, 1]), &mut rng());
        assert_eq!(result, Err(SolverError::NoCandidates { guesses: 0 }));
    }

    #[test]
    fn batch_solve_keeps_input_order() {
        let space = CandidateSpace::new(5, 2).unwrap();
        let secrets: Vec<Code> = space.codes().iter().rev().cloned().collect();

        let batch = batch_solve(
            &MiddleStrategy,
            &space,
            &secrets,
            &mut rng(),
            &ProgressBar::hidden(),
        )
        .unwrap();

        let individual: Vec<usize> = secrets
            .iter()
            .map(|secret| solve(&MiddleStrategy, &space, secret, &mut rng()).unwrap())
            .collect();

        assert_eq!(batch, individual);
    }

    #[test]
    fn select_secrets_covers_space_once() {
        let space = CandidateSpace::new(4, 3).unwrap();
        let mut secrets = select_secrets(&space, space.len(), &mut rng());

        secrets.sort();
        assert_eq!(secrets, space.codes());
    }

    #[test]
    fn select_secrets_cycles_when_more_than_space() {
        let space = CandidateSpace::new(3, 2).unwrap();
        let secrets = select_secrets(&space, 14, &mut rng());

        assert_eq!(secrets.len(), 14);
        // The shuffled order repeats every six secrets
        assert_eq!(secrets[..6], secrets[6..12]);
        assert_eq!(secrets[..2], secrets[12..]);
    }

    #[test]
    fn partition_into_near_equal_batches() {
        let space = CandidateSpace::new(5, 2).unwrap();
        let secrets = &space.codes()[..10];

        let sizes: Vec<usize> = partition(secrets, 4).iter().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);

        let sizes: Vec<usize> = partition(secrets, 20).iter().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![1; 10]);

        let sizes: Vec<usize> = partition(secrets, 1).iter().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![10]);

        assert!(partition(&[], 4).is_empty());
    }

    #[test]
    fn partition_preserves_order() {
        let space = CandidateSpace::new(4, 2).unwrap();
        let batches = partition(space.codes(), 5);

        let rejoined: Vec<Code> = batches.concat();
        assert_eq!(rejoined, space.codes());
    }

    #[test]
    fn seeded_rng_is_reproducible_per_stream() {
        let mut a = seeded_rng(Some(5), 3);
        let mut b = seeded_rng(Some(5), 3);
        let mut c = seeded_rng(Some(5), 4);

        let x: u64 = a.random();
        assert_eq!(x, b.random::<u64>());
        assert_ne!(x, c.random::<u64>());
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let space = CandidateSpace::new(6, 3).unwrap();
        let secrets = select_secrets(&space, 200, &mut rng());
        let batches = partition(&secrets, 4);
        let progress = ProgressBar::hidden();

        for name in ["middle", "random", "most-remaining"] {
            let strategy = StrategyType::from_name(name).unwrap();
            let sequential =
                run_batches(&strategy, &space, &batches, Some(17), false, &progress).unwrap();
            let parallel =
                run_batches(&strategy, &space, &batches, Some(17), true, &progress).unwrap();

            assert_eq!(sequential.len(), secrets.len());
            assert_eq!(sequential, parallel, "{name} differs between paths");
        }
    }

    #[test]
    fn worker_failure_aborts_run() {
        let space = CandidateSpace::new(4, 2).unwrap();
        let batches = partition(space.codes(), 3);

        let result = run_batches(&Broken, &space, &batches, None, true, &ProgressBar::hidden());
        assert!(matches!(result, Err(SolverError::NoCandidates { .. })));
    }

    #[test]
    fn run_simulation_over_whole_space() {
        let config = SimulationConfig::new(StrategyType::from_name("middle").unwrap())
            .with_alphabet_len(5)
            .with_secret_len(3)
            .with_workers(3)
            .with_parallel(true);

        let report = run_simulation(&config).unwrap();

        assert_eq!(report.strategy, "middle");
        assert_eq!(report.space_size, 60);
        assert_eq!(report.move_counts.len(), 60);
        assert_eq!(report.batches, 3);
        assert_eq!(report.statistics.games, 60);
        assert!(report.statistics.mean >= 1.0);
        assert!(report.statistics.max_moves <= 60);
    }

    #[test]
    fn run_simulation_partitions_by_configured_workers() {
        let config = SimulationConfig::new(StrategyType::from_name("first").unwrap())
            .with_alphabet_len(5)
            .with_secret_len(2)
            .with_num_secrets(Some(20))
            .with_workers(7)
            .with_parallel(true);

        let report = run_simulation(&config).unwrap();
        assert_eq!(report.workers, 7);
        assert_eq!(report.batches, 7);
        assert_eq!(report.move_counts.len(), 20);

        // Fewer secrets than workers leaves some workers idle
        let report = run_simulation(&config.with_num_secrets(Some(4))).unwrap();
        assert_eq!(report.workers, 7);
        assert_eq!(report.batches, 4);
    }

    #[test]
    fn run_simulation_is_reproducible_with_seed() {
        let config = SimulationConfig::new(StrategyType::default())
            .with_alphabet_len(6)
            .with_secret_len(3)
            .with_num_secrets(Some(150))
            .with_workers(4)
            .with_seed(Some(99));

        let first = run_simulation(&config).unwrap();
        let second = run_simulation(&config.with_parallel(true)).unwrap();

        assert_eq!(first.move_counts.len(), 150);
        assert_eq!(first.move_counts, second.move_counts);
    }

    #[test]
    fn run_simulation_rejects_bad_config() {
        let base = SimulationConfig::new(StrategyType::default());

        assert!(matches!(
            run_simulation(&base.with_secret_len(11)),
            Err(Error::Config(ConfigError::SecretLongerThanAlphabet { .. }))
        ));
        assert!(matches!(
            run_simulation(&base.with_secret_len(0)),
            Err(Error::Config(ConfigError::SecretTooShort))
        ));
        assert!(matches!(
            run_simulation(&base.with_num_secrets(Some(0))),
            Err(Error::Config(ConfigError::NoSecrets))
        ));
        assert!(matches!(
            run_simulation(&base.with_workers(0)),
            Err(Error::Config(ConfigError::NoWorkers))
        ));
    }

    #[test]
    fn config_defaults() {
        let config = SimulationConfig::new(StrategyType::default());

        assert_eq!(config.alphabet_len, 10);
        assert_eq!(config.secret_len, 4);
        assert_eq!(config.num_secrets, None);
        assert!(!config.parallel);
        assert!(config.workers >= 1);
        assert!(config.validate().is_ok());
    }
}
