//! Display functions for command results

use super::formatters::{create_bar, format_moves, summary_lines};
use crate::commands::{SimulationReport, TraceResult};
use crate::solver::STRATEGIES;
use colored::Colorize;

/// Print mean and population standard deviation, six decimals each
pub fn print_statistics(report: &SimulationReport) {
    for line in summary_lines(&report.statistics) {
        println!("{line}");
    }
}

/// Print the move count histogram of a run
pub fn print_distribution(report: &SimulationReport) {
    let stats = &report.statistics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MOVE DISTRIBUTION:".bright_cyan().bold(),
        report.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Secrets solved:   {}", stats.games);
    println!("   Possible secrets: {}", report.space_size);
    println!(
        "   Best case:        {}",
        format_moves(stats.min_moves).green()
    );
    println!(
        "   Worst case:       {}",
        format_moves(stats.max_moves).yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", report.games_per_second());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(1);
    for (&moves, &count) in &stats.distribution {
        let pct = count as f64 / stats.games as f64 * 100.0;
        let bar = create_bar(count as f64, max_count as f64, 40);
        println!("   {moves:3}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}

/// Print every guess of a traced game
pub fn print_trace(result: &TraceResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        result.secret.to_string().bright_yellow().bold(),
        result.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let response = if step.response.is_solved(result.secret.len()) {
            step.response.to_string().green().bold()
        } else {
            step.response.to_string().normal()
        };
        println!("\nMove {}: {} {response}", i + 1, step.guess);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {}!", format_moves(result.moves()))
            .green()
            .bold()
    );
}

/// Print the registered solvers
pub fn print_strategies() {
    println!("{}", "Available solvers:".bright_cyan().bold());
    for entry in STRATEGIES {
        println!("  {:16} {}", entry.name.bright_yellow(), entry.description);
    }
}
