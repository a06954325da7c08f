//! Formatting utilities for terminal output

use crate::commands::Statistics;

/// Create a bar string of `width` cells, filled in proportion to `value / max`
#[must_use]
pub fn create_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a move count with its unit
#[must_use]
pub fn format_moves(moves: usize) -> String {
    if moves == 1 {
        "1 move".to_string()
    } else {
        format!("{moves} moves")
    }
}

/// The `mean:` and `stdev:` summary lines, six decimals each
#[must_use]
pub fn summary_lines(stats: &Statistics) -> [String; 2] {
    [
        format!("mean: {:.6}", stats.mean),
        format!("stdev: {:.6}", stats.stdev),
    ]
}
