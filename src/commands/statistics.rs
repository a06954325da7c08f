//! Move count statistics

use std::collections::BTreeMap;

/// Summary of the move counts of a run
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub games: usize,
    pub mean: f64,
    /// Population standard deviation
    pub stdev: f64,
    pub min_moves: usize,
    pub max_moves: usize,
    /// Number of games per move count
    pub distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Summarize a collection of move counts
    ///
    /// Returns `None` for an empty collection.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::commands::Statistics;
    ///
    /// let stats = Statistics::from_move_counts(&[1, 2, 3, 4]).unwrap();
    /// assert!((stats.mean - 2.5).abs() < 1e-12);
    /// assert!((stats.stdev - 1.25_f64.sqrt()).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_move_counts(move_counts: &[usize]) -> Option<Self> {
        let min_moves = *move_counts.iter().min()?;
        let max_moves = *move_counts.iter().max()?;

        let games = move_counts.len();
        let mean = move_counts.iter().sum::<usize>() as f64 / games as f64;
        let variance = move_counts
            .iter()
            .map(|&count| (count as f64 - mean).powi(2))
            .sum::<f64>()
            / games as f64;

        let mut distribution = BTreeMap::new();
        for &count in move_counts {
            *distribution.entry(count).or_insert(0) += 1;
        }

        Some(Self {
            games,
            mean,
            stdev: variance.sqrt(),
            min_moves,
            max_moves,
            distribution,
        })
    }
}
