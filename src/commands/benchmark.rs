//! Benchmark command
//!
//! Plays many games against random hidden codes and collects turn statistics.

use super::solve::play_game;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    /// Games that hit the turn limit before narrowing to one candidate
    pub failed: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run `count` games against uniformly random hidden codes
///
/// Turn statistics only cover solved games; games still unsolved after
/// `max_turns` are counted in `failed`.
///
/// # Panics
///
/// May panic if the solver and oracle disagree (see [`Session::submit_guess`](crate::game::Session::submit_guess)).
pub fn run_benchmark<R: Rng + ?Sized>(
    solver: &Solver,
    count: usize,
    max_turns: usize,
    rng: &mut R,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_turns = 0;
    let mut solved = 0;
    let mut min_turns = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for game in 0..count {
        let hidden = solver.universe().random_code(rng);

        match play_game(hidden, solver, max_turns) {
            Ok(result) if result.success => {
                let turns = result.turns();
                solved += 1;
                total_turns += turns;
                min_turns = min_turns.min(turns);
                max_seen = max_seen.max(turns);
                *distribution.entry(turns).or_insert(0) += 1;
            }
            _ => {}
        }

        if game % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_turns as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();

    BenchmarkResult {
        total_games: count,
        solved,
        failed: count - solved,
        total_turns,
        average_turns: if solved > 0 {
            total_turns as f64 / solved as f64
        } else {
            0.0
        },
        min_turns: if solved > 0 { min_turns } else { 0 },
        max_turns: max_seen,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
