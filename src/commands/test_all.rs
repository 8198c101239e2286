//! Test all codes - exhaustive solver evaluation
//!
//! Plays the solver against every hidden code in the universe and generates statistics.

use super::solve::play_game;
use crate::core::Code;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from playing against a single hidden code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub hidden: Code,
    pub guesses: Vec<Code>,
    pub turns: usize,
    pub success: bool,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub turn_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_turns: f64,
    pub max_turns: usize,
    pub min_turns: usize,
    /// Codes needing the most turns, hardest first
    pub hardest_codes: Vec<(Code, usize)>,
    pub first_guess_used: HashMap<Code, usize>,
}

/// Run the solver on every code in sorted order (or the first `limit` of them)
///
/// # Panics
///
/// May panic if the solver and oracle disagree (see [`Session::submit_guess`](crate::game::Session::submit_guess)).
pub fn run_test_all(
    solver: &Solver,
    limit: Option<usize>,
    max_turns: usize,
    show_progress: bool,
) -> TestAllStatistics {
    let mut codes = solver.universe().codes().to_vec();
    codes.sort_unstable();
    codes.truncate(limit.unwrap_or(codes.len()));

    let pb = if show_progress {
        println!("🎯 Testing {} codes...", codes.len());
        let pb = ProgressBar::new(codes.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(codes.len());
    let mut turn_distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess_used: HashMap<Code, usize> = HashMap::new();

    let total_start = Instant::now();

    for (idx, &hidden) in codes.iter().enumerate() {
        let result = match play_game(hidden, solver, max_turns) {
            Ok(game) => CodeTestResult {
                hidden,
                guesses: game.steps.iter().map(|step| step.guess).collect(),
                turns: game.turns(),
                success: game.success,
            },
            Err(_) => CodeTestResult {
                hidden,
                guesses: Vec::new(),
                turns: 0,
                success: false,
            },
        };

        if let Some(&first) = result.guesses.first() {
            *first_guess_used.entry(first).or_insert(0) += 1;
        }
        if result.success {
            *turn_distribution.entry(result.turns).or_insert(0) += 1;
        }
        results.push(result);

        if idx % 10 == 0 {
            let avg = results.iter().map(|r| r.turns).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let total_turns: usize = solved.iter().map(|r| r.turns).sum();
    let average_turns = if solved.is_empty() {
        0.0
    } else {
        total_turns as f64 / solved.len() as f64
    };
    let max_turns_seen = solved.iter().map(|r| r.turns).max().unwrap_or(0);
    let min_turns = solved.iter().map(|r| r.turns).min().unwrap_or(0);

    let mut hardest_codes: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.turns + 1 >= max_turns_seen)
        .map(|r| (r.hidden, r.turns))
        .collect();
    hardest_codes.sort_by_key(|&(code, turns)| (std::cmp::Reverse(turns), code));
    hardest_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        turn_distribution,
        total_time,
        average_turns,
        max_turns: max_turns_seen,
        min_turns,
        hardest_codes,
        first_guess_used,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Narrowed to one:     {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Hit turn limit:      {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average turns:       {}",
        format!("{:.3}", stats.average_turns).bright_yellow().bold()
    );
    println!(
        "  Worst case:          {}",
        stats.max_turns.to_string().bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per code:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Turn Distribution".bright_cyan().bold());
    print_distribution(&stats.turn_distribution, stats.solved);

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, turns) in stats.hardest_codes.iter().take(5) {
            println!(
                "  {} {} ({turns} turns)",
                code.to_string().yellow(),
                code.colour_names().join(" ").bright_black()
            );
        }
    }

    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(Code, usize)> =
        stats.first_guess_used.iter().map(|(k, v)| (*k, *v)).collect();
    first_guesses.sort_by_key(|&(code, count)| (std::cmp::Reverse(count), code));

    for (code, count) in first_guesses.iter().take(5) {
        println!(
            "  {code}: {count} times ({:.1}%)",
            *count as f64 / total * 100.0
        );
    }
}

/// Print a bar per turn count, shared by the benchmark report
pub fn print_distribution(distribution: &HashMap<usize, usize>, solved: usize) {
    if solved == 0 {
        println!("  (no games narrowed to one candidate)");
        return;
    }

    let max_count = distribution.values().copied().max().unwrap_or(1);
    let longest = distribution.keys().copied().max().unwrap_or(0);

    for turns in 1..=longest {
        let count = distribution.get(&turns).copied().unwrap_or(0);
        let percentage = count as f64 / solved as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {turns:2} turns: {bar} {count:5} ({percentage:5.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::{SolverConfig, Universe};

    #[test]
    fn test_all_covers_every_code() {
        let universe = Universe::new(Rules::new(3, 3).unwrap());
        let solver = Solver::new(&universe, SolverConfig::default());

        let stats = run_test_all(&solver, None, 10, false);

        assert_eq!(stats.total_codes, 27);
        assert_eq!(stats.solved, 27);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.turn_distribution.values().sum::<usize>(), 27);
        assert!(stats.min_turns >= 1);
        assert!(stats.max_turns >= stats.min_turns);
    }

    #[test]
    fn test_all_respects_limit() {
        let universe = Universe::new(Rules::classic());
        let solver = Solver::new(&universe, SolverConfig::default());

        let stats = run_test_all(&solver, Some(12), 10, false);

        assert_eq!(stats.total_codes, 12);
        assert_eq!(stats.solved, 12);
    }

    #[test]
    fn every_game_uses_same_opening() {
        let universe = Universe::new(Rules::new(4, 3).unwrap());
        let solver = Solver::new(&universe, SolverConfig::default());

        let stats = run_test_all(&solver, None, 10, false);

        assert_eq!(stats.first_guess_used.len(), 1);
        assert_eq!(stats.first_guess_used.values().sum::<usize>(), 64);
    }

    #[test]
    fn hardest_codes_are_sorted() {
        let universe = Universe::new(Rules::new(4, 3).unwrap());
        let solver = Solver::new(&universe, SolverConfig::default());

        let stats = run_test_all(&solver, None, 10, false);

        assert!(!stats.hardest_codes.is_empty());
        assert_eq!(stats.hardest_codes[0].1, stats.max_turns);
        for pair in stats.hardest_codes.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn turn_limit_counts_failures() {
        let universe = Universe::new(Rules::classic());
        let solver = Solver::new(&universe, SolverConfig::default());

        // 0011 is the opening and the only code narrowed in a single turn
        let stats = run_test_all(&solver, Some(20), 1, false);

        assert_eq!(stats.total_codes, 20);
        assert_eq!(stats.solved + stats.failed, 20);
        assert!(stats.failed >= 19);
    }
}
