//! Display functions for command results

use super::formatters::{code_to_names, feedback_to_pegs, partition_bar};
use crate::commands::test_all::print_distribution;
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Rules;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, rules: Rules, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} {}",
        result.hidden.to_string().bright_yellow().bold(),
        format!("({})", code_to_names(&result.hidden)).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.guess,
            feedback_to_pegs(step.feedback, rules)
        );

        if verbose {
            println!("  Colours:    {}", code_to_names(&step.guess));
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {}", step.worst_case);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Narrowed to one code in {} turns ({} guesses to win)",
                result.turns(),
                result.guesses_to_win()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved within {} turns", result.turns())
                .red()
                .bold()
        );
    }
}

/// Print the result of analyzing a guess
pub fn print_analysis_result(result: &AnalysisResult, rules: Rules) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} candidates ({}):",
        result.total_candidates,
        code_to_names(&result.guess)
    );
    println!(
        "   Worst case:  {}",
        result.worst_case.to_string().bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Partitions:  {}", result.partitions.len());

    if result.is_optimal() {
        println!("   {}", "Optimal: no guess has a smaller worst case".green());
    } else {
        println!(
            "   Best guess:  {} (worst case {})",
            result.best_guess.to_string().green(),
            result.best_worst_case
        );
    }

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    for &(feedback, size) in &result.partitions {
        println!(
            "   {} {} {size:5}",
            feedback_to_pegs(feedback, rules),
            partition_bar(size, result.total_candidates, 30).green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    if result.failed > 0 {
        println!(
            "   Hit turn limit:   {}",
            result.failed.to_string().red()
        );
    }
    println!(
        "   Average turns:    {}",
        format!("{:.3}", result.average_turns)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_turns.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_turns.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    print_distribution(&result.distribution, result.solved);
}
