//! Simple interactive CLI mode
//!
//! Text-based codebreaking assistant without TUI. The user plays the
//! suggested guess on a real board and types back the codemaker's feedback.

use crate::core::{Code, Feedback};
use crate::game::Tracker;
use crate::output::formatters::{code_to_names, feedback_to_pegs};
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(solver: &Solver) -> Result<(), String> {
    let rules = solver.rules();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Playing {rules}. I'll suggest minimax guesses.");
    println!("After each guess, enter the codemaker's feedback:\n");
    println!("  - Exact and partial counts, e.g. '2,1' or '21'");
    println!("  - Or pegs: B/R for exact, W for partial, - for empty (e.g. 'BBW-')");
    println!("  - Or type 'win' if the guess was right!\n");
    println!("Commands: 'use <code>' to play a different guess, 'undo', 'new', 'quit'\n");

    let mut tracker = Tracker::new(solver.universe());

    loop {
        let Some(suggestion) = solver.next_guess(tracker.candidates(), tracker.turns()) else {
            return Err("No candidates remaining".to_string());
        };
        let mut guess = suggestion.guess;
        let turn = tracker.turns() + 1;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", tracker.remaining());
        println!("────────────────────────────────────────────────────────────");

        if let Some(solution) = tracker.solution() {
            println!(
                "\n🎯 The code must be {} ({})\n",
                solution.to_string().bright_green().bold(),
                code_to_names(&solution)
            );
        } else {
            println!(
                "\n📊 Suggested guess: {} ({})",
                guess.to_string().bright_yellow().bold(),
                code_to_names(&guess)
            );
            println!(
                "   Worst case:       {} candidates\n",
                suggestion.worst_case
            );
        }

        if tracker.remaining() <= 10 {
            println!("Remaining candidates:");
            for candidate in tracker.candidates() {
                println!("  • {candidate} ({})", code_to_names(candidate));
            }
            println!();
        }

        let feedback = loop {
            let input = get_user_input("Enter feedback ('win', or command)")?;
            let lower = input.to_lowercase();

            match lower.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    tracker.reset();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if let Some(turn) = tracker.undo() {
                        println!("✓ Undid {} {}\n", turn.guess, feedback_to_pegs(turn.feedback, rules));
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => break Some(Feedback::win(rules)),
                _ => {
                    if let Some(code) = lower.strip_prefix("use ") {
                        match Code::parse(code, rules) {
                            Ok(code) => {
                                guess = code;
                                println!("Playing {guess} ({})", code_to_names(&guess));
                            }
                            Err(e) => println!("❌ {e}\n"),
                        }
                        continue;
                    }
                    match Feedback::parse(&input, rules) {
                        Ok(feedback) => break Some(feedback),
                        Err(e) => println!("❌ {e}. Use '2,1', 'BBW-' or 'win'\n"),
                    }
                }
            }
        };

        let Some(feedback) = feedback else {
            continue;
        };

        if let Err(err) = tracker.apply(guess, feedback) {
            println!("\n❌ {err}. Nothing was recorded.\n");
            continue;
        }

        if feedback.is_win(rules) {
            print_victory(&tracker);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    tracker.reset();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn print_victory(tracker: &Tracker) {
    let rules = tracker.rules();
    let turns = tracker.turns();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "         🎉  M A S T E R M I N D   S O L V E D !  🎉         "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, turn) in tracker.history().iter().enumerate() {
        println!(
            "    {}. {} {}  {} → {}",
            (i + 1).to_string().bright_black(),
            turn.guess.to_string().bright_white().bold(),
            feedback_to_pegs(turn.feedback, rules),
            turn.candidates_before,
            turn.candidates_after
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
