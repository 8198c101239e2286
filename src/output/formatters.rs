//! Formatting utilities for terminal output

use crate::core::{Code, Feedback, Rules};

/// Format feedback as key pegs: ● exact, ○ partial, · empty
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback, rules: Rules) -> String {
    let exact = usize::from(feedback.exact);
    let partial = usize::from(feedback.partial);
    let empty = rules.cells().saturating_sub(exact + partial);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(empty))
}

/// Colour names of a code, space separated
#[must_use]
pub fn code_to_names(code: &Code) -> String {
    code.colour_names().join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the candidate set a partition keeps
#[must_use]
pub fn partition_bar(size: usize, total: usize, width: usize) -> String {
    create_progress_bar(size as f64, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_mixed_feedback() {
        let pegs = feedback_to_pegs(Feedback::new(2, 1), Rules::classic());
        assert_eq!(pegs, "●●○·");
    }

    #[test]
    fn pegs_for_win_and_miss() {
        let rules = Rules::classic();
        assert_eq!(feedback_to_pegs(Feedback::win(rules), rules), "●●●●");
        assert_eq!(feedback_to_pegs(Feedback::new(0, 0), rules), "····");
    }

    #[test]
    fn names_for_code() {
        let code = Code::new(&[1, 2, 3, 4], Rules::classic()).unwrap();
        assert_eq!(code_to_names(&code), "green orange pink white");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = partition_bar(648, 1296, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
