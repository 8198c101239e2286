//! TUI application state and logic

use crate::core::{Code, Feedback, Rules};
use crate::game::Tracker;
use crate::output::formatters::feedback_to_pegs;
use crate::solver::Solver;
use crate::solver::minimax::partition_counts;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest game tracked individually in the statistics
pub const MAX_TRACKED_TURNS: usize = 10;

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub tracker: Tracker<'a>,
    /// Worst case of each played guess, parallel to the tracker history
    pub worst_cases: Vec<usize>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualCode,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub guess: Code,
    pub worst_case: usize,
    pub expected_remaining: f64,
    pub partitions: usize,
    /// `false` when the user typed the code in
    pub suggested: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Games won per guess count; the last slot collects longer games
    pub turn_distribution: [usize; MAX_TRACKED_TURNS + 1],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(solver: Solver<'a>) -> Self {
        let tracker = Tracker::new(solver.universe());
        let rules = solver.rules();

        Self {
            solver,
            tracker,
            worst_cases: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!("Welcome! Playing {rules}. I'll suggest minimax guesses."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback as '2,1' or pegs 'BBW-' (B exact, W partial)"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_code: String::new(),
        }
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.solver.rules()
    }

    pub fn compute_suggestion(&mut self) {
        match self
            .solver
            .next_guess(self.tracker.candidates(), self.tracker.turns())
        {
            Some(selection) => {
                let mut info = self.describe(selection.guess);
                info.suggested = true;
                self.current_guess = Some(info);
            }
            None => {
                self.current_guess = None;
                self.add_message("No candidates remaining!", MessageStyle::Error);
            }
        }
    }

    /// Partition statistics of a guess against the live candidates
    #[must_use]
    pub fn describe(&self, guess: Code) -> GuessInfo {
        let candidates = self.tracker.candidates();
        let partitions = partition_counts(&guess, candidates);
        let worst_case = partitions.values().copied().max().unwrap_or(0);
        let sum_of_squares: usize = partitions.values().map(|&n| n * n).sum();

        GuessInfo {
            guess,
            worst_case,
            expected_remaining: sum_of_squares as f64 / candidates.len().max(1) as f64,
            partitions: partitions.len(),
            suggested: false,
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let rules = self.rules();
        let feedback = match Feedback::parse(input, rules) {
            Ok(feedback) => feedback,
            Err(err) => {
                self.add_message(&format!("{err}. Use '2,1' or 'BBW-'"), MessageStyle::Error);
                return;
            }
        };

        let Some(info) = self.current_guess.clone() else {
            return;
        };

        match self.tracker.apply(info.guess, feedback) {
            Ok(remaining) => {
                self.worst_cases.push(info.worst_case);
                self.input_buffer.clear();

                if feedback.is_win(rules) {
                    self.record_win();
                } else {
                    self.compute_suggestion();
                    let message = if remaining == 1 {
                        "One candidate left: play it to win".to_string()
                    } else {
                        format!(
                            "{} {}: {remaining} candidates remaining",
                            info.guess,
                            feedback_to_pegs(feedback, rules)
                        )
                    };
                    self.add_message(&message, MessageStyle::Info);
                }
            }
            Err(err) => {
                self.add_message(&format!("{err}. Press 'u' to undo."), MessageStyle::Error);
            }
        }
    }

    fn record_win(&mut self) {
        let turns = self.tracker.turns();
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        self.stats.turn_distribution[turns.min(MAX_TRACKED_TURNS)] += 1;

        self.input_mode = InputMode::WinCelebration;

        let celebration = match turns {
            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
            2..=3 => "🔥 MAGNIFICENT! 🔥",
            4 => "✨ SPLENDID! Four guesses! ✨",
            5 => "👏 GREAT JOB! Five guesses! 👏",
            _ => "🎉 SOLVED! 🎉",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.tracker.reset();
        self.worst_cases.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! Computing the opening guess.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(turn) = self.tracker.undo() {
            self.worst_cases.pop();
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message(
                &format!(
                    "Undid {} {}",
                    turn.guess,
                    feedback_to_pegs(turn.feedback, self.rules())
                ),
                MessageStyle::Info,
            );
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.tracker.remaining()
    }

    pub fn use_manual_code(&mut self) {
        let code = match Code::parse(&self.manual_code, self.rules()) {
            Ok(code) => code,
            Err(err) => {
                self.add_message(&format!("Invalid code: {err}"), MessageStyle::Error);
                return;
            }
        };

        let info = self.describe(code);

        if let Some(ref suggested) = self.current_guess
            && info.worst_case > suggested.worst_case
        {
            self.add_message(
                &format!(
                    "Note: {} leaves at most {} ({} more)",
                    suggested.guess,
                    suggested.worst_case,
                    info.worst_case - suggested.worst_case
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!("Using: {code} (worst case {})", info.worst_case),
            MessageStyle::Success,
        );
        self.current_guess = Some(info);
        self.input_mode = InputMode::Feedback;
        self.manual_code.clear();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::WinCelebration => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        KeyCode::Char('u') => app.undo_last(),
                        _ => {}
                    },
                    InputMode::Feedback => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        KeyCode::Char('u') => app.undo_last(),
                        KeyCode::Tab => {
                            app.input_mode = InputMode::ManualCode;
                            app.add_message(
                                &format!(
                                    "Enter your own code ({} pegs, digits or names)",
                                    app.rules().cells()
                                ),
                                MessageStyle::Info,
                            );
                        }
                        KeyCode::Char(c) => app.input_buffer.push(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => {
                            let input = app.input_buffer.clone();
                            app.handle_feedback(&input);
                        }
                        _ => {}
                    },
                    InputMode::ManualCode => match key.code {
                        KeyCode::Esc => {
                            app.input_mode = InputMode::Feedback;
                            app.manual_code.clear();
                            app.add_message("Cancelled manual code entry", MessageStyle::Info);
                        }
                        KeyCode::Tab => {
                            app.input_mode = InputMode::Feedback;
                            app.manual_code.clear();
                        }
                        KeyCode::Char(c) => app.manual_code.push(c),
                        KeyCode::Backspace => {
                            app.manual_code.pop();
                        }
                        KeyCode::Enter => app.use_manual_code(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
