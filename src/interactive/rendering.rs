//! TUI rendering with ratatui
//!
//! Visualizations for the Mastermind solver interface.

use super::app::{App, InputMode, MAX_TRACKED_TURNS, MessageStyle};
use crate::output::formatters::{code_to_names, feedback_to_pegs};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Terminal colour for each peg colour index
const PEG_COLOURS: [Color; 16] = [
    Color::Blue,
    Color::Green,
    Color::Rgb(255, 165, 0),
    Color::Magenta,
    Color::White,
    Color::Yellow,
    Color::Red,
    Color::Rgb(128, 0, 128),
    Color::Rgb(139, 69, 19),
    Color::DarkGray,
    Color::Cyan,
    Color::Gray,
    Color::LightGreen,
    Color::Rgb(0, 0, 128),
    Color::Rgb(0, 128, 128),
    Color::Rgb(255, 215, 0),
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Coloured peg glyphs for a code
fn code_spans(code: &crate::core::Code) -> Vec<Span<'static>> {
    code.pegs()
        .iter()
        .map(|&peg| {
            Span::styled(
                "● ",
                Style::default().fg(PEG_COLOURS[usize::from(peg) % PEG_COLOURS.len()]),
            )
        })
        .collect()
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "🎯 MASTERMIND SOLVER - {}",
        app.rules()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess info
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(ref info) = app.current_guess else {
        f.render_widget(Paragraph::new("No suggestion available").block(block), area);
        return;
    };

    let remaining = app.candidates_count().max(1);
    let bar_len = (info.worst_case * 18 / remaining).min(18);
    let bar = "█".repeat(bar_len) + &"░".repeat(18 - bar_len);

    let mut guess_line = vec![Span::raw(if info.suggested {
        "Suggested: "
    } else {
        "Manual:    "
    })];
    guess_line.push(Span::styled(
        format!("{} ", info.guess),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));
    guess_line.extend(code_spans(&info.guess));

    let content = vec![
        guess_line,
        vec![Span::styled(
            code_to_names(&info.guess),
            Style::default().fg(Color::DarkGray),
        )],
        vec![Span::raw(format!(
            "Worst:     [{bar}] {} of {remaining}",
            info.worst_case
        ))],
        vec![Span::raw(format!(
            "Expected:  {:.1} candidates remain",
            info.expected_remaining
        ))],
        vec![Span::raw(format!("Outcomes:  {} feedback groups", info.partitions))],
    ];

    let paragraph = Paragraph::new(content.into_iter().map(Line::from).collect::<Vec<_>>())
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.tracker.candidates();

    let content: Vec<Line> = if candidates.len() <= 12 {
        candidates
            .iter()
            .map(|candidate| {
                let mut spans = vec![Span::styled(
                    format!("  {candidate} "),
                    Style::default().fg(Color::Green),
                )];
                spans.extend(code_spans(candidate));
                Line::from(spans)
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", candidates.len())),
            Line::from(format!(
                "Universe: {} codes",
                app.solver.universe().len()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let rules = app.rules();
    let history = app.tracker.history();

    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .take(5)
        .map(|(i, turn)| {
            let worst = app.worst_cases.get(i).copied().unwrap_or(0);
            ListItem::new(format!(
                "{}: {} {} [≤{worst}] {} → {}",
                i + 1,
                turn.guess,
                feedback_to_pegs(turn.feedback, rules),
                turn.candidates_before,
                turn.candidates_after
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search space gauge
            Constraint::Min(4),         // Statistics
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solver.universe().len() as f64;
    let remaining = app.candidates_count() as f64;
    let eliminated = if total > 0.0 {
        1.0 - remaining / total
    } else {
        0.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(eliminated.clamp(0.0, 1.0))
        .label(format!("{remaining} of {total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let max = app.stats.turn_distribution.iter().copied().max().unwrap_or(0).max(1);

    let lines: Vec<Line> = app
        .stats
        .turn_distribution
        .iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &count)| count > 0)
        .map(|(turns, &count)| {
            let label = if turns == MAX_TRACKED_TURNS {
                format!("{turns}+")
            } else {
                turns.to_string()
            };
            Line::from(format!(
                "{label:>3}: {} {count}",
                "█".repeat((count * 15 / max).max(1))
            ))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guesses to Win ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CRACKED! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback ('2,1' or B=exact W=partial -=empty) | TAB for manual code "
                .to_string(),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualCode => (
            format!(
                " Enter Code to Try ({} pegs) | ESC to cancel ",
                app.rules().cells()
            ),
            app.manual_code.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let config = app.solver.config();
    let mode = Paragraph::new(format!(
        "Pool: {} | Opening: {}",
        config.pool.name(),
        config.opening.name()
    ))
    .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = Paragraph::new(format!("Games won: {}", app.stats.games_won))
        .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates = Paragraph::new(format!("Turn {}", app.tracker.turns() + 1))
        .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New | u: Undo | Enter: Submit | TAB: Manual")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
