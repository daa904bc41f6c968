//! TUI rendering with ratatui
//!
//! Board grid with bonus-square colors, rack and score panels, and the live
//! possibility list.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{BOARD_SIZE, BonusKind, classify};
use crate::output::formatters::bonus_code;
use crate::session::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(17),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - board on the left, info on the right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3 * BOARD_SIZE as u16 + 4),
            Constraint::Min(30),
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🀄 TILESCORE - Word Tile Game")
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

fn bonus_color(kind: BonusKind) -> Color {
    match kind {
        BonusKind::TripleWord => Color::LightRed,
        BonusKind::DoubleWord => Color::LightYellow,
        BonusKind::TripleLetter => Color::LightGreen,
        BonusKind::DoubleLetter => Color::LightBlue,
        BonusKind::None => Color::DarkGray,
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(BOARD_SIZE);

    for row in 0..BOARD_SIZE {
        let mut spans = Vec::with_capacity(BOARD_SIZE + 1);
        spans.push(Span::styled(
            format!("{row:>2} "),
            Style::default().fg(Color::DarkGray),
        ));

        for col in 0..BOARD_SIZE {
            let kind = classify(row, col);
            let is_cursor = app.cursor == (row, col);

            let (text, mut style) = match app.session.board().get(row, col) {
                Some(letter) => (
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                None => {
                    let code = bonus_code(kind);
                    let text = if code.is_empty() {
                        " · ".to_string()
                    } else {
                        format!("{code} ")
                    };
                    (text, Style::default().fg(bonus_color(kind)))
                }
            };

            if is_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Score and word in progress
            Constraint::Length(3), // Rack
            Constraint::Min(6),    // Possibilities
            Constraint::Length(7), // Messages / path prompt
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_rack(f, app, chunks[1]);
    render_possibilities(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;

    let mut content = vec![Line::from(vec![
        Span::raw("Total score: "),
        Span::styled(
            session.score().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if session.current_word().is_empty() {
        content.push(Line::from(Span::styled(
            "Place letters to form a word",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        content.push(Line::from(vec![
            Span::raw("Word: "),
            Span::styled(
                session.current_word().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        let bonus_note = if session.bonus_in_play() {
            "  (bonus squares in play)"
        } else {
            ""
        };
        content.push(Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                session.current_word_score().to_string(),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(bonus_note, Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_rack(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, letter) in app.session.rack().letters().iter().enumerate() {
        spans.push(Span::styled(
            format!("{}", i + 1),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(
            format!(":{letter}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("({}) ", letter.value()),
            Style::default().fg(Color::Cyan),
        ));
    }
    if spans.is_empty() {
        spans.push(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let rack = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Rack ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(rack, area);
}

fn render_possibilities(f: &mut Frame, app: &App, area: Rect) {
    let words = app.session.possible_words();
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = words
        .iter()
        .take(visible)
        .map(|p| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<8}", p.word),
                    Style::default().fg(Color::White),
                ),
                Span::styled(format!("{} pts", p.score), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let title = format!(" Possible words ({}) ", words.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    // The path prompt replaces the message log while active
    if app.input_mode != InputMode::Board {
        let title = if app.input_mode == InputMode::SavePath {
            " Save to (Enter confirms, Esc cancels) "
        } else {
            " Load from (Enter confirms, Esc cancels) "
        };
        let prompt = Paragraph::new(app.path_input.as_str())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(prompt, area);
        return;
    }

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let phase_text = match app.session.phase() {
        Phase::Composing => "Mode: Composing",
        Phase::Idle => "Mode: Ready",
    };
    let phase = Paragraph::new(phase_text).alignment(Alignment::Center);
    f.render_widget(phase, chunks[0]);

    let cursor_text = format!("Cursor: ({},{})", app.cursor.0, app.cursor.1);
    let cursor = Paragraph::new(cursor_text).alignment(Alignment::Center);
    f.render_widget(cursor, chunks[1]);

    let help = Paragraph::new(
        "Type letters | 1-7: rack tile | Enter: submit | Bksp: clear | ^S save ^O load ^N new ^X wipe | Esc quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
