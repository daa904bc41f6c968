//! TUI application state and logic

use crate::core::BOARD_SIZE;
use crate::session::{GameSession, Snapshot};
use crate::wordlists::Dictionary;
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

/// Default snapshot path offered in the save/load prompts
const DEFAULT_SAVE_PATH: &str = "tilescore_save.json";

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub cursor: (usize, usize),
    pub input_mode: InputMode,
    pub path_input: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing letters onto the board
    Board,
    /// Entering a path to save the game to
    SavePath,
    /// Entering a path to load a game from
    LoadPath,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let session = GameSession::new(dictionary);

        Self {
            session,
            cursor: (7, 7),
            input_mode: InputMode::Board,
            path_input: String::new(),
            messages: vec![
                Message {
                    text: "Type letters to place them at the cursor; arrows move it.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits (2+ letters). Digits 1-7 place rack tiles.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the last few messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let (row, col) = self.cursor;
        let row = row.saturating_add_signed(d_row).min(BOARD_SIZE - 1);
        let col = col.saturating_add_signed(d_col).min(BOARD_SIZE - 1);
        self.cursor = (row, col);
    }

    pub fn type_letter(&mut self, c: char) {
        let (row, col) = self.cursor;
        if self.session.place_letter(&c.to_string(), row, col) {
            // Step right for fluent typing, column 14 stays put
            self.move_cursor(0, 1);
        }
    }

    pub fn clear_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        self.session.clear_cell(row, col);
    }

    pub fn place_rack_slot(&mut self, slot: usize) {
        if let Some((row, col)) = self.session.place_from_rack(slot) {
            self.cursor = (row, col);
        } else {
            self.add_message(&format!("No letter in rack slot {}", slot + 1), MessageStyle::Error);
        }
    }

    pub fn submit(&mut self) {
        if let Some(gained) = self.session.submit() {
            self.add_message(
                &format!("Scored {gained} points! Total: {}", self.session.score()),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                "Need at least 2 letters on the board to submit.",
                MessageStyle::Error,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.cursor = (7, 7);
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn chosen_path(&self) -> String {
        if self.path_input.trim().is_empty() {
            DEFAULT_SAVE_PATH.to_string()
        } else {
            self.path_input.trim().to_string()
        }
    }

    pub fn save_game(&mut self) {
        let path = self.chosen_path();
        match self.session.snapshot().save_to_file(&path) {
            Ok(()) => self.add_message(&format!("Saved to {path}"), MessageStyle::Success),
            Err(e) => self.add_message(&format!("Save failed: {e}"), MessageStyle::Error),
        }
        self.path_input.clear();
        self.input_mode = InputMode::Board;
    }

    pub fn load_game(&mut self) {
        let path = self.chosen_path();
        let result =
            Snapshot::load_from_file(&path).and_then(|snapshot| self.session.restore(&snapshot));
        match result {
            Ok(()) => self.add_message(&format!("Loaded {path}"), MessageStyle::Success),
            Err(e) => self.add_message(&format!("Load failed: {e}"), MessageStyle::Error),
        }
        self.path_input.clear();
        self.input_mode = InputMode::Board;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
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
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Board => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.session.clear_board();
                        app.add_message("Board cleared.", MessageStyle::Info);
                    }
                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input_mode = InputMode::SavePath;
                    }
                    KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input_mode = InputMode::LoadPath;
                    }
                    KeyCode::Up => app.move_cursor(-1, 0),
                    KeyCode::Down => app.move_cursor(1, 0),
                    KeyCode::Left => app.move_cursor(0, -1),
                    KeyCode::Right => app.move_cursor(0, 1),
                    KeyCode::Char(c @ '1'..='7') => {
                        let slot = (c as usize) - ('1' as usize);
                        app.place_rack_slot(slot);
                    }
                    KeyCode::Char(c)
                        if c.is_ascii_alphabetic()
                            && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        app.type_letter(c);
                    }
                    KeyCode::Backspace | KeyCode::Delete => {
                        app.clear_at_cursor();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    _ => {}
                },
                InputMode::SavePath | InputMode::LoadPath => match key.code {
                    KeyCode::Esc => {
                        app.path_input.clear();
                        app.input_mode = InputMode::Board;
                    }
                    KeyCode::Char(c) => {
                        app.path_input.push(c);
                    }
                    KeyCode::Backspace => {
                        app.path_input.pop();
                    }
                    KeyCode::Enter => {
                        if app.input_mode == InputMode::SavePath {
                            app.save_game();
                        } else {
                            app.load_game();
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
