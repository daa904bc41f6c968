//! Save/load snapshots
//!
//! A snapshot is human-readable JSON carrying the cumulative score, the
//! occupied board cells, and the rack letters. Point labels are never
//! stored; they are recomputed from the value table on restore. Decoding
//! validates everything before any session state changes, so a bad file
//! leaves the game untouched.

use crate::core::{BOARD_SIZE, Board, Letter, RACK_SIZE, Rack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Serialized session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cumulative session score
    pub score: u32,
    /// `"row,col"` key to single-letter string, one entry per occupied cell
    pub board_state: BTreeMap<String, String>,
    /// Rack letters in display order, at most 7
    pub rack_letters: Vec<String>,
}

/// Error type for snapshot save/load failures
#[derive(Debug)]
pub enum SnapshotError {
    /// Unparsable JSON or missing required fields
    Malformed(String),
    /// A `board_state` key that is not a valid `"row,col"` coordinate
    BadCellKey(String),
    /// A board or rack entry that is not a single letter in the value table
    BadLetter(String),
    /// More rack letters than the rack can hold
    RackTooLarge(usize),
    /// Filesystem failure while reading or writing
    Io(io::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(detail) => write!(f, "malformed save file: {detail}"),
            Self::BadCellKey(key) => write!(f, "invalid board cell key '{key}'"),
            Self::BadLetter(entry) => write!(f, "invalid letter entry '{entry}'"),
            Self::RackTooLarge(n) => {
                write!(f, "save file holds {n} rack letters, limit is {RACK_SIZE}")
            }
            Self::Io(e) => write!(f, "save file I/O error: {e}"),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<io::Error> for SnapshotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

impl Snapshot {
    /// Capture the parts of a session worth persisting
    #[must_use]
    pub fn capture(score: u32, board: &Board, rack: &Rack) -> Self {
        let mut board_state = BTreeMap::new();
        for placement in board.placements() {
            board_state.insert(
                format!("{},{}", placement.row, placement.col),
                placement.letter.to_string(),
            );
        }

        let rack_letters = rack.letters().iter().map(Letter::to_string).collect();

        Self {
            score,
            board_state,
            rack_letters,
        }
    }

    /// Validate and decode into fresh board and rack state
    ///
    /// This is the staging step of a load: nothing here touches live
    /// session state, so callers can commit only after it succeeds.
    ///
    /// # Errors
    /// Returns `SnapshotError` for out-of-range coordinates, entries that
    /// are not single letters, or an oversized rack.
    pub fn decode(&self) -> Result<(u32, Board, Rack), SnapshotError> {
        let mut board = Board::new();
        for (key, entry) in &self.board_state {
            let (row, col) = parse_cell_key(key)?;
            let letter = parse_letter(entry)?;
            board.place(row, col, letter);
        }

        if self.rack_letters.len() > RACK_SIZE {
            return Err(SnapshotError::RackTooLarge(self.rack_letters.len()));
        }
        let mut letters = Vec::with_capacity(self.rack_letters.len());
        for entry in &self.rack_letters {
            letters.push(parse_letter(entry)?);
        }

        Ok((self.score, board, Rack::from_letters(letters)))
    }

    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    /// Returns `SnapshotError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    /// Returns `SnapshotError::Malformed` for unparsable input or missing
    /// fields.
    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the snapshot to a file as pretty-printed JSON
    ///
    /// # Errors
    /// Returns `SnapshotError::Io` on filesystem failure.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot from a JSON file
    ///
    /// # Errors
    /// Returns `SnapshotError::Io` if the file cannot be read, or
    /// `SnapshotError::Malformed` if it does not parse.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

fn parse_cell_key(key: &str) -> Result<(usize, usize), SnapshotError> {
    let bad = || SnapshotError::BadCellKey(key.to_string());

    let (row_text, col_text) = key.split_once(',').ok_or_else(bad)?;
    let row: usize = row_text.trim().parse().map_err(|_| bad())?;
    let col: usize = col_text.trim().parse().map_err(|_| bad())?;

    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(bad());
    }
    Ok((row, col))
}

fn parse_letter(entry: &str) -> Result<Letter, SnapshotError> {
    let mut chars = entry.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            Letter::new(c).map_err(|_| SnapshotError::BadLetter(entry.to_string()))
        }
        _ => Err(SnapshotError::BadLetter(entry.to_string())),
    }
}
