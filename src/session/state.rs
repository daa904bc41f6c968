//! The live game session
//!
//! All player-visible state lives here: cumulative score, board, rack, and
//! the derived display state (word in progress, its score, the ranked list
//! of formable words). Mutations are synchronous and run to completion; the
//! only randomness is the rack draw.

use super::snapshot::{Snapshot, SnapshotError};
use crate::core::{Board, Letter, Rack};
use crate::possibilities::{PossibleWord, find_possible_words};
use crate::scoring::score_placements;
use crate::wordlists::Dictionary;

/// Minimum number of placed letters for a submission to count
const MIN_WORD_LEN: usize = 2;

/// The session's logical mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Letters are being placed or removed; the word in progress updates live
    Composing,
    /// The board was just cleared and a fresh rack drawn
    Idle,
}

/// A single-player game in progress
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    score: u32,
    board: Board,
    rack: Rack,
    phase: Phase,
    current_word: String,
    current_word_score: u32,
    possible_words: Vec<PossibleWord>,
}

impl<'a> GameSession<'a> {
    /// Start a new session: score 0, empty board, freshly drawn rack
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let mut session = Self {
            dictionary,
            score: 0,
            board: Board::new(),
            rack: Rack::new(),
            phase: Phase::Idle,
            current_word: String::new(),
            current_word_score: 0,
            possible_words: Vec::new(),
        };
        session.draw_rack();
        session
    }

    /// Place typed text into a board cell
    ///
    /// Lenient input policy: multi-character text truncates to its first
    /// character, non-alphabetic text is silently discarded, case is
    /// normalized to uppercase. Returns whether a letter was placed.
    pub fn place_letter(&mut self, input: &str, row: usize, col: usize) -> bool {
        let Some(letter) = Letter::from_input(input) else {
            return false;
        };
        self.board.place(row, col, letter);
        self.phase = Phase::Composing;
        self.refresh_word_state();
        true
    }

    /// Place a rack letter into the first empty cell in row-major order
    ///
    /// The rack keeps the letter; placing does not consume it. Returns the
    /// cell used, or `None` when the slot is empty or the board is full.
    pub fn place_from_rack(&mut self, slot: usize) -> Option<(usize, usize)> {
        let letter = *self.rack.letters().get(slot)?;
        let target = {
            use crate::core::BOARD_SIZE;
            (0..BOARD_SIZE)
                .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
                .find(|&(r, c)| self.board.get(r, c).is_none())?
        };
        self.board.place(target.0, target.1, letter);
        self.phase = Phase::Composing;
        self.refresh_word_state();
        Some(target)
    }

    /// Remove the letter from a cell
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        self.board.clear(row, col);
        self.refresh_word_state();
    }

    /// Remove every letter from the board
    pub fn clear_board(&mut self) {
        self.board.clear_all();
        self.refresh_word_state();
    }

    /// Edit a rack slot with typed text
    ///
    /// Empty input removes the slot's letter; anything else follows the same
    /// lenient policy as [`Self::place_letter`]. The possibility list
    /// refreshes on every accepted edit.
    pub fn edit_rack_slot(&mut self, slot: usize, input: &str) {
        if input.trim().is_empty() {
            self.rack.remove_slot(slot);
        } else if let Some(letter) = Letter::from_input(input) {
            self.rack.set_slot(slot, letter);
        } else {
            return;
        }
        self.refresh_possibilities();
    }

    /// Submit the word in progress
    ///
    /// Requires at least two placed letters; otherwise nothing changes and
    /// `None` is returned. On success the score is added to the session
    /// total, the board clears, a fresh rack is drawn, and the gained score
    /// is returned.
    pub fn submit(&mut self) -> Option<u32> {
        let placements = self.board.placements();
        if placements.len() < MIN_WORD_LEN {
            return None;
        }

        let gained = score_placements(&placements);
        self.score += gained;
        self.board.clear_all();
        self.draw_rack();
        self.phase = Phase::Idle;
        self.refresh_word_state();
        Some(gained)
    }

    /// Replace the rack with a fresh 3-vowel, 4-consonant draw
    pub fn draw_rack(&mut self) {
        self.rack = Rack::draw(&mut rand::rng());
        self.refresh_possibilities();
    }

    /// Clear board and rack, reset the score to zero, draw a new rack
    pub fn reset(&mut self) {
        self.score = 0;
        self.board.clear_all();
        self.phase = Phase::Idle;
        self.draw_rack();
        self.refresh_word_state();
    }

    /// Capture the current state for saving
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.score, &self.board, &self.rack)
    }

    /// Replace the whole session state from a snapshot
    ///
    /// Validates the snapshot first; on any error the session is left
    /// exactly as it was.
    ///
    /// # Errors
    /// Returns the decode error for invalid cell keys, letters, or rack
    /// sizes.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let (score, board, rack) = snapshot.decode()?;

        self.score = score;
        self.board = board;
        self.rack = rack;
        self.phase = if self.board.is_empty() {
            Phase::Idle
        } else {
            Phase::Composing
        };
        self.refresh_word_state();
        self.refresh_possibilities();
        Ok(())
    }

    /// Cumulative session score
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// The board
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The rack
    #[must_use]
    pub const fn rack(&self) -> &Rack {
        &self.rack
    }

    /// Current logical mode
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The word in progress: every placed letter in row-major scan order
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Live score of the word in progress
    #[must_use]
    pub const fn current_word_score(&self) -> u32 {
        self.current_word_score
    }

    /// Ranked formable words for the current rack
    #[must_use]
    pub fn possible_words(&self) -> &[PossibleWord] {
        &self.possible_words
    }

    /// Whether any placed letter sits on a bonus cell
    #[must_use]
    pub fn bonus_in_play(&self) -> bool {
        use crate::core::{BonusKind, classify};
        self.board
            .placements()
            .iter()
            .any(|p| classify(p.row, p.col) != BonusKind::None)
    }

    fn refresh_word_state(&mut self) {
        self.current_word = self.board.word();
        self.current_word_score = score_placements(&self.board.placements());
    }

    fn refresh_possibilities(&mut self) {
        self.possible_words = find_possible_words(&self.rack, self.dictionary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn dict_of(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| (*w).to_string()))
    }

    fn restore_rack(session: &mut GameSession<'_>, letters: &str) {
        // Snapshot restore is the deterministic way to pin rack contents
        let snapshot = Snapshot {
            score: session.score(),
            board_state: BTreeMap::new(),
            rack_letters: letters.chars().map(|c| c.to_string()).collect(),
        };
        session.restore(&snapshot).unwrap();
    }

    #[test]
    fn new_session_starts_clean() {
        let dictionary = dict_of(&["AA", "AT"]);
        let session = GameSession::new(&dictionary);

        assert_eq!(session.score(), 0);
        assert!(session.board().is_empty());
        assert_eq!(session.rack().len(), 7);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn place_letter_normalizes_and_truncates() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        assert!(session.place_letter("qu", 7, 7));
        assert_eq!(session.current_word(), "Q");
        assert_eq!(session.phase(), Phase::Composing);
    }

    #[test]
    fn place_letter_rejects_invalid_input_silently() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        assert!(!session.place_letter("3", 0, 0));
        assert!(!session.place_letter("", 0, 0));
        assert!(!session.place_letter("!", 0, 0));
        assert!(session.board().is_empty());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn word_in_progress_updates_live() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        session.place_letter("C", 0, 0);
        session.place_letter("A", 0, 1);
        session.place_letter("T", 0, 2);
        assert_eq!(session.current_word(), "CAT");
        // C on TW (0,0): word x3; base 3+1+1 = 5
        assert_eq!(session.current_word_score(), 15);

        session.clear_cell(0, 1);
        assert_eq!(session.current_word(), "CT");
    }

    #[test]
    fn submit_with_one_letter_is_a_no_op() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        session.place_letter("Q", 7, 7);
        assert_eq!(session.submit(), None);

        // Nothing changed: no score, board untouched, still composing
        assert_eq!(session.score(), 0);
        assert_eq!(session.board().letter_count(), 1);
        assert_eq!(session.phase(), Phase::Composing);
    }

    #[test]
    fn submit_scores_clears_and_redraws() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        session.place_letter("A", 7, 7);
        session.place_letter("T", 7, 8);
        let gained = session.submit().unwrap();

        assert_eq!(gained, 2);
        assert_eq!(session.score(), 2);
        assert!(session.board().is_empty());
        assert_eq!(session.rack().len(), 7);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.current_word(), "");
    }

    #[test]
    fn score_only_accumulates() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        session.place_letter("A", 7, 7);
        session.place_letter("T", 7, 8);
        session.submit();

        session.place_letter("E", 6, 6);
        session.place_letter("N", 6, 7);
        session.submit();

        // (6,6) is a double-letter cell: E doubles to 2, N adds 1
        assert_eq!(session.score(), 2 + 3);
    }

    #[test]
    fn possibilities_follow_rack_edits() {
        let dictionary = dict_of(&["AA", "AT", "TA", "ZA"]);
        let mut session = GameSession::new(&dictionary);

        restore_rack(&mut session, "AAT");
        let words: Vec<&str> = session
            .possible_words()
            .iter()
            .map(|p| p.word.as_str())
            .collect();
        assert_eq!(words, vec!["AA", "AT", "TA"]);

        // Swapping a slot to Z changes what is formable
        session.edit_rack_slot(1, "Z");
        let words: Vec<&str> = session
            .possible_words()
            .iter()
            .map(|p| p.word.as_str())
            .collect();
        assert_eq!(words, vec!["ZA", "AT", "TA"]);
    }

    #[test]
    fn rack_slot_clear_shrinks_the_rack() {
        let dictionary = dict_of(&["AA"]);
        let mut session = GameSession::new(&dictionary);

        restore_rack(&mut session, "AA");
        session.edit_rack_slot(0, "");
        assert_eq!(session.rack().len(), 1);
        assert!(session.possible_words().is_empty());
    }

    #[test]
    fn place_from_rack_uses_first_empty_cell() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);
        restore_rack(&mut session, "QA");

        assert_eq!(session.place_from_rack(0), Some((0, 0)));
        assert_eq!(session.place_from_rack(1), Some((0, 1)));
        assert_eq!(session.current_word(), "QA");

        // Rack letters are not consumed by placement
        assert_eq!(session.rack().len(), 2);

        // Empty slot yields nothing
        assert_eq!(session.place_from_rack(5), None);
    }

    #[test]
    fn reset_returns_to_a_fresh_game() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        session.place_letter("A", 0, 1);
        session.place_letter("T", 0, 2);
        session.submit();
        assert!(session.score() > 0);

        session.reset();
        assert_eq!(session.score(), 0);
        assert!(session.board().is_empty());
        assert_eq!(session.rack().len(), 7);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn snapshot_round_trip_restores_identical_state() {
        let dictionary = dict_of(&["AA"]);
        let mut session = GameSession::new(&dictionary);

        session.place_letter("A", 7, 7);
        session.place_letter("T", 7, 8);
        session.submit();
        session.place_letter("Z", 3, 3);
        let saved = session.snapshot();

        let mut other = GameSession::new(&dictionary);
        other.restore(&saved).unwrap();

        assert_eq!(other.score(), session.score());
        assert_eq!(other.board(), session.board());
        assert_eq!(other.rack(), session.rack());
        assert_eq!(other.snapshot().to_json().unwrap(), saved.to_json().unwrap());
    }

    #[test]
    fn failed_restore_leaves_session_unchanged() {
        let dictionary = dict_of(&["AA"]);
        let mut session = GameSession::new(&dictionary);
        session.place_letter("Q", 7, 7);
        let score_before = session.score();
        let board_before = session.board().clone();
        let rack_before = session.rack().clone();

        let mut bad = session.snapshot();
        bad.board_state.insert("99,99".to_string(), "A".to_string());

        assert!(session.restore(&bad).is_err());
        assert_eq!(session.score(), score_before);
        assert_eq!(session.board(), &board_before);
        assert_eq!(session.rack(), &rack_before);
    }

    #[test]
    fn restore_onto_occupied_board_enters_composing() {
        let dictionary = dict_of(&[]);
        let mut source = GameSession::new(&dictionary);
        source.place_letter("A", 1, 1);
        let saved = source.snapshot();

        let mut session = GameSession::new(&dictionary);
        session.restore(&saved).unwrap();
        assert_eq!(session.phase(), Phase::Composing);
    }

    #[test]
    fn bonus_in_play_tracks_placements() {
        let dictionary = dict_of(&[]);
        let mut session = GameSession::new(&dictionary);

        session.place_letter("A", 7, 8);
        assert!(!session.bonus_in_play());

        session.place_letter("B", 0, 0);
        assert!(session.bonus_in_play());
    }
}
