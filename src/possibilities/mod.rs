//! Rack/word possibility search
//!
//! Enumerates every dictionary word formable from the rack letters, with
//! rack-only scores, ordered for display.

mod finder;

pub use finder::{PossibleWord, find_possible_words, is_formable, rack_word_score};
