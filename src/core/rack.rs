//! The player's letter rack
//!
//! Holds up to seven letters. Draws are independent uniform samples, not a
//! depleting tile bag, so duplicates beyond physical tile counts can occur.

use super::letter::Letter;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Maximum number of letters on the rack
pub const RACK_SIZE: usize = 7;

/// Vowels drawn for the first three rack slots
const VOWELS: &[u8] = b"AEIOU";

/// Consonants drawn for the remaining four slots
const CONSONANTS: &[u8] = b"BCDFGHJKLMNPQRSTVWXYZ";

/// An ordered sequence of 0-7 letters available to place
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    letters: Vec<Letter>,
}

impl Rack {
    /// Create an empty rack
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Create a rack from existing letters, keeping at most [`RACK_SIZE`]
    #[must_use]
    pub fn from_letters(letters: impl IntoIterator<Item = Letter>) -> Self {
        Self {
            letters: letters.into_iter().take(RACK_SIZE).collect(),
        }
    }

    /// Draw a fresh rack: 3 vowels and 4 consonants, independently and
    /// uniformly sampled, then shuffled
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters: Vec<Letter> = Vec::with_capacity(RACK_SIZE);

        for _ in 0..3 {
            // choose on a non-empty slice cannot fail
            if let Some(&b) = VOWELS.choose(rng) {
                letters.push(Letter::new(b as char).unwrap_or_else(|_| unreachable!()));
            }
        }
        for _ in 0..4 {
            if let Some(&b) = CONSONANTS.choose(rng) {
                letters.push(Letter::new(b as char).unwrap_or_else(|_| unreachable!()));
            }
        }

        letters.shuffle(rng);
        Self { letters }
    }

    /// The rack letters in display order
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Number of letters currently on the rack
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the rack holds no letters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Replace the letter in a slot; out-of-range slots are ignored
    pub fn set_slot(&mut self, slot: usize, letter: Letter) {
        if let Some(entry) = self.letters.get_mut(slot) {
            *entry = letter;
        } else if slot == self.letters.len() && slot < RACK_SIZE {
            self.letters.push(letter);
        }
    }

    /// Remove the letter in a slot, shifting later letters down
    pub fn remove_slot(&mut self, slot: usize) {
        if slot < self.letters.len() {
            self.letters.remove(slot);
        }
    }

    /// Remove every letter
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Per-letter counts over A-Z, for formability checks
    #[must_use]
    pub fn tally(&self) -> [u8; 26] {
        let mut tally = [0u8; 26];
        for letter in &self.letters {
            tally[letter.index()] += 1;
        }
        tally
    }
}
