//! The session dictionary
//!
//! An immutable, normalized set of uppercase words of length >= 2. Loaded
//! once at startup and read-only for the rest of the process.

use rustc_hash::FxHashSet;

/// A normalized word set with a stable scan order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw words
    ///
    /// Words are uppercased; entries shorter than 2 characters or containing
    /// anything but ASCII letters are dropped, and duplicates collapse.
    #[must_use]
    pub fn new(raw: impl IntoIterator<Item = String>) -> Self {
        let mut index = FxHashSet::default();
        for entry in raw {
            let word = entry.trim().to_ascii_uppercase();
            if word.len() >= 2 && word.bytes().all(|b| b.is_ascii_uppercase()) {
                index.insert(word);
            }
        }

        let mut words: Vec<String> = index.iter().cloned().collect();
        words.sort_unstable();

        Self { words, index }
    }

    /// Whether the dictionary holds `word` (expects uppercase)
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// The words in ascending lexicographic order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
