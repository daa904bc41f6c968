//! Word lists
//!
//! The dictionary the possibility finder searches, plus loading from files
//! and the embedded default list compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_normalized() {
        for &word in WORDS {
            assert!(word.len() >= 2, "'{word}' is shorter than 2 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "'{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_loads_into_a_dictionary() {
        let dictionary = loader::words_from_slice(WORDS);
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert!(dictionary.contains("AA"));
        assert!(dictionary.contains("QI"));
    }
}
