//! Word list loading utilities
//!
//! Loads the dictionary from a file or from the embedded default list. A
//! missing file surfaces as an I/O error; the game cannot start without a
//! dictionary, so callers treat that as fatal.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a plain-text word list, one word per line
///
/// Lines are uppercased on load; entries shorter than 2 characters are
/// excluded.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use tilescore::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::new(content.lines().map(str::to_string)))
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use tilescore::wordlists::WORDS;
/// use tilescore::wordlists::loader::words_from_slice;
///
/// let dictionary = words_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::new(slice.iter().map(|&s| s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_normalizes() {
        let dictionary = words_from_slice(&["cat", "dog", "a"]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("DOG"));
    }

    #[test]
    fn load_from_file_round_trip() {
        let dir = std::env::temp_dir().join("tilescore_loader_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        fs::write(&path, "apple\nAT\nx\n\nzebra\n").unwrap();

        let dictionary = load_from_file(&path).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("APPLE"));
        assert!(dictionary.contains("AT"));
        assert!(dictionary.contains("ZEBRA"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_from_file("no/such/wordlist.txt");
        assert!(result.is_err());
    }
}
