//! Word-list preparation command
//!
//! Derives a clean one-word-per-line list from a richer lexicon file where
//! each line holds a word followed by its definition. Only the first
//! whitespace-delimited token of each line survives, uppercased.

use std::fs;
use std::io;
use std::path::Path;

/// Result of a preparation run
pub struct PrepareResult {
    pub lines_read: usize,
    pub words_written: usize,
}

/// The first whitespace-delimited token of a line, uppercased
#[must_use]
pub fn first_token(line: &str) -> Option<String> {
    line.split_whitespace()
        .next()
        .map(str::to_ascii_uppercase)
}

/// Convert a lexicon file into a clean word list
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read or the output cannot be
/// written.
pub fn prepare_wordlist<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> io::Result<PrepareResult> {
    let content = fs::read_to_string(input)?;

    let mut lines_read = 0;
    let mut words = Vec::new();
    for line in content.lines() {
        lines_read += 1;
        if let Some(word) = first_token(line) {
            words.push(word);
        }
    }

    let words_written = words.len();
    let mut out = words.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    fs::write(output, out)?;

    Ok(PrepareResult {
        lines_read,
        words_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_token_takes_word_before_definition() {
        assert_eq!(
            first_token("aa a type of lava [n AAS]"),
            Some("AA".to_string())
        );
        assert_eq!(first_token("  qi\tthe vital force"), Some("QI".to_string()));
    }

    #[test]
    fn first_token_skips_blank_lines() {
        assert_eq!(first_token(""), None);
        assert_eq!(first_token("   \t  "), None);
    }

    #[test]
    fn prepare_writes_one_word_per_line() {
        let dir = std::env::temp_dir().join("tilescore_prepare_test");
        fs::create_dir_all(&dir).unwrap();
        let input = dir.join("lexicon.txt");
        let output = dir.join("wordlist.txt");

        fs::write(
            &input,
            "aa a type of lava\nab an abdominal muscle\n\nzyzzyva a weevil\n",
        )
        .unwrap();

        let result = prepare_wordlist(&input, &output).unwrap();
        assert_eq!(result.lines_read, 4);
        assert_eq!(result.words_written, 3);

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(written, "AA\nAB\nZYZZYVA\n");

        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn prepare_missing_input_is_an_error() {
        let output = std::env::temp_dir().join("tilescore_prepare_unused.txt");
        assert!(prepare_wordlist("no/such/lexicon.txt", &output).is_err());
    }
}
