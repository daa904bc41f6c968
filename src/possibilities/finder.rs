//! Formable-word enumeration over the dictionary
//!
//! A word is formable when the rack's letter counts cover the word's letter
//! counts. Board tiles are never reused and there is no blank-tile support.
//! The scan visits the whole dictionary on every query; at the 10^5-word
//! scale of a full word list this stays interactive, and the scan
//! parallelizes cleanly.

use crate::core::{Rack, value_of};
use crate::wordlists::Dictionary;
use rayon::prelude::*;

/// A dictionary word formable from the rack, with its rack-only score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PossibleWord {
    pub word: String,
    pub score: u32,
}

/// Whether `word` can be formed from the letter counts in `tally`
///
/// Expects an uppercase A-Z word; counts are consumed per occurrence, so a
/// word needing two copies of a letter requires two on the rack.
#[must_use]
pub fn is_formable(word: &str, tally: &[u8; 26]) -> bool {
    let mut remaining = *tally;
    for &b in word.as_bytes() {
        let idx = (b - b'A') as usize;
        if remaining[idx] == 0 {
            return false;
        }
        remaining[idx] -= 1;
    }
    true
}

/// Rack-only score of a word: the plain sum of its letter values
///
/// No board-position bonuses apply here; this is the pre-placement estimate
/// shown next to each possibility.
#[must_use]
pub fn rack_word_score(word: &str) -> u32 {
    word.as_bytes().iter().map(|&b| value_of(b)).sum()
}

/// Every dictionary word formable from the rack, ranked for display
///
/// Ordering is score descending, ties broken by ascending lexicographic
/// word order. Words longer than the rack are skipped before the
/// letter-count check.
#[must_use]
pub fn find_possible_words(rack: &Rack, dictionary: &Dictionary) -> Vec<PossibleWord> {
    let tally = rack.tally();
    let rack_len = rack.len();

    let mut found: Vec<PossibleWord> = dictionary
        .words()
        .par_iter()
        .filter(|word| word.len() <= rack_len && is_formable(word, &tally))
        .map(|word| PossibleWord {
            word: word.clone(),
            score: rack_word_score(word),
        })
        .collect();

    found.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn rack_of(s: &str) -> Rack {
        Rack::from_letters(s.chars().map(|c| Letter::new(c).unwrap()))
    }

    fn dict_of(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| (*w).to_string()))
    }

    #[test]
    fn formable_respects_letter_counts() {
        let tally = rack_of("AAT").tally();
        assert!(is_formable("AA", &tally));
        assert!(is_formable("AT", &tally));
        assert!(is_formable("TA", &tally));
        assert!(!is_formable("TT", &tally));

        let tally = rack_of("AT").tally();
        assert!(!is_formable("AA", &tally), "one A cannot form AA");
    }

    #[test]
    fn formable_rejects_missing_letters() {
        let tally = rack_of("CAT").tally();
        assert!(!is_formable("DOG", &tally));
        assert!(is_formable("ACT", &tally));
    }

    #[test]
    fn rack_word_score_is_plain_value_sum() {
        assert_eq!(rack_word_score("AA"), 2);
        assert_eq!(rack_word_score("QI"), 11);
        assert_eq!(rack_word_score("JAZZ"), 29);
        assert_eq!(rack_word_score(""), 0);
    }

    #[test]
    fn never_returns_words_longer_than_the_rack() {
        let dictionary = dict_of(&["AT", "TAT", "ATTEST"]);
        let results = find_possible_words(&rack_of("ATT"), &dictionary);
        assert!(results.iter().all(|p| p.word.len() <= 3));
        let words: Vec<&str> = results.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, vec!["TAT", "AT"]);
    }

    #[test]
    fn never_returns_words_needing_extra_copies() {
        let dictionary = dict_of(&["EEL", "LEE", "ELL"]);
        let results = find_possible_words(&rack_of("ELE"), &dictionary);
        let words: Vec<&str> = results.iter().map(|p| p.word.as_str()).collect();
        // ELL needs two Ls; only one is on the rack
        assert_eq!(words, vec!["EEL", "LEE"]);
    }

    #[test]
    fn ordering_is_score_desc_then_word_asc() {
        // All three words score 2; ties resolve alphabetically
        let dictionary = dict_of(&["TA", "AA", "AT"]);
        let results = find_possible_words(&rack_of("AAT"), &dictionary);
        let words: Vec<&str> = results.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, vec!["AA", "AT", "TA"]);
    }

    #[test]
    fn higher_scores_rank_first() {
        let dictionary = dict_of(&["ZA", "AE", "AX"]);
        let results = find_possible_words(&rack_of("ZAEX"), &dictionary);
        let words: Vec<&str> = results.iter().map(|p| p.word.as_str()).collect();
        // ZA = 11, AX = 9, AE = 2
        assert_eq!(words, vec!["ZA", "AX", "AE"]);
        assert_eq!(results[0].score, 11);
        assert_eq!(results[1].score, 9);
        assert_eq!(results[2].score, 2);
    }

    #[test]
    fn empty_rack_forms_nothing() {
        let dictionary = dict_of(&["AA", "AT"]);
        let results = find_possible_words(&Rack::new(), &dictionary);
        assert!(results.is_empty());
    }

    #[test]
    fn duplicate_rack_letters_enable_duplicate_words() {
        let dictionary = dict_of(&["EGG"]);
        assert!(find_possible_words(&rack_of("GGE"), &dictionary).len() == 1);
        assert!(find_possible_words(&rack_of("GE"), &dictionary).is_empty());
    }
}
