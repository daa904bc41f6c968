//! Rack possibility command
//!
//! Lists every dictionary word formable from a rack given as a letter
//! string, ranked by score.

use crate::core::{Letter, RACK_SIZE, Rack};
use crate::possibilities::{PossibleWord, find_possible_words};
use crate::wordlists::Dictionary;

/// Result of a possibility query
pub struct PossibilitiesReport {
    /// The normalized rack letters queried
    pub rack: String,
    pub words: Vec<PossibleWord>,
}

/// Find every formable word for a rack string such as `AETRSQU`
///
/// # Errors
///
/// Returns a message if the input is empty, longer than the rack, or holds
/// anything but letters.
pub fn find_for_rack(rack_input: &str, dictionary: &Dictionary) -> Result<PossibilitiesReport, String> {
    let trimmed = rack_input.trim();
    if trimmed.is_empty() {
        return Err("rack is empty; give up to 7 letters, e.g. AETRSQU".to_string());
    }
    if trimmed.chars().count() > RACK_SIZE {
        return Err(format!(
            "rack '{trimmed}' has more than {RACK_SIZE} letters"
        ));
    }

    let letters = trimmed
        .chars()
        .map(|c| Letter::new(c).map_err(|e| format!("rack '{trimmed}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let rack = Rack::from_letters(letters);
    let words = find_possible_words(&rack, dictionary);
    let normalized = rack.letters().iter().copied().map(Letter::as_char).collect();

    Ok(PossibilitiesReport {
        rack: normalized,
        words,
    })
}
