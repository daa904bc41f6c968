//! Placement scoring command
//!
//! Scores a set of `LETTER@row,col` placement specs from the command line.

use crate::core::{BOARD_SIZE, Letter, Placement, classify};
use crate::scoring::{ScoreBreakdown, score_breakdown};

/// Result of scoring a set of placement specs
pub struct ScoreReport {
    pub placements: Vec<Placement>,
    pub breakdown: ScoreBreakdown,
}

/// Parse a single `LETTER@row,col` spec, e.g. `Q@7,7`
///
/// # Errors
///
/// Returns a message naming the offending spec if the letter, separator, or
/// coordinates are invalid.
pub fn parse_placement(spec: &str) -> Result<Placement, String> {
    let (letter_text, coords) = spec
        .split_once('@')
        .ok_or_else(|| format!("'{spec}': expected LETTER@row,col"))?;

    let mut chars = letter_text.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => Letter::new(c).map_err(|e| format!("'{spec}': {e}"))?,
        _ => return Err(format!("'{spec}': expected a single letter before '@'")),
    };

    let (row_text, col_text) = coords
        .split_once(',')
        .ok_or_else(|| format!("'{spec}': expected row,col after '@'"))?;
    let row: usize = row_text
        .trim()
        .parse()
        .map_err(|_| format!("'{spec}': invalid row '{row_text}'"))?;
    let col: usize = col_text
        .trim()
        .parse()
        .map_err(|_| format!("'{spec}': invalid column '{col_text}'"))?;

    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(format!(
            "'{spec}': coordinates must be 0..{BOARD_SIZE}"
        ));
    }

    Ok(Placement { letter, row, col })
}

/// Parse and score a list of placement specs
///
/// # Errors
///
/// Returns the first parse error encountered.
pub fn score_specs(specs: &[String]) -> Result<ScoreReport, String> {
    let placements = specs
        .iter()
        .map(|spec| parse_placement(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let breakdown = score_breakdown(&placements);
    Ok(ScoreReport {
        placements,
        breakdown,
    })
}

impl ScoreReport {
    /// Bonus label for each placement, for display
    #[must_use]
    pub fn bonus_labels(&self) -> Vec<&'static str> {
        self.placements
            .iter()
            .map(|p| crate::output::formatters::bonus_code(classify(p.row, p.col)))
            .collect()
    }
}
