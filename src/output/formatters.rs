//! Formatting utilities for terminal output

use crate::core::{BOARD_SIZE, Board, BonusKind, Rack, classify};

/// Short label for a bonus kind ("TW", "DW", "TL", "DL", or empty)
#[must_use]
pub const fn bonus_code(kind: BonusKind) -> &'static str {
    match kind {
        BonusKind::TripleWord => "TW",
        BonusKind::DoubleWord => "DW",
        BonusKind::TripleLetter => "TL",
        BonusKind::DoubleLetter => "DL",
        BonusKind::None => "",
    }
}

/// Render the board as a text grid
///
/// Occupied cells show their letter; empty bonus cells show their label;
/// plain empty cells show a dot.
#[must_use]
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();

    // Column header
    out.push_str("    ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{col:>3}"));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{row:>3} "));
        for col in 0..BOARD_SIZE {
            let cell = match board.get(row, col) {
                Some(letter) => format!("  {letter}"),
                None => {
                    let code = bonus_code(classify(row, col));
                    if code.is_empty() {
                        "  .".to_string()
                    } else {
                        format!(" {code}")
                    }
                }
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out
}

/// Render the rack as numbered tiles with point values
#[must_use]
pub fn format_rack(rack: &Rack) -> String {
    if rack.is_empty() {
        return "Rack: (empty)".to_string();
    }

    let tiles: Vec<String> = rack
        .letters()
        .iter()
        .enumerate()
        .map(|(i, letter)| format!("{}:{}({})", i + 1, letter, letter.value()))
        .collect();
    format!("Rack: {}", tiles.join("  "))
}
