//! Bonus-square geometry
//!
//! Static classification of every cell on the 15x15 board. The four bonus
//! sets are pairwise disjoint; every other cell is plain.

/// Kind of bonus a board cell carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BonusKind {
    #[default]
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

/// Triple-word cells (8)
const TRIPLE_WORD: &[(usize, usize)] = &[
    (0, 0),
    (0, 7),
    (0, 14),
    (7, 0),
    (7, 14),
    (14, 0),
    (14, 7),
    (14, 14),
];

/// Double-word cells (16), along the diagonals
const DOUBLE_WORD: &[(usize, usize)] = &[
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (13, 13),
    (12, 12),
    (11, 11),
    (10, 10),
    (1, 13),
    (2, 12),
    (3, 11),
    (4, 10),
    (13, 1),
    (12, 2),
    (11, 3),
    (10, 4),
];

/// Triple-letter cells (12)
const TRIPLE_LETTER: &[(usize, usize)] = &[
    (1, 5),
    (1, 9),
    (5, 1),
    (5, 5),
    (5, 9),
    (5, 13),
    (9, 1),
    (9, 5),
    (9, 9),
    (9, 13),
    (13, 5),
    (13, 9),
];

/// Double-letter cells (24)
const DOUBLE_LETTER: &[(usize, usize)] = &[
    (0, 3),
    (0, 11),
    (2, 6),
    (2, 8),
    (3, 0),
    (3, 7),
    (3, 14),
    (6, 2),
    (6, 6),
    (6, 8),
    (6, 12),
    (7, 3),
    (7, 11),
    (8, 2),
    (8, 6),
    (8, 8),
    (8, 12),
    (11, 0),
    (11, 7),
    (11, 14),
    (12, 6),
    (12, 8),
    (14, 3),
    (14, 11),
];

/// Classify a board cell by its bonus kind
///
/// Total over the full board; cells outside every bonus set are
/// `BonusKind::None`. Note the centre cell (7,7) is plain in this layout.
#[must_use]
pub fn classify(row: usize, col: usize) -> BonusKind {
    let pos = (row, col);
    if TRIPLE_WORD.contains(&pos) {
        BonusKind::TripleWord
    } else if DOUBLE_WORD.contains(&pos) {
        BonusKind::DoubleWord
    } else if TRIPLE_LETTER.contains(&pos) {
        BonusKind::TripleLetter
    } else if DOUBLE_LETTER.contains(&pos) {
        BonusKind::DoubleLetter
    } else {
        BonusKind::None
    }
}

impl BonusKind {
    /// Multiplier applied to the letter placed on this cell
    #[inline]
    #[must_use]
    pub const fn letter_multiplier(self) -> u32 {
        match self {
            Self::TripleLetter => 3,
            Self::DoubleLetter => 2,
            _ => 1,
        }
    }

    /// Multiplier this cell contributes to the whole word
    #[inline]
    #[must_use]
    pub const fn word_multiplier(self) -> u32 {
        match self {
            Self::TripleWord => 3,
            Self::DoubleWord => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::BOARD_SIZE;

    fn count_cells(kind: BonusKind) -> usize {
        (0..BOARD_SIZE)
            .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| classify(r, c) == kind)
            .count()
    }

    #[test]
    fn bonus_cell_counts() {
        assert_eq!(count_cells(BonusKind::TripleWord), 8);
        assert_eq!(count_cells(BonusKind::DoubleWord), 16);
        assert_eq!(count_cells(BonusKind::TripleLetter), 12);
        assert_eq!(count_cells(BonusKind::DoubleLetter), 24);
        assert_eq!(count_cells(BonusKind::None), 165);
    }

    #[test]
    fn bonus_sets_are_disjoint() {
        // classify picks exactly one kind, so it suffices that no coordinate
        // appears in two tables
        let all: Vec<(usize, usize)> = TRIPLE_WORD
            .iter()
            .chain(DOUBLE_WORD)
            .chain(TRIPLE_LETTER)
            .chain(DOUBLE_LETTER)
            .copied()
            .collect();
        let unique: std::collections::HashSet<_> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn corner_and_edge_cells() {
        assert_eq!(classify(0, 0), BonusKind::TripleWord);
        assert_eq!(classify(14, 14), BonusKind::TripleWord);
        assert_eq!(classify(0, 7), BonusKind::TripleWord);
        assert_eq!(classify(1, 1), BonusKind::DoubleWord);
        assert_eq!(classify(10, 4), BonusKind::DoubleWord);
        assert_eq!(classify(1, 5), BonusKind::TripleLetter);
        assert_eq!(classify(13, 9), BonusKind::TripleLetter);
        assert_eq!(classify(0, 3), BonusKind::DoubleLetter);
        assert_eq!(classify(14, 11), BonusKind::DoubleLetter);
    }

    #[test]
    fn centre_cell_is_plain() {
        assert_eq!(classify(7, 7), BonusKind::None);
    }

    #[test]
    fn out_of_layout_coordinates_are_plain() {
        // classify is total; anything beyond the tables is just None
        assert_eq!(classify(99, 99), BonusKind::None);
    }

    #[test]
    fn multipliers() {
        assert_eq!(BonusKind::None.letter_multiplier(), 1);
        assert_eq!(BonusKind::DoubleLetter.letter_multiplier(), 2);
        assert_eq!(BonusKind::TripleLetter.letter_multiplier(), 3);
        assert_eq!(BonusKind::DoubleWord.letter_multiplier(), 1);
        assert_eq!(BonusKind::TripleWord.letter_multiplier(), 1);

        assert_eq!(BonusKind::None.word_multiplier(), 1);
        assert_eq!(BonusKind::DoubleLetter.word_multiplier(), 1);
        assert_eq!(BonusKind::TripleLetter.word_multiplier(), 1);
        assert_eq!(BonusKind::DoubleWord.word_multiplier(), 2);
        assert_eq!(BonusKind::TripleWord.word_multiplier(), 3);
    }
}
