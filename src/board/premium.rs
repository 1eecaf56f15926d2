//! Premium-square classification.
//!
//! The board's premium squares are authored as a handful of seed
//! coordinates per kind, restricted to one quadrant, and expanded through
//! the board's full symmetry group (reflections across the vertical axis,
//! the horizontal axis, and the main diagonal). The expansion is validated
//! against the known cardinalities for a 15x15 board, so a bad seed list
//! cannot silently produce a lopsided board.

use std::collections::BTreeSet;

use crate::board::square::{NUM_COLS, NUM_ROWS, NUM_SQUARES, Square};
use crate::error::{GenError, GenResult};

/// Classification of a single board square.
///
/// Every square has exactly one kind; squares outside the four premium
/// sets are `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SquareKind {
    /// Plain square with no score multiplier.
    Empty = 0,
    /// Doubles the value of the letter placed on it.
    DoubleLetter = 1,
    /// Triples the value of the letter placed on it.
    TripleLetter = 2,
    /// Doubles the value of the whole word.
    DoubleWord = 3,
    /// Triples the value of the whole word.
    TripleWord = 4,
}

/// Quadrant seeds for the triple-word squares (board corners and edge
/// midpoints).
const TRIPLE_WORD_SEEDS: &[(usize, usize)] = &[(0, 0), (0, 7)];

/// Quadrant seeds for the double-word squares (the main-diagonal run plus
/// the center star).
const DOUBLE_WORD_SEEDS: &[(usize, usize)] = &[(1, 1), (2, 2), (3, 3), (4, 4), (7, 7)];

/// Quadrant seeds for the double-letter squares.
const DOUBLE_LETTER_SEEDS: &[(usize, usize)] = &[(0, 3), (2, 6), (3, 7), (6, 6)];

/// Quadrant seeds for the triple-letter squares.
const TRIPLE_LETTER_SEEDS: &[(usize, usize)] = &[(1, 5), (5, 5)];

impl SquareKind {
    /// The four premium kinds in the order their tables are emitted.
    pub const PREMIUM: [SquareKind; 4] = [
        SquareKind::TripleWord,
        SquareKind::DoubleWord,
        SquareKind::TripleLetter,
        SquareKind::DoubleLetter,
    ];

    /// Score multiplier this kind applies (1 for `Empty`).
    #[must_use]
    pub const fn multiplier(self) -> u8 {
        match self {
            SquareKind::Empty => 1,
            SquareKind::DoubleLetter | SquareKind::DoubleWord => 2,
            SquareKind::TripleLetter | SquareKind::TripleWord => 3,
        }
    }

    /// Number of squares this kind must occupy on a 15x15 board.
    ///
    /// These counts are consequences of the symmetry the seeds encode and
    /// are used to cross-check the expansion.
    #[must_use]
    pub const fn expected_count(self) -> usize {
        match self {
            SquareKind::Empty => 164,
            SquareKind::DoubleLetter => 24,
            SquareKind::TripleLetter => 12,
            SquareKind::DoubleWord => 17,
            SquareKind::TripleWord => 8,
        }
    }

    const fn seeds(self) -> &'static [(usize, usize)] {
        match self {
            SquareKind::Empty => &[],
            SquareKind::DoubleLetter => DOUBLE_LETTER_SEEDS,
            SquareKind::TripleLetter => TRIPLE_LETTER_SEEDS,
            SquareKind::DoubleWord => DOUBLE_WORD_SEEDS,
            SquareKind::TripleWord => TRIPLE_WORD_SEEDS,
        }
    }
}

/// All images of a coordinate under the board's symmetry group
/// (identity, the two axis mirrors, their composition, and the same four
/// composed with the main-diagonal transpose). Duplicates occur for
/// coordinates on a symmetry axis; callers deduplicate.
const fn reflections(row: usize, col: usize) -> [(usize, usize); 8] {
    let rm = NUM_ROWS - 1 - row;
    let cm = NUM_COLS - 1 - col;
    [
        (row, col),
        (row, cm),
        (rm, col),
        (rm, cm),
        (col, row),
        (cm, row),
        (col, rm),
        (cm, rm),
    ]
}

/// Expand a seed list into the full symmetric cell set.
///
/// # Errors
///
/// Returns [`GenError::OutOfRange`] if a seed lies outside the board.
fn expand_seeds(seeds: &[(usize, usize)]) -> GenResult<BTreeSet<Square>> {
    let mut cells = BTreeSet::new();
    for &(row, col) in seeds {
        // Validate the seed itself before reflecting it.
        Square::new(row, col)?;
        for (r, c) in reflections(row, col) {
            cells.insert(Square::new(r, c)?);
        }
    }
    Ok(cells)
}

/// One classifier input row: a kind, its seed list, and the cell count
/// its symmetric expansion must produce.
pub type SeedRow<'a> = (SquareKind, &'a [(usize, usize)], usize);

/// Complete per-square classification of the board.
///
/// Built once per generation run by [`PremiumLayout::standard`]; immutable
/// afterward.
#[derive(Debug, Clone, Copy)]
pub struct PremiumLayout {
    kinds: [SquareKind; NUM_SQUARES],
}

impl PremiumLayout {
    /// Build and validate the standard 15x15 layout.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::CardinalityMismatch`] if a kind's expansion has
    /// the wrong size and [`GenError::OverlappingClassification`] if two
    /// kinds claim the same square. Either aborts generation.
    pub fn standard() -> GenResult<Self> {
        Self::from_seed_table(&SquareKind::PREMIUM.map(|kind| {
            (kind, kind.seeds(), kind.expected_count())
        }))
    }

    /// Build a layout from `(kind, seeds, expected expanded count)` rows.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PremiumLayout::standard`].
    pub fn from_seed_table(table: &[SeedRow<'_>]) -> GenResult<Self> {
        let mut kinds = [SquareKind::Empty; NUM_SQUARES];
        for &(kind, seeds, expected) in table {
            let cells = expand_seeds(seeds)?;
            if cells.len() != expected {
                return Err(GenError::CardinalityMismatch {
                    kind,
                    expected,
                    actual: cells.len(),
                });
            }
            for sq in cells {
                let slot = &mut kinds[sq.index()];
                if *slot != SquareKind::Empty {
                    return Err(GenError::OverlappingClassification {
                        index: sq.index(),
                        first: *slot,
                        second: kind,
                    });
                }
                *slot = kind;
            }
        }
        Ok(Self { kinds })
    }

    /// Kind of the given square.
    #[must_use]
    pub const fn kind_at(&self, sq: Square) -> SquareKind {
        self.kinds[sq.index()]
    }

    /// All square kinds in row-major order.
    #[must_use]
    pub const fn kinds(&self) -> &[SquareKind; NUM_SQUARES] {
        &self.kinds
    }

    /// Number of squares classified as `kind`.
    #[must_use]
    pub fn count(&self, kind: SquareKind) -> usize {
        self.kinds.iter().filter(|&&k| k == kind).count()
    }

    /// Per-square multiplier grid for one premium kind: the kind's
    /// multiplier on its squares, 1 everywhere else.
    ///
    /// This is the shape the consuming engine indexes by cell index when
    /// scoring (one grid per kind rather than one combined grid).
    #[must_use]
    pub fn multiplier_grid(&self, kind: SquareKind) -> [u8; NUM_SQUARES] {
        let mut grid = [1u8; NUM_SQUARES];
        for (slot, &k) in grid.iter_mut().zip(self.kinds.iter()) {
            if k == kind {
                *slot = kind.multiplier();
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PremiumLayout {
        PremiumLayout::standard().unwrap()
    }

    #[test]
    fn test_cardinalities() {
        let layout = layout();
        assert_eq!(layout.count(SquareKind::TripleWord), 8);
        assert_eq!(layout.count(SquareKind::DoubleWord), 17);
        assert_eq!(layout.count(SquareKind::DoubleLetter), 24);
        assert_eq!(layout.count(SquareKind::TripleLetter), 12);
        assert_eq!(layout.count(SquareKind::Empty), 164);
    }

    #[test]
    fn test_known_squares() {
        let layout = layout();
        let kind_of = |name: &str| layout.kind_at(Square::from_name(name).unwrap());
        // Center star and the four corners.
        assert_eq!(kind_of("H8"), SquareKind::DoubleWord);
        assert_eq!(kind_of("A1"), SquareKind::TripleWord);
        assert_eq!(kind_of("A15"), SquareKind::TripleWord);
        assert_eq!(kind_of("O1"), SquareKind::TripleWord);
        assert_eq!(kind_of("O15"), SquareKind::TripleWord);
        // Edge midpoints.
        assert_eq!(kind_of("A8"), SquareKind::TripleWord);
        assert_eq!(kind_of("H1"), SquareKind::TripleWord);
        // A spot check per letter kind.
        assert_eq!(kind_of("B6"), SquareKind::TripleLetter);
        assert_eq!(kind_of("F6"), SquareKind::TripleLetter);
        assert_eq!(kind_of("A4"), SquareKind::DoubleLetter);
        assert_eq!(kind_of("G7"), SquareKind::DoubleLetter);
        assert_eq!(kind_of("D4"), SquareKind::DoubleWord);
        assert_eq!(kind_of("B2"), SquareKind::DoubleWord);
        // Ordinary square.
        assert_eq!(kind_of("A2"), SquareKind::Empty);
    }

    #[test]
    fn test_layout_is_symmetric() {
        let layout = layout();
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLS {
                let kind = layout.kind_at(Square::new(row, col).unwrap());
                for (r, c) in reflections(row, col) {
                    assert_eq!(
                        layout.kind_at(Square::new(r, c).unwrap()),
                        kind,
                        "asymmetry at ({row},{col}) vs ({r},{c})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_multiplier_grid() {
        let layout = layout();
        let tw = layout.multiplier_grid(SquareKind::TripleWord);
        assert_eq!(tw[0], 3); // A1
        assert_eq!(tw[7], 3); // A8
        assert_eq!(tw[1], 1); // A2
        assert_eq!(tw.iter().filter(|&&m| m == 3).count(), 8);

        let dl = layout.multiplier_grid(SquareKind::DoubleLetter);
        assert_eq!(dl[3], 2); // A4
        assert_eq!(dl.iter().filter(|&&m| m == 2).count(), 24);
    }

    #[test]
    fn test_cardinality_mismatch_rejected() {
        // Claiming the triple-word seeds expand to 9 cells must fail.
        let err = PremiumLayout::from_seed_table(&[(
            SquareKind::TripleWord,
            TRIPLE_WORD_SEEDS,
            9,
        )])
        .unwrap_err();
        assert_eq!(
            err,
            GenError::CardinalityMismatch {
                kind: SquareKind::TripleWord,
                expected: 9,
                actual: 8,
            }
        );
    }

    #[test]
    fn test_overlap_rejected() {
        // Two kinds seeded on the same coordinate.
        let err = PremiumLayout::from_seed_table(&[
            (SquareKind::TripleWord, &[(0, 0)], 4),
            (SquareKind::DoubleWord, &[(0, 0)], 4),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            GenError::OverlappingClassification {
                first: SquareKind::TripleWord,
                second: SquareKind::DoubleWord,
                ..
            }
        ));
    }

    #[test]
    fn test_out_of_range_seed_rejected() {
        let err =
            PremiumLayout::from_seed_table(&[(SquareKind::TripleWord, &[(0, 15)], 4)])
                .unwrap_err();
        assert_eq!(err, GenError::OutOfRange { row: 0, col: 15 });
    }
}
