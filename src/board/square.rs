//! Board dimensions, square coordinates, and display names.

use crate::error::{GenError, GenResult};

/// Number of rows on the board.
pub const NUM_ROWS: usize = 15;

/// Number of columns on the board.
pub const NUM_COLS: usize = 15;

/// Total number of squares on the board.
pub const NUM_SQUARES: usize = NUM_ROWS * NUM_COLS;

/// Sentinel name representing "no square".
///
/// Appended as the final entry of [`square_names`] so consumers can index
/// one past the last valid square and get a printable marker.
pub const INVALID_NAME: &str = "INVALID";

/// A validated board square, stored as its row-major linear index.
///
/// Rows are lettered `'A'..='O'` top to bottom and columns numbered `1..=15`
/// left to right for display, so square (7, 7) - the board center - prints
/// as `"H8"`. Internally everything is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Create a square from zero-based row and column.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::OutOfRange`] if either coordinate is outside
    /// the board.
    #[allow(clippy::cast_possible_truncation)] // index < 225
    pub const fn new(row: usize, col: usize) -> GenResult<Self> {
        if row < NUM_ROWS && col < NUM_COLS {
            Ok(Square((row * NUM_COLS + col) as u8))
        } else {
            Err(GenError::OutOfRange { row, col })
        }
    }

    /// Create a square from a row-major linear index.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::OutOfRange`] if the index is not in
    /// `0..NUM_SQUARES`.
    #[allow(clippy::cast_possible_truncation)] // index < 225
    pub const fn from_index(index: usize) -> GenResult<Self> {
        if index < NUM_SQUARES {
            Ok(Square(index as u8))
        } else {
            Err(GenError::OutOfRange {
                row: index / NUM_COLS,
                col: index % NUM_COLS,
            })
        }
    }

    /// Parse a display name like `"H8"` back into a square.
    ///
    /// Accepts lower-case row letters and surrounding whitespace (names in
    /// the emitted table are right-justified).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        let row_letter = chars.next()?.to_ascii_uppercase();
        if !row_letter.is_ascii_uppercase() {
            return None;
        }
        let row = (row_letter as usize).checked_sub('A' as usize)?;
        let col = chars.as_str().parse::<usize>().ok()?.checked_sub(1)?;
        Square::new(row, col).ok()
    }

    /// Row-major linear index, `row * 15 + col`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based row.
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / NUM_COLS
    }

    /// Zero-based column.
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % NUM_COLS
    }

    /// Row letter, `'A' + row`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // row < 15
    pub const fn row_letter(self) -> char {
        (b'A' + (self.row() as u8)) as char
    }

    /// Display name: row letter followed by the 1-based column number.
    #[must_use]
    pub fn name(self) -> String {
        format!("{}{}", self.row_letter(), self.col() + 1)
    }
}

/// Display name for a linear index, or the [`INVALID_NAME`] sentinel if
/// the index does not address a square.
#[must_use]
pub fn index_name(index: usize) -> String {
    match Square::from_index(index) {
        Ok(sq) => sq.name(),
        Err(_) => INVALID_NAME.to_string(),
    }
}

/// Every square name in row-major order, followed by exactly one
/// [`INVALID_NAME`] sentinel entry (length `NUM_SQUARES + 1`).
#[must_use]
pub fn square_names() -> Vec<String> {
    let mut names = Vec::with_capacity(NUM_SQUARES + 1);
    for index in 0..NUM_SQUARES {
        names.push(index_name(index));
    }
    names.push(INVALID_NAME.to_string());
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_square_name() {
        let sq = Square::new(7, 7).unwrap();
        assert_eq!(sq.name(), "H8");
        assert_eq!(sq.index(), 112);
    }

    #[test]
    fn test_corner_names() {
        assert_eq!(Square::new(0, 0).unwrap().name(), "A1");
        assert_eq!(Square::new(14, 14).unwrap().name(), "O15");
        assert_eq!(Square::new(0, 14).unwrap().name(), "A15");
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            Square::new(15, 0),
            Err(GenError::OutOfRange { row: 15, col: 0 })
        );
        assert_eq!(
            Square::new(0, 15),
            Err(GenError::OutOfRange { row: 0, col: 15 })
        );
        assert!(Square::from_index(NUM_SQUARES).is_err());
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..NUM_SQUARES {
            let sq = Square::from_index(index).unwrap();
            assert_eq!(sq.index(), index);
            assert_eq!(Square::new(sq.row(), sq.col()).unwrap(), sq);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for index in 0..NUM_SQUARES {
            let sq = Square::from_index(index).unwrap();
            assert_eq!(Square::from_name(&sq.name()), Some(sq));
        }
        assert_eq!(Square::from_name(" a1 "), Some(Square::new(0, 0).unwrap()));
        assert_eq!(Square::from_name("P1"), None);
        assert_eq!(Square::from_name("A16"), None);
        assert_eq!(Square::from_name("A0"), None);
        assert_eq!(Square::from_name(INVALID_NAME), None);
    }

    #[test]
    fn test_square_names_has_sentinel() {
        let names = square_names();
        assert_eq!(names.len(), NUM_SQUARES + 1);
        assert_eq!(names[0], "A1");
        assert_eq!(names[NUM_SQUARES - 1], "O15");
        assert_eq!(names[NUM_SQUARES], INVALID_NAME);
    }
}
