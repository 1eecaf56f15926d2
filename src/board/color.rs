//! Default per-square render colors.
//!
//! The engine's UI draws each square in a color keyed off its premium
//! kind; the generator emits the full 225-entry table so the UI can index
//! it directly by cell index.

use crate::board::premium::{PremiumLayout, SquareKind};
use crate::board::square::NUM_SQUARES;

/// Render-color category of a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareColor {
    /// Plain square.
    Empty,
    /// Double-letter square.
    DoubleLetter,
    /// Triple-letter square.
    TripleLetter,
    /// Double-word square.
    DoubleWord,
    /// Triple-word square.
    TripleWord,
}

impl SquareColor {
    /// The color-constant token emitted into the generated table.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            SquareColor::Empty => "EmptySquareColor",
            SquareColor::DoubleLetter => "DoubleLetterSquareColor",
            SquareColor::TripleLetter => "TripleLetterSquareColor",
            SquareColor::DoubleWord => "DoubleWordSquareColor",
            SquareColor::TripleWord => "TripleWordSquareColor",
        }
    }
}

/// Color category for one square kind.
///
/// Checked in a fixed priority order (word kinds before letter kinds).
/// The layout already guarantees each square has exactly one kind, so the
/// ordering is a safety net rather than a tie-break.
#[must_use]
pub const fn color_for(kind: SquareKind) -> SquareColor {
    match kind {
        SquareKind::DoubleWord => SquareColor::DoubleWord,
        SquareKind::TripleWord => SquareColor::TripleWord,
        SquareKind::DoubleLetter => SquareColor::DoubleLetter,
        SquareKind::TripleLetter => SquareColor::TripleLetter,
        SquareKind::Empty => SquareColor::Empty,
    }
}

/// Default color for every square in row-major order.
#[must_use]
pub fn default_square_colors(layout: &PremiumLayout) -> [SquareColor; NUM_SQUARES] {
    let mut colors = [SquareColor::Empty; NUM_SQUARES];
    for (slot, &kind) in colors.iter_mut().zip(layout.kinds().iter()) {
        *slot = color_for(kind);
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::Square;

    #[test]
    fn test_center_and_corner_colors() {
        let layout = PremiumLayout::standard().unwrap();
        let colors = default_square_colors(&layout);
        let center = Square::new(7, 7).unwrap();
        assert_eq!(colors[center.index()], SquareColor::DoubleWord);
        assert_eq!(colors[0], SquareColor::TripleWord);
        assert_eq!(colors[1], SquareColor::Empty);
    }

    #[test]
    fn test_color_matches_kind_everywhere() {
        let layout = PremiumLayout::standard().unwrap();
        let colors = default_square_colors(&layout);
        for (index, &kind) in layout.kinds().iter().enumerate() {
            assert_eq!(colors[index], color_for(kind));
        }
    }

    #[test]
    fn test_tokens() {
        assert_eq!(SquareColor::Empty.token(), "EmptySquareColor");
        assert_eq!(
            color_for(SquareKind::TripleWord).token(),
            "TripleWordSquareColor"
        );
    }
}
