//! Board layer: coordinate system, premium classification, render colors.
//!
//! - Coordinate system: 15x15 grid, row-major cell indices, `"H8"`-style
//!   display names with an `INVALID` sentinel
//! - Premium classifier: symmetric expansion of quadrant seed lists into
//!   a total, mutually exclusive per-square classification
//! - Color tables: per-square render-color categories derived from the
//!   classification

mod color;
mod premium;
mod square;

pub use color::{SquareColor, color_for, default_square_colors};
pub use premium::{PremiumLayout, SeedRow, SquareKind};
pub use square::{
    INVALID_NAME, NUM_COLS, NUM_ROWS, NUM_SQUARES, Square, index_name, square_names,
};
