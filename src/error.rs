//! Error types for table generation.

use std::fmt;

use crate::board::SquareKind;

/// Which source table a symbol was missing from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecTable {
    /// The letter-frequency table.
    Frequencies,
    /// The letter-point-value table.
    Values,
}

impl fmt::Display for SpecTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecTable::Frequencies => write!(f, "frequency table"),
            SpecTable::Values => write!(f, "value table"),
        }
    }
}

/// Fatal generation errors.
///
/// Every variant aborts the run before any table text is emitted; the
/// consuming engine assumes a fully validated, total table, so there is no
/// partial or recovered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    /// A coordinate outside the board.
    OutOfRange {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// A cell assigned to more than one premium kind.
    OverlappingClassification {
        /// Linear index of the offending cell.
        index: usize,
        /// Kind already assigned to the cell.
        first: SquareKind,
        /// Kind that tried to claim it as well.
        second: SquareKind,
    },
    /// An expanded premium-kind set whose size differs from the expected
    /// symmetric count.
    CardinalityMismatch {
        /// The premium kind being expanded.
        kind: SquareKind,
        /// Expected cell count for this board size.
        expected: usize,
        /// Count actually produced by the expansion.
        actual: usize,
    },
    /// A letter absent from the frequency or value source table.
    MissingSpec {
        /// The absent letter.
        letter: char,
        /// The table it was absent from.
        table: SpecTable,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::OutOfRange { row, col } => {
                write!(f, "coordinate out of range: row {row}, col {col}")
            }
            GenError::OverlappingClassification {
                index,
                first,
                second,
            } => {
                write!(
                    f,
                    "square {} classified as both {first:?} and {second:?}",
                    crate::board::index_name(*index)
                )
            }
            GenError::CardinalityMismatch {
                kind,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{kind:?} expansion produced {actual} cells, expected {expected}"
                )
            }
            GenError::MissingSpec { letter, table } => {
                write!(f, "letter '{letter}' missing from {table}")
            }
        }
    }
}

impl std::error::Error for GenError {}

/// Result type for table generation.
pub type GenResult<T> = Result<T, GenError>;
