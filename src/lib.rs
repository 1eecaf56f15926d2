// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Mktables: a deterministic board-layout and tile-table compiler.
//!
//! Given fixed rules about board geometry and letter distribution, this
//! crate derives the static lookup tables a crossword game engine
//! consumes at compile time:
//! - premium-square classification per board cell
//! - default per-square render colors
//! - tile-bag letter frequencies and point values
//! - canonical square naming and indexing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Header assembly              │
//! ├──────────────────┬──────────────────┤
//! │   Board layer    │    Tile layer    │
//! │ (squares, kinds, │ (bag, values)    │
//! │  colors)         │                  │
//! ├──────────────────┴──────────────────┤
//! │        Table emitter                │
//! └─────────────────────────────────────┘
//! ```
//!
//! Every table is validated (symmetry cardinalities, mutual exclusivity,
//! source-table completeness) before a single byte is emitted, and
//! generation is a pure function of compiled-in constants: identical
//! runs produce byte-identical output.

pub mod board;
pub mod emit;
pub mod error;
pub mod generate;
pub mod tiles;

pub use error::{GenError, GenResult, SpecTable};

// Re-export key types at crate root for convenience
pub use board::{PremiumLayout, Square, SquareColor, SquareKind};
pub use generate::{TableSummary, generate_header, summarize};
pub use tiles::{Tile, TileDistribution};
