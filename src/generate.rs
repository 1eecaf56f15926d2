//! Artifact assembly.
//!
//! Builds every derived table, validates it, and renders the single
//! header text the game engine includes verbatim. The emission order is
//! part of the contract: the engine indexes every array by cell index or
//! letter index, so reordering or resizing any table breaks it.

use std::fmt::Write as _;

use serde::Serialize;

use crate::board::{
    NUM_COLS, NUM_ROWS, NUM_SQUARES, PremiumLayout, SquareKind, default_square_colors,
    square_names,
};
use crate::emit::{ArrayDecl, ArrayStyle, ColumnFormat, emit_array, emit_enum, quoted};
use crate::error::GenResult;
use crate::tiles::{LETTER_VALUE_SLOTS, Tile, TileDistribution};

/// Emitted array name for one premium kind's multiplier grid.
const fn grid_name(kind: SquareKind) -> &'static str {
    match kind {
        SquareKind::Empty => "empty_squares",
        SquareKind::DoubleLetter => "double_letter_squares",
        SquareKind::TripleLetter => "triple_letter_squares",
        SquareKind::DoubleWord => "double_word_squares",
        SquareKind::TripleWord => "triple_word_squares",
    }
}

/// Generate the complete header artifact.
///
/// Validates the premium layout and tile distribution first; any
/// violation aborts before a single byte of table text is produced.
///
/// # Errors
///
/// Propagates every validation error from the board and tile layers.
pub fn generate_header() -> GenResult<String> {
    let layout = PremiumLayout::standard()?;
    let dist = TileDistribution::standard()?;
    Ok(render_header(&layout, &dist))
}

/// Render the header from already-validated tables.
#[must_use]
pub fn render_header(layout: &PremiumLayout, dist: &TileDistribution) -> String {
    let mut out = String::new();

    out.push_str("#pragma once\n\n");
    out.push_str("// Generated file!! Run mktables to re-generate\n\n");

    // Board dimension constants.
    let _ = writeln!(out, "constexpr int NumRows = {NUM_ROWS};");
    let _ = writeln!(out, "constexpr int NumCols = {NUM_COLS};");
    let _ = writeln!(out, "constexpr int NumSquares = {NUM_SQUARES};");
    out.push('\n');

    render_premium_grids(&mut out, layout);
    render_tile_blocks(&mut out, dist);
    render_square_name_blocks(&mut out);
    render_letter_values(&mut out, dist);
    render_color_table(&mut out, layout);

    out
}

/// One multiplier grid per premium kind: the kind's multiplier on its
/// squares, 1 everywhere else.
fn render_premium_grids(out: &mut String, layout: &PremiumLayout) {
    for kind in SquareKind::PREMIUM {
        let grid = layout.multiplier_grid(kind);
        let values: Vec<String> = grid.iter().map(ToString::to_string).collect();
        let decl = ArrayDecl {
            name: grid_name(kind),
            elem_type: "int",
            style: ArrayStyle::CArray,
        };
        out.push_str(&emit_array(&decl, &values, &ColumnFormat::right(1, 16)));
        out.push('\n');
    }
}

/// Bag size, tile enumeration, bag-population statements, tile names.
fn render_tile_blocks(out: &mut String, dist: &TileDistribution) {
    let _ = writeln!(out, "constexpr int NumTotalTiles = {};", dist.total_tiles());
    let tile_variants: Vec<(String, Option<usize>)> = Tile::all()
        .map(|tile| (tile.enum_name(), Some(tile.index())))
        .collect();
    out.push_str(&emit_enum(
        "Tile",
        None,
        &tile_variants,
        &ColumnFormat::left(0, 1),
    ));
    for tile in Tile::all() {
        let _ = writeln!(
            out,
            "bag[static_cast<std::size_t>(Tile::{})] = {};",
            tile.enum_name(),
            dist.frequency(tile)
        );
    }
    let tile_names: Vec<String> = Tile::all()
        .map(|tile| quoted(&tile.symbol().to_string(), 1))
        .collect();
    let decl = ArrayDecl {
        name: "TileNames",
        elem_type: "const char* const",
        style: ArrayStyle::CArray,
    };
    out.push_str(&emit_array(&decl, &tile_names, &ColumnFormat::right(3, 1)));
    out.push('\n');
}

/// Square index enum and name table, with the INVALID sentinel last.
fn render_square_name_blocks(out: &mut String) {
    let names = square_names();
    let sq_variants: Vec<(String, Option<usize>)> = names
        .iter()
        .take(NUM_SQUARES)
        .map(|name| (name.clone(), None))
        .collect();
    out.push_str(&emit_enum(
        "Sq",
        Some("int"),
        &sq_variants,
        &ColumnFormat::right(3, 15),
    ));
    out.push('\n');
    let quoted_names: Vec<String> = names.iter().map(|name| quoted(name, 3)).collect();
    let decl = ArrayDecl {
        name: "SquareNames",
        elem_type: "const char* const",
        style: ArrayStyle::StdArray,
    };
    out.push_str(&emit_array(&decl, &quoted_names, &ColumnFormat::right(5, 15)));
    out.push('\n');
}

/// Flattened letter-value lookup.
fn render_letter_values(out: &mut String, dist: &TileDistribution) {
    let letter_values: Vec<String> = dist
        .letter_values()
        .iter()
        .map(ToString::to_string)
        .collect();
    let decl = ArrayDecl {
        name: "letter_values",
        elem_type: "int",
        style: ArrayStyle::StdArray,
    };
    out.push_str(&emit_array(&decl, &letter_values, &ColumnFormat::right(2, 16)));
    out.push('\n');
}

/// Default render colors, one token per square.
fn render_color_table(out: &mut String, layout: &PremiumLayout) {
    let colors: Vec<String> = default_square_colors(layout)
        .iter()
        .map(|color| color.token().to_string())
        .collect();
    let decl = ArrayDecl {
        name: "DefaultSquareColors",
        elem_type: "ImVec4",
        style: ArrayStyle::StdArray,
    };
    out.push_str(&emit_array(&decl, &colors, &ColumnFormat::left(23, 4)));
}

/// Per-kind square counts for the summary output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PremiumCounts {
    /// Triple-word squares.
    pub triple_word: usize,
    /// Double-word squares.
    pub double_word: usize,
    /// Triple-letter squares.
    pub triple_letter: usize,
    /// Double-letter squares.
    pub double_letter: usize,
    /// Plain squares.
    pub empty: usize,
}

/// Machine-readable summary of the derived tables.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TableSummary {
    /// Board rows.
    pub num_rows: usize,
    /// Board columns.
    pub num_cols: usize,
    /// Total squares.
    pub num_squares: usize,
    /// Square counts per premium kind.
    pub premium_counts: PremiumCounts,
    /// Total premium squares (union of the four kinds).
    pub premium_total: usize,
    /// Declared bag size: letters plus blanks.
    pub total_tiles: u32,
    /// Letter tiles only (blanks excluded).
    pub letter_tiles: u32,
    /// Blank tile count.
    pub blank_tiles: u8,
    /// Length of the flattened letter-value table.
    pub letter_value_slots: usize,
}

/// Build the summary, running the same validations as header generation.
///
/// # Errors
///
/// Propagates every validation error from the board and tile layers.
pub fn summarize() -> GenResult<TableSummary> {
    let layout = PremiumLayout::standard()?;
    let dist = TileDistribution::standard()?;

    let counts = PremiumCounts {
        triple_word: layout.count(SquareKind::TripleWord),
        double_word: layout.count(SquareKind::DoubleWord),
        triple_letter: layout.count(SquareKind::TripleLetter),
        double_letter: layout.count(SquareKind::DoubleLetter),
        empty: layout.count(SquareKind::Empty),
    };
    let letter_tiles = Tile::all()
        .filter(|t| t.is_letter())
        .map(|t| u32::from(dist.frequency(t)))
        .sum();

    Ok(TableSummary {
        num_rows: NUM_ROWS,
        num_cols: NUM_COLS,
        num_squares: NUM_SQUARES,
        premium_counts: counts,
        premium_total: NUM_SQUARES - counts.empty,
        total_tiles: dist.total_tiles(),
        letter_tiles,
        blank_tiles: dist.frequency(Tile::BLANK),
        letter_value_slots: LETTER_VALUE_SLOTS,
    })
}
