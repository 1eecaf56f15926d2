//! Show command implementation: ASCII rendering of the premium grids.

use super::{CliError, GridKind};
use mktables::board::{NUM_COLS, NUM_ROWS, Square};
use mktables::{PremiumLayout, SquareKind};

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the layout fails validation.
pub(crate) fn execute(kind: GridKind) -> Result<(), CliError> {
    let layout = PremiumLayout::standard()?;
    print!("{}", render_grid(&layout, kind.square_kind()));
    Ok(())
}

/// Two-character cell code per kind.
fn cell_code(kind: SquareKind) -> &'static str {
    match kind {
        SquareKind::Empty => "  ",
        SquareKind::DoubleLetter => "DL",
        SquareKind::TripleLetter => "TL",
        SquareKind::DoubleWord => "DW",
        SquareKind::TripleWord => "TW",
    }
}

/// Render the board as an ASCII grid, optionally filtered to one kind.
fn render_grid(layout: &PremiumLayout, filter: Option<SquareKind>) -> String {
    let mut out = String::new();

    // Column header shows the last digit of each 1-based column number.
    out.push_str("   ");
    for col in 1..=NUM_COLS {
        out.push_str(&format!("  {}  ", col % 10));
    }
    out.push('\n');

    let rule = format!("   {}\n", "-".repeat(NUM_COLS * 5 + 1));
    out.push_str(&rule);

    for row in 0..NUM_ROWS {
        let mut line = String::new();
        for col in 0..NUM_COLS {
            #[allow(clippy::unwrap_used)] // row and col are in range
            let sq = Square::new(row, col).unwrap();
            let kind = layout.kind_at(sq);
            let code = match filter {
                Some(wanted) if kind != wanted => "  ",
                _ => cell_code(kind),
            };
            line.push_str(&format!("| {code} "));
        }
        #[allow(clippy::cast_possible_truncation)] // row < 15
        let row_letter = (b'A' + row as u8) as char;
        out.push_str(&format!("{row_letter}  {line}|\n"));
        out.push_str(&rule);
    }

    out
}
