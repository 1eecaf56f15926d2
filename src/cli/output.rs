//! Output formatting utilities for CLI.

use mktables::TableSummary;

/// Format a table summary as human-readable text.
pub(super) fn format_text(summary: &TableSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Board: {}x{} ({} squares)\n",
        summary.num_rows, summary.num_cols, summary.num_squares
    ));
    output.push_str("  Premium squares:\n");
    output.push_str(&format!(
        "    triple word:   {:3}\n",
        summary.premium_counts.triple_word
    ));
    output.push_str(&format!(
        "    double word:   {:3}\n",
        summary.premium_counts.double_word
    ));
    output.push_str(&format!(
        "    triple letter: {:3}\n",
        summary.premium_counts.triple_letter
    ));
    output.push_str(&format!(
        "    double letter: {:3}\n",
        summary.premium_counts.double_letter
    ));
    output.push_str(&format!(
        "    total: {} premium, {} plain\n",
        summary.premium_total, summary.premium_counts.empty
    ));
    output.push_str(&format!(
        "  Tile bag: {} tiles ({} letters + {} blanks)\n",
        summary.total_tiles, summary.letter_tiles, summary.blank_tiles
    ));
    output.push_str(&format!(
        "  Letter value table: {} slots\n",
        summary.letter_value_slots
    ));

    output
}
