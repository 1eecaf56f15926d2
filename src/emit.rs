//! Generic fixed-width table emitter.
//!
//! Renders an ordered sequence of already-stringified values into a
//! wrapped, aligned array or enum literal block. This layer has no game
//! knowledge; the domain modules decide what the values are, this module
//! only decides how they wrap and pad.

use std::fmt::Write as _;

/// Justification of a value within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    /// Pad on the right (tokens, identifiers).
    Left,
    /// Pad on the left (numbers, quoted names).
    Right,
}

/// Column layout for an emitted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnFormat {
    /// Minimum rendered width per value. A value longer than the column
    /// is emitted unpadded, never truncated; alignment degrades but the
    /// output stays correct.
    pub width: usize,
    /// Values per output line.
    pub per_line: usize,
    /// Which side to pad on.
    pub justify: Justify,
}

impl ColumnFormat {
    /// Right-justified columns, the common case for numeric tables.
    ///
    /// # Panics
    ///
    /// Panics if `per_line` is zero.
    #[must_use]
    pub fn right(width: usize, per_line: usize) -> Self {
        assert!(per_line >= 1, "per_line must be at least 1");
        Self {
            width,
            per_line,
            justify: Justify::Right,
        }
    }

    /// Left-justified columns, used for identifier tokens.
    ///
    /// # Panics
    ///
    /// Panics if `per_line` is zero.
    #[must_use]
    pub fn left(width: usize, per_line: usize) -> Self {
        assert!(per_line >= 1, "per_line must be at least 1");
        Self {
            width,
            per_line,
            justify: Justify::Left,
        }
    }

    fn pad(&self, value: &str) -> String {
        match self.justify {
            Justify::Left => format!("{value:<width$}", width = self.width),
            Justify::Right => format!("{value:>width$}", width = self.width),
        }
    }
}

/// Declaration style wrapping an emitted array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayStyle {
    /// `constexpr T name[N] = { ... };`
    CArray,
    /// `constexpr std::array<T, N> name = { ... };`
    StdArray,
}

/// A named, sized, typed array declaration.
#[derive(Debug, Clone, Copy)]
pub struct ArrayDecl<'a> {
    /// Array identifier.
    pub name: &'a str,
    /// Element type spelling.
    pub elem_type: &'a str,
    /// Declaration style.
    pub style: ArrayStyle,
}

/// Quote a string value, right-justified inside the quotes so the quoted
/// column aligns (`" A1"`, `"A10"`).
#[must_use]
pub fn quoted(value: &str, inner_width: usize) -> String {
    format!("\"{value:>inner_width$}\"")
}

/// Render values into indented, comma-terminated lines of
/// `fmt.per_line` items each.
#[must_use]
pub fn render_rows(values: &[String], fmt: &ColumnFormat) -> String {
    let mut out = String::new();
    for chunk in values.chunks(fmt.per_line) {
        let row: Vec<String> = chunk.iter().map(|v| fmt.pad(v)).collect();
        let _ = writeln!(out, "    {},", row.join(", "));
    }
    out
}

/// Wrap rendered rows in a named, sized array declaration.
#[must_use]
pub fn emit_array(decl: &ArrayDecl<'_>, values: &[String], fmt: &ColumnFormat) -> String {
    let header = match decl.style {
        ArrayStyle::CArray => format!(
            "constexpr {} {}[{}] = {{",
            decl.elem_type,
            decl.name,
            values.len()
        ),
        ArrayStyle::StdArray => format!(
            "constexpr std::array<{}, {}> {} = {{",
            decl.elem_type,
            values.len(),
            decl.name
        ),
    };
    format!("{header}\n{}}};\n", render_rows(values, fmt))
}

/// Emit an `enum class` block.
///
/// Variants with an explicit value render as `Name = value`; variants
/// without one rely on the implicit ordinal. `underlying` adds a
/// `: type` specifier to the declaration.
#[must_use]
pub fn emit_enum(
    name: &str,
    underlying: Option<&str>,
    variants: &[(String, Option<usize>)],
    fmt: &ColumnFormat,
) -> String {
    let rendered: Vec<String> = variants
        .iter()
        .map(|(variant, value)| match value {
            Some(value) => format!("{variant} = {value}"),
            None => variant.clone(),
        })
        .collect();
    let spec = underlying.map_or_else(String::new, |u| format!(" : {u}"));
    format!("enum class {name}{spec} {{\n{}}};\n", render_rows(&rendered, fmt))
}
