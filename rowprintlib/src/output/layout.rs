//! Column widths and line expansion for multi-line cells.

/// Separator used when a table sets no border glyph.
pub const DEFAULT_BORDER: &str = "  ";

/// Padding glyph used when a table sets no background glyph.
pub const DEFAULT_BACKGROUND: &str = " ";

/// Width of a text line, in Unicode scalar values.
pub fn text_width(line: &str) -> usize {
    line.chars().count()
}

/// Sub-lines of a cell, split on `\n`.
pub fn cell_lines(cell: &str) -> Vec<&str> {
    cell.split('\n').collect()
}

/// Computed column widths plus the glyphs used to pad and join cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Width of each column
    pub widths: Vec<usize>,
    background: String,
    border: String,
}

impl Layout {
    /// Measure every line of every row.
    ///
    /// A column is as wide as its widest sub-line, header included.
    pub fn measure<'a, I>(rows: I, background: &str, border: &str) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut widths: Vec<usize> = Vec::new();

        for row in rows {
            if widths.len() < row.len() {
                widths.resize(row.len(), 0);
            }
            for (col, cell) in row.iter().enumerate() {
                let widest = cell_lines(cell).into_iter().map(text_width).max();
                widths[col] = widths[col].max(widest.unwrap_or(0));
            }
        }

        Layout {
            widths,
            background: non_empty_or(background, DEFAULT_BACKGROUND),
            border: non_empty_or(border, DEFAULT_BORDER),
        }
    }

    /// Render one row as one or more text lines (without newlines).
    ///
    /// The row is as tall as its tallest cell. Each column contributes its
    /// sub-line padded to the column width, or pure padding once the cell has
    /// run out of lines. Columns are joined by the border, which also ends
    /// every line.
    pub fn render_row(&self, cells: &[String]) -> Vec<String> {
        let split: Vec<Vec<&str>> = cells.iter().map(|c| cell_lines(c)).collect();
        let height = split.iter().map(Vec::len).max().unwrap_or(0);

        (0..height)
            .map(|line| {
                let mut out = String::new();
                for (col, lines) in split.iter().enumerate() {
                    let text = lines.get(line).copied().unwrap_or("");
                    out.push_str(&self.pad(text, col));
                    out.push_str(&self.border);
                }
                out
            })
            .collect()
    }

    fn pad(&self, text: &str, col: usize) -> String {
        let width = self.widths.get(col).copied().unwrap_or(0);
        let fill = width.saturating_sub(text_width(text));
        format!("{}{}", text, self.background.repeat(fill))
    }
}

fn non_empty_or(glyph: &str, default: &str) -> String {
    if glyph.is_empty() {
        default.to_string()
    } else {
        glyph.to_string()
    }
}
