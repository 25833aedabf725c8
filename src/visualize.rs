//! Display rendering of a [`FenceMatrix`].
//!
//! Pure formatting: one visual cell per matrix cell, rows top to bottom.
//! Filled cells show their character (a space shows as the space
//! substitute), everything else shows as a blank. A literal space is never
//! drawn as a blank.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::matrix::{Cell, FenceMatrix};

/// Character drawn in place of a literal space.
pub const DEFAULT_SPACE_SUBSTITUTE: char = '-';

/// Glyph for inert and unfilled cells in [`VisualStyle::Grid`].
const GRID_EMPTY: char = ' ';

/// Output format for the visualization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStyle {
    /// Plain text, one line per rail, cells separated by a space.
    #[default]
    Grid,
    /// Nested `<div>` markup with `rail-fence`, `rail-row` and `rail-cell`
    /// classes.
    Html,
}

impl VisualStyle {
    /// Renders `matrix` in this style.
    ///
    /// # Parameters
    /// - `matrix`: The matrix to draw.
    /// - `space`: Glyph drawn for cells holding a literal space.
    pub fn render(self, matrix: &FenceMatrix, space: char) -> String {
        match self {
            VisualStyle::Grid => render_grid(matrix, space),
            VisualStyle::Html => render_html(matrix, space),
        }
    }
}

/// Renders `matrix` as a text grid using the default space substitute.
///
/// # Examples
///
/// ```
/// use railfence::{generate_path, render, FenceMatrix, Rails};
///
/// let path = generate_path(3, Rails::new(2).unwrap());
/// let mut m = FenceMatrix::marked(&path).unwrap();
/// for (row, col) in path.cells() {
///     m.fill(row, col, 'x');
/// }
/// assert_eq!(render(&m), "x   x\n  x  ");
/// ```
pub fn render(matrix: &FenceMatrix) -> String {
    VisualStyle::Grid.render(matrix, DEFAULT_SPACE_SUBSTITUTE)
}

/// Display glyph for a cell, `None` when the cell is drawn empty.
fn glyph(cell: Cell, space: char) -> Option<char> {
    match cell.char()? {
        ' ' => Some(space),
        c => Some(c),
    }
}

fn render_grid(matrix: &FenceMatrix, space: char) -> String {
    let lines: Vec<String> = matrix
        .iter_rows()
        .map(|row| {
            let mut line = String::with_capacity(row.len() * 2);
            for (i, &cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push(glyph(cell, space).unwrap_or(GRID_EMPTY));
            }
            line
        })
        .collect();
    lines.join("\n")
}

fn render_html(matrix: &FenceMatrix, space: char) -> String {
    let mut out = String::from(r#"<div class="rail-fence">"#);
    for row in matrix.iter_rows() {
        out.push_str(r#"<div class="rail-row">"#);
        for &cell in row {
            match glyph(cell, space) {
                Some(c) => {
                    out.push_str(r#"<div class="rail-cell filled">"#);
                    push_escaped(&mut out, c);
                    out.push_str("</div>");
                }
                None => out.push_str(r#"<div class="rail-cell empty"></div>"#),
            }
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        c if c.is_control() => {
            let _ = write!(out, "&#{};", c as u32);
        }
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{generate_path, Rails};

    fn filled(text: &str, rails: i64) -> FenceMatrix {
        let path = generate_path(text.chars().count(), Rails::new(rails).unwrap());
        let mut m = FenceMatrix::marked(&path).unwrap();
        for ((row, col), c) in path.cells().zip(text.chars()) {
            m.fill(row, col, c);
        }
        m
    }

    #[test]
    fn test_grid_hello() {
        let m = filled("HELLO", 3);
        assert_eq!(render(&m), "H       O\n  E   L  \n    L    ");
    }

    #[test]
    fn test_grid_space_uses_substitute() {
        let m = filled("A B", 1);
        assert_eq!(VisualStyle::Grid.render(&m, '-'), "A - B");
        assert_eq!(VisualStyle::Grid.render(&m, '_'), "A _ B");
    }

    #[test]
    fn test_grid_marked_cells_render_empty() {
        let path = generate_path(3, Rails::new(2).unwrap());
        let m = FenceMatrix::marked(&path).unwrap();
        assert_eq!(render(&m), "     \n     ");
    }

    #[test]
    fn test_grid_punctuation_differs_from_inert() {
        let m = filled("A.B", 2);
        let grid = render(&m);
        assert_eq!(grid, "A   B\n  .  ");
        let lower = grid.lines().nth(1).unwrap();
        assert_ne!(lower.trim(), "");
        assert_eq!(lower.chars().nth(2), Some('.'));
    }

    #[test]
    fn test_grid_empty_matrix() {
        let m = filled("", 3);
        assert_eq!(render(&m), "\n\n");
    }

    #[test]
    fn test_html_matches_legacy_markup() {
        let m = filled("AB", 2);
        let expected = concat!(
            r#"<div class="rail-fence">"#,
            r#"<div class="rail-row">"#,
            r#"<div class="rail-cell filled">A</div>"#,
            r#"<div class="rail-cell empty"></div>"#,
            "</div>",
            r#"<div class="rail-row">"#,
            r#"<div class="rail-cell empty"></div>"#,
            r#"<div class="rail-cell filled">B</div>"#,
            "</div>",
            "</div>",
        );
        assert_eq!(VisualStyle::Html.render(&m, '-'), expected);
    }

    #[test]
    fn test_html_escapes_markup_characters() {
        let m = filled("<&>", 1);
        let html = VisualStyle::Html.render(&m, '-');
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
        assert!(html.contains("&gt;"));
        assert!(!html.contains("filled\"><"));
    }

    #[test]
    fn test_html_empty_matrix() {
        let m = filled("", 2);
        assert_eq!(
            VisualStyle::Html.render(&m, '-'),
            r#"<div class="rail-fence"><div class="rail-row"></div><div class="rail-row"></div></div>"#
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let m = filled("WE ARE DISCOVERED", 4);
        for style in [VisualStyle::Grid, VisualStyle::Html] {
            assert_eq!(style.render(&m, '-'), style.render(&m, '-'));
        }
    }

    #[test]
    fn test_style_serde_names() {
        assert_eq!(serde_json::to_string(&VisualStyle::Html).unwrap(), "\"html\"");
        let style: VisualStyle = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(style, VisualStyle::Grid);
    }
}
