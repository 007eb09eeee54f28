//! Plain-text board rendering
//!
//! Rows are printed north-up: the highest row index (largest latitude) is
//! the first line.

use crate::game::{CellView, GameSession};

/// Glyph used for a rendered cell
pub const fn glyph(view: CellView) -> char {
    match view {
        CellView::Empty => '.',
        CellView::Trap => 'X',
        CellView::Flag => 'F',
        CellView::Player => 'P',
    }
}

/// Hide traps unless `reveal` is set; the flag is always shown as the goal
pub const fn visible(view: CellView, reveal: bool) -> CellView {
    match view {
        CellView::Trap if !reveal => CellView::Empty,
        other => other,
    }
}

/// Render the board as lines of space-separated glyphs
pub fn render_board(session: &GameSession, reveal: bool) -> String {
    session
        .view_rows()
        .iter()
        .rev()
        .map(|row| {
            row.iter()
                .map(|&view| glyph(visible(view, reveal)).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
