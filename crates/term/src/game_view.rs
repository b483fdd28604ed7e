//! GameView: maps an engine snapshot into text rows.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_core::Snapshot;

/// Glyph for an empty board cell.
const EMPTY_GLYPH: char = '.';
/// Glyph for an occupied board cell.
const FILLED_GLYPH: char = '0';

/// A lightweight text view of the play field.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the merged snapshot into bordered text rows, one string per
    /// terminal line.
    pub fn render(&self, snap: &Snapshot) -> Vec<String> {
        let mut lines = Vec::with_capacity(snap.height() + 3);
        let horizontal = format!("+{}+", "-".repeat(snap.width()));

        lines.push(horizontal.clone());
        for row in snap.rows() {
            let mut line = String::with_capacity(snap.width() + 2);
            line.push('|');
            for &cell in row {
                line.push(if cell.is_filled() {
                    FILLED_GLYPH
                } else {
                    EMPTY_GLYPH
                });
            }
            line.push('|');
            lines.push(line);
        }
        lines.push(horizontal);
        lines.push(format!("next: {}", snap.next.as_str()));

        lines
    }
}
