//! Header row location and column geometry.

use tracing::debug;

use super::columns::{Column, ColumnLayout};
use crate::layout::{Block, Row, row_text};

/// Index of the first row naming both the item and spec/model columns.
pub fn find_header_row(rows: &[Row]) -> Option<usize> {
    rows.iter().position(|row| {
        let text = row_text(row);
        text.contains(Column::ItemName.label()) && text.contains(Column::SpecModel.label())
    })
}

/// Derive each column's label extent from the header row's blocks.
///
/// Columns are matched in declaration order with one left-to-right cursor:
/// the start comes from the first block containing the label's first
/// character, the end from the first block containing its last character.
/// Once a column's end is found the cursor moves past that block. This
/// tolerates a label split across several blocks, e.g. `税率`, `/`, `征收率`.
pub fn locate_columns(header: &[Block]) -> ColumnLayout {
    let mut layout = ColumnLayout::new();
    let mut cursor = 0;

    for spec in layout.specs_mut() {
        let column = spec.column;
        let start_char = column.first_char();
        let end_char = column.last_char();
        let mut guard_seen = column.end_guard().is_none();

        for (i, block) in header.iter().enumerate().skip(cursor) {
            if let Some(guard) = column.end_guard() {
                if block.text.contains(guard) {
                    guard_seen = true;
                }
            }

            if spec.x0.is_none() && block.text.contains(start_char) {
                spec.x0 = Some(block.x0);
            }

            if guard_seen && block.text.contains(end_char) {
                spec.x1 = Some(block.x1);
                cursor = i + 1;
                break;
            }
        }

        debug!(column = %column, x0 = ?spec.x0, x1 = ?spec.x1, "header column");
    }

    layout
}
