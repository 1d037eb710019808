//! Merge horizontally continuous fragments into text blocks.

use super::params::ExtractParams;
use super::types::{Block, Fragment, Row};

/// Merge one row's fragments (left to right) into blocks.
///
/// A fragment continues the previous block when its start lies within
/// `block_gap_tolerance` of that block's end. The block's end is then taken
/// from the fragment's own end, never accumulated from widths.
///
/// Whitespace is handled separately: a continuing whitespace fragment only
/// contributes a `' '` when its width is the meaningful separator width,
/// and never moves the block's end. Whitespace that does not continue a
/// block is dropped.
pub fn merge_blocks(row: &[Fragment], params: &ExtractParams) -> Row {
    let mut blocks: Row = Vec::new();

    for fragment in row {
        let continues = blocks
            .last()
            .is_some_and(|prev| (fragment.x - prev.x1).abs() <= params.block_gap_tolerance);

        match (continues, fragment.is_blank()) {
            (true, false) => {
                if let Some(prev) = blocks.last_mut() {
                    prev.text.push_str(&fragment.text);
                    prev.x1 = fragment.x_end().max(prev.x0);
                }
            }
            (true, true) => {
                if params.is_meaningful_space(fragment.width)
                    && let Some(prev) = blocks.last_mut()
                {
                    prev.text.push(' ');
                }
            }
            (false, false) => {
                blocks.push(Block::new(fragment.text.clone(), fragment.x, fragment.x_end()));
            }
            (false, true) => {}
        }
    }

    blocks
}
