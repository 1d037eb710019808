//! Page layout reconstruction.
//!
//! Turns an unordered set of positioned fragments into rows of merged
//! text blocks, top to bottom and left to right.

mod blocks;
pub mod params;
mod rows;
mod types;

pub use blocks::merge_blocks;
pub use params::{ClassifierStrategy, ExtractParams};
pub use rows::group_rows;
pub use types::{Block, Fragment, Row, row_text};

/// Group a page's fragments into rows and merge each row into blocks.
pub fn build_rows(fragments: &[Fragment], params: &ExtractParams) -> Vec<Row> {
    group_rows(fragments, params)
        .iter()
        .map(|row| merge_blocks(row, params))
        .collect()
}
