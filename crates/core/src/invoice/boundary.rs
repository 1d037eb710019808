//! Line-item region delimiting.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::{Row, row_text};

/// The subtotal (小计) or total (合计) row directly below the last item.
static TOTAL_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"小.*计.*[¥￥].+|合.*计.*[¥￥].+").unwrap());

pub fn is_total_row(text: &str) -> bool {
    TOTAL_ROW.is_match(text)
}

/// Index of the first subtotal/total row after the header.
pub fn find_total_row(rows: &[Row], header_row: usize) -> Option<usize> {
    rows.iter()
        .enumerate()
        .skip(header_row.saturating_add(1))
        .find(|(_, row)| is_total_row(&row_text(row)))
        .map(|(i, _)| i)
}

/// Rows holding line items: everything after the header up to, not
/// including, the total row. Without a total row the region runs to the
/// last row of the page.
pub fn line_item_range(rows: &[Row], header_row: usize) -> Range<usize> {
    let start = header_row.saturating_add(1).min(rows.len());
    let end = find_total_row(rows, header_row).unwrap_or(rows.len());
    start..end.max(start)
}
