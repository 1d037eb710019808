//! Column classification of line-item blocks.
//!
//! A block belongs to the first column (in declaration order) it aligns
//! with, centered inside the label extent or flush with its right or left
//! edge, or whose neighbour's boundedness leaves it the gap the block sits
//! in. The content-span strategy then tries each column's observed content
//! span. Anything left goes to the nearest label center.

use super::columns::{Column, ColumnLayout, ColumnSpec};
use crate::layout::{Block, ClassifierStrategy, ExtractParams};

/// Centered, right-aligned or left-aligned against the label extent.
fn aligned(spec: &ColumnSpec, block: &Block, tolerance: f64) -> bool {
    let Some((x0, x1)) = spec.extent() else {
        return false;
    };
    let center = block.center();
    let centered = x0 - tolerance <= center && center <= x1 + tolerance;
    let right_aligned = (block.x1 - x1).abs() <= tolerance;
    let left_aligned = (block.x0 - x0).abs() <= tolerance;
    centered || right_aligned || left_aligned
}

/// Block sits in the gap next to column `i` and the neighbour's
/// boundedness rules it out, leaving column `i`.
fn claims_gap(specs: &[ColumnSpec], i: usize, block: &Block, tolerance: f64) -> bool {
    let Some((x0, x1)) = specs[i].extent() else {
        return false;
    };
    let center = block.center();

    if let Some(next) = specs.get(i + 1)
        && x1 + tolerance < center
        && next.column.left_bounded()
        && let Some(next_x0) = next.x0
        && block.x1 + tolerance < next_x0
    {
        return true;
    }

    if let Some(prev) = i.checked_sub(1).map(|p| &specs[p])
        && center < x0 - tolerance
        && prev.column.right_bounded()
        && let Some(prev_x1) = prev.x1
    {
        return prev_x1 + tolerance < block.x0;
    }

    false
}

/// Column whose label center is closest to `center`; the earlier column
/// wins ties.
pub fn nearest_column(layout: &ColumnLayout, center: f64) -> Option<Column> {
    let mut best: Option<(Column, f64)> = None;
    for spec in layout.specs() {
        let Some(c) = spec.center() else {
            continue;
        };
        let distance = (center - c).abs();
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((spec.column, distance));
        }
    }
    best.map(|(column, _)| column)
}

fn classify_fixed_bounds(layout: &ColumnLayout, block: &Block, tolerance: f64) -> Option<Column> {
    let specs = layout.specs();
    for (i, spec) in specs.iter().enumerate() {
        if spec.extent().is_none() {
            continue;
        }
        if aligned(spec, block, tolerance) || claims_gap(specs, i, block, tolerance) {
            return Some(spec.column);
        }
    }
    None
}

fn classify_content_span(
    layout: &mut ColumnLayout,
    block: &Block,
    tolerance: f64,
) -> Option<Column> {
    let center = block.center();
    let column = classify_fixed_bounds(layout, block, tolerance).or_else(|| {
        layout
            .specs()
            .iter()
            .find(|spec| {
                spec.content_span()
                    .is_some_and(|(lo, hi)| lo <= center && center <= hi)
            })
            .map(|spec| spec.column)
    })?;

    layout.get_mut(column).widen_content(block.x0, block.x1);
    Some(column)
}

/// Assign `block` to a column, or `None` when no column has any geometry.
pub fn classify_block(
    layout: &mut ColumnLayout,
    block: &Block,
    params: &ExtractParams,
) -> Option<Column> {
    let tolerance = params.align_tolerance;
    let matched = match params.strategy {
        ClassifierStrategy::ContentSpan => classify_content_span(layout, block, tolerance),
        ClassifierStrategy::FixedBounds => classify_fixed_bounds(layout, block, tolerance),
    };
    matched.or_else(|| nearest_column(layout, block.center()))
}
