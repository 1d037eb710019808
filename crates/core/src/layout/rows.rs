//! Row grouping by vertical proximity.

use super::params::ExtractParams;
use super::types::Fragment;

/// Whether `fragment` still belongs to a row whose first member sits at
/// `reference_y`.
///
/// Zero-height fragments always stay in the current row.
pub(crate) fn joins_row(reference_y: f64, fragment: &Fragment, height_ratio: f64) -> bool {
    fragment.height == 0.0 || reference_y - fragment.y <= fragment.height * height_ratio
}

/// Group one page's fragments into rows, top to bottom.
///
/// Fragments are visited by descending `y`. The first fragment of each row
/// is its reference; later fragments join while their drop below that
/// reference is within `row_height_ratio` of their own height. Each
/// returned row is sorted left to right.
pub fn group_rows(fragments: &[Fragment], params: &ExtractParams) -> Vec<Vec<Fragment>> {
    let mut ordered: Vec<&Fragment> = fragments.iter().collect();
    ordered.sort_by(|a, b| b.y.total_cmp(&a.y));

    let mut rows: Vec<Vec<Fragment>> = Vec::new();
    let Some(first) = ordered.first() else {
        return rows;
    };

    let mut reference_y = first.y;
    let mut current: Vec<Fragment> = Vec::new();
    for fragment in ordered {
        if joins_row(reference_y, fragment, params.row_height_ratio) {
            current.push(fragment.clone());
        } else {
            rows.push(std::mem::take(&mut current));
            current.push(fragment.clone());
            reference_y = fragment.y;
        }
    }
    rows.push(current);

    for row in &mut rows {
        row.sort_by(|a, b| a.x.total_cmp(&b.x));
    }
    rows
}
