//! Extraction parameters.
//!
//! Contains ExtractParams for controlling row grouping, block merging and
//! column classification tolerances.

/// Fraction of a fragment's own height it may drop below the row's
/// reference origin and still belong to that row.
///
/// Observed on real invoices: 6.60 units between two different rows
/// (heights 9 and 5) and 6.93 units inside one row (heights 10.99 and
/// 8.99). No fixed margin separates both cases; a height-relative one does.
pub const DEFAULT_ROW_HEIGHT_RATIO: f64 = 0.8;

/// Maximum horizontal gap between a block's end and the next fragment's
/// start for the two to merge.
pub const DEFAULT_BLOCK_GAP_TOLERANCE: f64 = 1.0;

/// Width of a space glyph that separates words inside one cell value,
/// e.g. `iPhone 12 Pro Max`. Spaces of any other width are gap fillers
/// between distinct cells.
pub const DEFAULT_MEANINGFUL_SPACE_WIDTH: f64 = 4.5;

/// Tolerance on `DEFAULT_MEANINGFUL_SPACE_WIDTH`.
pub const DEFAULT_MEANINGFUL_SPACE_TOLERANCE: f64 = 0.1;

/// Tolerance for centered/left/right alignment against a column header.
pub const DEFAULT_ALIGN_TOLERANCE: f64 = 1.0;

/// How blocks that do not align with any header label are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClassifierStrategy {
    /// Track the observed horizontal span of each column's content and
    /// classify by it; spans only ever widen.
    #[default]
    ContentSpan,
    /// Use per-column left/right boundedness to resolve blocks sitting in
    /// the gap between two header labels.
    FixedBounds,
}

impl ClassifierStrategy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "content-span" => Some(ClassifierStrategy::ContentSpan),
            "fixed-bounds" => Some(ClassifierStrategy::FixedBounds),
            _ => None,
        }
    }
}

/// Parameters for invoice layout reconstruction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractParams {
    /// Vertical tolerance for row grouping, relative to fragment height.
    pub row_height_ratio: f64,

    /// Horizontal gap under which adjacent fragments merge into one block.
    pub block_gap_tolerance: f64,

    /// Width of a word-separating space glyph.
    pub meaningful_space_width: f64,

    /// Tolerance on `meaningful_space_width`.
    pub meaningful_space_tolerance: f64,

    /// Alignment tolerance used by the column classifier.
    pub align_tolerance: f64,

    /// Resolution strategy for blocks not aligned to any header label.
    pub strategy: ClassifierStrategy,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            row_height_ratio: DEFAULT_ROW_HEIGHT_RATIO,
            block_gap_tolerance: DEFAULT_BLOCK_GAP_TOLERANCE,
            meaningful_space_width: DEFAULT_MEANINGFUL_SPACE_WIDTH,
            meaningful_space_tolerance: DEFAULT_MEANINGFUL_SPACE_TOLERANCE,
            align_tolerance: DEFAULT_ALIGN_TOLERANCE,
            strategy: ClassifierStrategy::default(),
        }
    }
}

impl ExtractParams {
    /// Returns params with the given classifier strategy.
    pub fn with_strategy(mut self, strategy: ClassifierStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Whether a whitespace fragment of `width` is a word separator.
    pub fn is_meaningful_space(&self, width: f64) -> bool {
        (width - self.meaningful_space_width).abs() < self.meaningful_space_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_str() {
        assert_eq!(
            ClassifierStrategy::from_str("content-span"),
            Some(ClassifierStrategy::ContentSpan)
        );
        assert_eq!(
            ClassifierStrategy::from_str("fixed-bounds"),
            Some(ClassifierStrategy::FixedBounds)
        );
        assert_eq!(ClassifierStrategy::from_str("nearest"), None);
    }

    #[test]
    fn meaningful_space_width_window() {
        let params = ExtractParams::default();
        assert!(params.is_meaningful_space(4.5));
        assert!(params.is_meaningful_space(4.55));
        assert!(!params.is_meaningful_space(4.7));
        assert!(!params.is_meaningful_space(2.0));
    }
}
