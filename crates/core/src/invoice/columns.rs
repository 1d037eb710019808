//! Invoice line-item columns and their discovered geometry.

use serde::Serialize;

/// The eight line-item columns, in header order.
///
/// Declaration order is significant: classification checks columns in this
/// order and the earlier column wins any tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Column {
    #[serde(rename = "项目名称")]
    ItemName,
    #[serde(rename = "规格型号")]
    SpecModel,
    #[serde(rename = "单位")]
    Unit,
    #[serde(rename = "数量")]
    Quantity,
    #[serde(rename = "单价")]
    UnitPrice,
    #[serde(rename = "金额")]
    Amount,
    #[serde(rename = "税率/征收率")]
    TaxRate,
    #[serde(rename = "税额")]
    TaxAmount,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::ItemName,
        Column::SpecModel,
        Column::Unit,
        Column::Quantity,
        Column::UnitPrice,
        Column::Amount,
        Column::TaxRate,
        Column::TaxAmount,
    ];

    /// Header label as printed on the invoice.
    pub fn label(self) -> &'static str {
        match self {
            Column::ItemName => "项目名称",
            Column::SpecModel => "规格型号",
            Column::Unit => "单位",
            Column::Quantity => "数量",
            Column::UnitPrice => "单价",
            Column::Amount => "金额",
            Column::TaxRate => "税率/征收率",
            Column::TaxAmount => "税额",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Content never starts further left than the header label. Contents
    /// are left aligned, or short and centered.
    pub fn left_bounded(self) -> bool {
        matches!(
            self,
            Column::SpecModel | Column::Unit | Column::TaxRate
        )
    }

    /// Content never ends further right than the header label.
    pub fn right_bounded(self) -> bool {
        matches!(
            self,
            Column::Unit
                | Column::Quantity
                | Column::UnitPrice
                | Column::Amount
                | Column::TaxRate
                | Column::TaxAmount
        )
    }

    pub(crate) fn first_char(self) -> char {
        self.label().chars().next().unwrap_or_default()
    }

    pub(crate) fn last_char(self) -> char {
        self.label().chars().next_back().unwrap_or_default()
    }

    /// Character that must be seen before the label's last character is
    /// accepted as its end.
    ///
    /// `税率/征收率` ends in `率`, which also appears right after its first
    /// character. Only the `率` after `征` marks the real end of the label.
    pub(crate) fn end_guard(self) -> Option<char> {
        match self {
            Column::TaxRate => Some('征'),
            _ => None,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Discovered horizontal geometry of one column.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSpec {
    pub column: Column,
    pub x0: Option<f64>,
    pub x1: Option<f64>,
    content: Option<(f64, f64)>,
}

impl ColumnSpec {
    pub fn new(column: Column) -> Self {
        Self {
            column,
            x0: None,
            x1: None,
            content: None,
        }
    }

    /// Label extent, when both ends were found.
    pub fn extent(&self) -> Option<(f64, f64)> {
        Some((self.x0?, self.x1?))
    }

    pub fn center(&self) -> Option<f64> {
        self.extent().map(|(x0, x1)| (x0 + x1) / 2.0)
    }

    /// Horizontal span observed for this column's content so far; starts
    /// as the label extent.
    pub fn content_span(&self) -> Option<(f64, f64)> {
        self.content.or_else(|| self.extent())
    }

    /// Widen the content span to cover `x0..x1`. Returns whether it grew.
    pub(crate) fn widen_content(&mut self, x0: f64, x1: f64) -> bool {
        let Some((lo, hi)) = self.content_span() else {
            return false;
        };
        if x0 >= lo && x1 <= hi {
            return false;
        }
        self.content = Some((lo.min(x0), hi.max(x1)));
        true
    }
}

/// Geometry of all eight columns for one document.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayout {
    specs: [ColumnSpec; 8],
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            specs: Column::ALL.map(ColumnSpec::new),
        }
    }
}

impl ColumnLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: Column) -> &ColumnSpec {
        &self.specs[column.index()]
    }

    pub fn get_mut(&mut self, column: Column) -> &mut ColumnSpec {
        &mut self.specs[column.index()]
    }

    pub fn specs(&self) -> &[ColumnSpec] {
        &self.specs
    }

    pub(crate) fn specs_mut(&mut self) -> &mut [ColumnSpec] {
        &mut self.specs
    }

    /// Number of columns whose label extent is fully known.
    pub fn discovered(&self) -> usize {
        self.specs.iter().filter(|s| s.extent().is_some()).count()
    }
}
