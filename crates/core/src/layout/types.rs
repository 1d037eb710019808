//! Positioned text types shared by the layout stages.

/// One decoded text run with its position on the page.
///
/// Coordinates are in PDF user space: `y` grows upwards, so the top row of
/// a page has the largest `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub x: f64,
    pub width: f64,
    pub y: f64,
    pub height: f64,
}

impl Fragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            x,
            width,
            y,
            height,
        }
    }

    pub fn x_end(&self) -> f64 {
        self.x + self.width
    }

    /// Whitespace-only fragments, including empty ones.
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// A merged run of horizontally continuous fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub text: String,
    pub x0: f64,
    pub x1: f64,
}

impl Block {
    pub fn new(text: impl Into<String>, x0: f64, x1: f64) -> Self {
        Self {
            text: text.into(),
            x0,
            x1: x1.max(x0),
        }
    }

    pub fn center(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Blocks sharing one visual band, left to right.
pub type Row = Vec<Block>;

/// Concatenated text of a row, no separators.
pub fn row_text(row: &[Block]) -> String {
    row.iter().map(|b| b.text.as_str()).collect()
}
