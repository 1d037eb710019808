//! Fragment sources.
//!
//! Decoding PDFs is out of scope here; fragments arrive as the text
//! content a PDF text extractor already produced. The JSON form mirrors
//! pdf.js `getTextContent()` output: one `items` list per page, each text
//! item carrying its string, transform matrix, width and height.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{InvoiceError, Result};
use crate::layout::Fragment;

/// One positioned text run as serialized by the text extractor.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TextItem {
    #[serde(rename = "str")]
    pub text: String,
    /// `[a, b, c, d, e, f]`; `e` and `f` are the origin.
    pub transform: [f64; 6],
    pub width: f64,
    pub height: f64,
}

impl TextItem {
    /// Validate and convert to a fragment. `page` and `index` only label
    /// the error.
    pub fn to_fragment(&self, page: usize, index: usize) -> Result<Fragment> {
        let x = self.transform[4];
        let y = self.transform[5];
        let invalid = |msg: &str| InvoiceError::InvalidTextItem {
            page,
            index,
            msg: msg.to_string(),
        };

        if ![x, y, self.width, self.height].iter().all(|v| v.is_finite()) {
            return Err(invalid("non-finite coordinate"));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(invalid("negative size"));
        }
        Ok(Fragment::new(self.text.clone(), x, y, self.width, self.height))
    }
}

#[derive(Clone, Debug, Deserialize)]
struct TextContentPage {
    /// Text items and marked-content markers. Only text items carry `str`.
    items: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize)]
struct TextContentDocument {
    pages: Vec<TextContentPage>,
}

fn page_fragments(page: usize, items: &[serde_json::Value]) -> Result<Vec<Fragment>> {
    items
        .iter()
        .filter(|item| item.get("str").is_some())
        .enumerate()
        .map(|(i, item)| TextItem::deserialize(item)?.to_fragment(page, i))
        .collect()
}

/// Parse a text-content JSON document into per-page fragments.
///
/// Entries without `str` are markers and skipped; an entry with `str`
/// that is not a well-formed text item is an error.
pub fn parse_text_content(json: &str) -> Result<Vec<Vec<Fragment>>> {
    let doc: TextContentDocument = serde_json::from_str(json)?;
    doc.pages
        .iter()
        .enumerate()
        .map(|(p, page)| page_fragments(p + 1, &page.items))
        .collect()
}

/// Anything that can produce the fragments of one document.
pub trait DocumentSource {
    /// Label used in logs and batch output.
    fn name(&self) -> String;

    /// Fragments of every page, in page order.
    fn load_pages(&self) -> Result<Vec<Vec<Fragment>>>;
}

/// A text-content JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_pages(&self) -> Result<Vec<Vec<Fragment>>> {
        let json = std::fs::read_to_string(&self.path)?;
        parse_text_content(&json)
    }
}

/// Pages already materialized in memory.
#[derive(Clone, Debug)]
pub struct InMemorySource {
    pub name: String,
    pub pages: Vec<Vec<Fragment>>,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, pages: Vec<Vec<Fragment>>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }
}

impl DocumentSource for InMemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn load_pages(&self) -> Result<Vec<Vec<Fragment>>> {
        Ok(self.pages.clone())
    }
}
