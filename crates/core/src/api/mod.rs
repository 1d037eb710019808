//! Public extraction API.

pub mod batch;
pub mod document;
pub mod export;
pub mod source;

pub use batch::{BatchEntry, BatchOptions, extract_batch, extract_source};
pub use document::{
    DocumentExtractor, DocumentResult, HeaderLayout, PageSummary, extract_document,
};
pub use export::{Alignment, DISPLAY_COLUMNS, DisplayColumn, to_tsv, write_tsv};
pub use source::{
    DocumentSource, InMemorySource, JsonFileSource, TextItem, parse_text_content,
};
