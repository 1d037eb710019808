//! fapiao - line-item table reconstruction for Chinese VAT invoices.
//!
//! Works on the positioned text fragments of each page: fragments are
//! grouped into rows and merged into blocks, the header row yields the
//! column geometry, and every block between the header and the subtotal
//! row is classified into a column and assembled into line-item records.

pub mod api;
pub mod error;
pub mod invoice;
pub mod layout;

pub use api::{
    BatchEntry, BatchOptions, DocumentExtractor, DocumentResult, DocumentSource, extract_batch,
    extract_document, extract_source,
};
pub use error::{InvoiceError, Result};
pub use invoice::{Column, InvoiceNumber, LineItemRecord};
pub use layout::{ClassifierStrategy, ExtractParams, Fragment};
