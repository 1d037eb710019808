//! Parallel extraction across independent documents.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use super::document::{DocumentResult, extract_document};
use super::source::DocumentSource;
use crate::error::{InvoiceError, Result};
use crate::layout::ExtractParams;

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Options for batch extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOptions {
    /// Worker threads. None uses the available parallelism.
    pub threads: Option<usize>,
}

/// Outcome for one document of a batch.
///
/// Serializes as `{"fileName", "invoiceNumber", "lineItems"}`, or
/// `{"fileName", "error"}` when the document failed.
#[derive(Debug)]
pub struct BatchEntry {
    pub name: String,
    pub result: Result<DocumentResult>,
}

impl Serialize for BatchEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("fileName", &self.name)?;
        match &self.result {
            Ok(doc) => {
                map.serialize_entry("invoiceNumber", &doc.invoice_number)?;
                map.serialize_entry("lineItems", &doc.line_items)?;
            }
            Err(e) => map.serialize_entry("error", &e.to_string())?,
        }
        map.end()
    }
}

/// Load and extract one document.
pub fn extract_source<S>(source: &S, params: &ExtractParams) -> Result<DocumentResult>
where
    S: DocumentSource + ?Sized,
{
    let pages = source.load_pages()?;
    if pages.is_empty() {
        return Err(InvoiceError::EmptyDocument);
    }
    Ok(extract_document(&pages, params))
}

/// Extract every source in parallel.
///
/// Entries come back in submission order. A failing source only fails its
/// own entry.
pub fn extract_batch<S>(
    sources: &[S],
    params: &ExtractParams,
    options: &BatchOptions,
) -> Result<Vec<BatchEntry>>
where
    S: DocumentSource + Sync,
{
    let threads = options.threads.unwrap_or_else(default_thread_count).max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| InvoiceError::Source(e.to_string()))?;
    debug!(documents = sources.len(), threads, "batch start");

    let entries = pool.install(|| {
        sources
            .par_iter()
            .map(|source| {
                let name = source.name();
                let result = extract_source(source, params);
                match &result {
                    Ok(doc) if doc.line_items.is_empty() => {
                        warn!(document = %name, "no line items found");
                    }
                    Ok(_) => {}
                    Err(e) => warn!(document = %name, error = %e, "extraction failed"),
                }
                BatchEntry { name, result }
            })
            .collect()
    });
    Ok(entries)
}
