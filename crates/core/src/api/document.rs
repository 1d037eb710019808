//! Per-document extraction driver.
//!
//! Pages are processed strictly in order: header geometry found on one
//! page is reused by every later page of the same document. All state
//! lives in [`DocumentExtractor`], so documents never share anything.

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, warn};

use crate::invoice::{
    ColumnLayout, InvoiceNumber, LineItemRecord, RecordAssembler, RowKind, classify_block,
    find_header_row, find_invoice_number, line_item_range, locate_columns,
};
use crate::layout::{ExtractParams, Fragment, build_rows};

/// Header geometry for a document.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderLayout {
    /// Index of the header row within its page.
    pub row: usize,
    pub columns: ColumnLayout,
    /// False when the header row was not found and row 0 stood in for it.
    pub confirmed: bool,
}

/// Extraction result for one document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResult {
    pub invoice_number: InvoiceNumber,
    pub line_items: Vec<LineItemRecord>,
}

/// What happened on one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSummary {
    pub page_number: usize,
    pub rows: usize,
    pub header_row: Option<usize>,
    pub line_item_rows: Range<usize>,
    pub new_records: usize,
    pub orphan_rows: usize,
}

/// Accumulates line items across the pages of one document.
#[derive(Debug)]
pub struct DocumentExtractor {
    params: ExtractParams,
    header: Option<HeaderLayout>,
    invoice_number: Option<InvoiceNumber>,
    assembler: RecordAssembler,
}

impl DocumentExtractor {
    pub fn new(params: ExtractParams) -> Self {
        Self {
            params,
            header: None,
            invoice_number: None,
            assembler: RecordAssembler::new(),
        }
    }

    pub fn header(&self) -> Option<&HeaderLayout> {
        self.header.as_ref()
    }

    pub fn records(&self) -> &[LineItemRecord] {
        self.assembler.records()
    }

    /// Run the page stages for page `page_number` (1-based).
    ///
    /// Pages without fragments are skipped.
    pub fn process_page(&mut self, page_number: usize, fragments: &[Fragment]) -> PageSummary {
        let rows = build_rows(fragments, &self.params);
        let mut summary = PageSummary {
            page_number,
            rows: rows.len(),
            header_row: None,
            line_item_rows: 0..0,
            new_records: 0,
            orphan_rows: 0,
        };
        if rows.is_empty() {
            debug!(page = page_number, "empty page skipped");
            return summary;
        }

        if self.invoice_number.is_none() {
            self.invoice_number = find_invoice_number(&rows);
            if let Some(number) = &self.invoice_number
                && number.as_found().is_none()
            {
                warn!(page = page_number, "{number}");
            }
        }

        let found = find_header_row(&rows);
        if !self.header.as_ref().is_some_and(|h| h.confirmed) {
            if found.is_none() {
                warn!(page = page_number, "header row not found, using row 0");
            }
            let row = found.unwrap_or(0);
            self.header = Some(HeaderLayout {
                row,
                columns: locate_columns(&rows[row]),
                confirmed: found.is_some(),
            });
        }
        let Some(header) = self.header.as_mut() else {
            return summary;
        };
        // Geometry is fixed per document; only the row position is taken
        // from this page when its header row is present.
        let header_row = found.unwrap_or(header.row);
        summary.header_row = Some(header_row);

        let range = line_item_range(&rows, header_row);
        if range.end == rows.len() {
            debug!(page = page_number, "no subtotal row, items run to page end");
        }

        let params = &self.params;
        for row in &rows[range.clone()] {
            let kind = self.assembler.push_row(row, |block| {
                let column = classify_block(&mut header.columns, block, params);
                if column.is_none() {
                    warn!(page = page_number, text = %block.text, "block dropped, no column geometry");
                }
                column
            });
            match kind {
                RowKind::Primary => summary.new_records += 1,
                RowKind::Continuation => {}
                RowKind::Orphan => {
                    summary.orphan_rows += 1;
                    warn!(page = page_number, "continuation row before any item dropped");
                }
            }
        }
        summary.line_item_rows = range;

        debug!(
            page = page_number,
            rows = summary.rows,
            header_row = ?summary.header_row,
            items = ?summary.line_item_rows,
            new_records = summary.new_records,
            "page processed"
        );
        summary
    }

    /// Attach the invoice number to every record and return the result.
    pub fn finish(self) -> DocumentResult {
        let invoice_number = self.invoice_number.unwrap_or(InvoiceNumber::LabelNotFound);
        let mut line_items = self.assembler.into_records();
        let number = invoice_number.to_string();
        for record in &mut line_items {
            record.set_invoice_number(number.clone());
        }
        DocumentResult {
            invoice_number,
            line_items,
        }
    }
}

/// Extract one document from its pages' fragments, in page order.
pub fn extract_document<P>(pages: P, params: &ExtractParams) -> DocumentResult
where
    P: IntoIterator,
    P::Item: AsRef<[Fragment]>,
{
    let mut extractor = DocumentExtractor::new(params.clone());
    for (i, page) in pages.into_iter().enumerate() {
        extractor.process_page(i + 1, page.as_ref());
    }
    extractor.finish()
}
