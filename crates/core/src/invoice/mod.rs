//! Invoice line-item table reconstruction.
//!
//! Given rows of merged blocks, this module locates the header row and its
//! column geometry, delimits the line-item region, classifies each block
//! into a column and assembles wrapped rows into line-item records.

mod boundary;
mod classify;
mod columns;
mod header;
mod number;
mod records;

pub use boundary::{find_total_row, is_total_row, line_item_range};
pub use classify::{classify_block, nearest_column};
pub use columns::{Column, ColumnLayout, ColumnSpec};
pub use header::{find_header_row, locate_columns};
pub use number::{InvoiceNumber, find_invoice_number};
pub use records::{
    INVOICE_NUMBER_FIELD, LineItemRecord, RecordAssembler, RowKind, is_primary_line,
};
