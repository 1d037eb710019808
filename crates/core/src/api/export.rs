//! Tab-separated export of extracted line items.

use std::io::{self, Write};

use itertools::Itertools;

use super::document::DocumentResult;
use crate::invoice::{Column, INVOICE_NUMBER_FIELD, LineItemRecord};

/// Horizontal alignment of a display column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// One output column: the invoice number or a line-item column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayColumn {
    pub column: Option<Column>,
    pub alignment: Alignment,
}

impl DisplayColumn {
    pub fn name(&self) -> &'static str {
        self.column.map_or(INVOICE_NUMBER_FIELD, Column::label)
    }

    fn value<'a>(&self, record: &'a LineItemRecord) -> Option<&'a str> {
        match self.column {
            Some(column) => record.get(column),
            None => record.invoice_number(),
        }
    }
}

pub const DISPLAY_COLUMNS: [DisplayColumn; 9] = [
    DisplayColumn { column: None, alignment: Alignment::Center },
    DisplayColumn { column: Some(Column::ItemName), alignment: Alignment::Center },
    DisplayColumn { column: Some(Column::SpecModel), alignment: Alignment::Left },
    DisplayColumn { column: Some(Column::Unit), alignment: Alignment::Center },
    DisplayColumn { column: Some(Column::Quantity), alignment: Alignment::Right },
    DisplayColumn { column: Some(Column::UnitPrice), alignment: Alignment::Right },
    DisplayColumn { column: Some(Column::Amount), alignment: Alignment::Right },
    DisplayColumn { column: Some(Column::TaxRate), alignment: Alignment::Center },
    DisplayColumn { column: Some(Column::TaxAmount), alignment: Alignment::Right },
];

fn clean(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

fn record_line(record: &LineItemRecord) -> String {
    DISPLAY_COLUMNS
        .iter()
        .map(|display| match (display.column, display.value(record)) {
            // Leading quote keeps spreadsheets from reading the number as a float.
            (None, Some(number)) => format!("'{}", clean(number)),
            (_, Some(value)) => clean(value),
            (_, None) => String::new(),
        })
        .join("\t")
}

fn tsv_lines(documents: &[DocumentResult]) -> impl Iterator<Item = String> + '_ {
    let header = DISPLAY_COLUMNS.iter().map(DisplayColumn::name).join("\t");
    std::iter::once(header).chain(
        documents
            .iter()
            .flat_map(|doc| &doc.line_items)
            .map(record_line),
    )
}

/// Write a header line and one line per line item of every document.
pub fn write_tsv<W: Write>(writer: &mut W, documents: &[DocumentResult]) -> io::Result<()> {
    for line in tsv_lines(documents) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

pub fn to_tsv(documents: &[DocumentResult]) -> String {
    tsv_lines(documents).map(|line| line + "\n").collect()
}
