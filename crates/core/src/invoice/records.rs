//! Assembly of classified rows into line-item records.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::columns::Column;
use crate::layout::{Block, row_text};

/// Display name of the invoice-number field attached to every record.
pub const INVOICE_NUMBER_FIELD: &str = "发票号码";

/// `*category*description`: the first row of a new line item.
static PRIMARY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*[^*]+\*.+$").unwrap());

/// Whether a row's text opens a new line item.
///
/// Rows carrying more or fewer than exactly two asterisks are never
/// primary, even when the leading pattern matches.
pub fn is_primary_line(text: &str) -> bool {
    PRIMARY_LINE.is_match(text) && text.matches('*').count() == 2
}

/// One logical invoice line item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineItemRecord {
    values: BTreeMap<Column, String>,
    invoice_number: Option<String>,
}

impl LineItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.values.get(&column).map(String::as_str)
    }

    /// Append `text` to the column's value; existing text is kept.
    pub fn append(&mut self, column: Column, text: &str) {
        self.values.entry(column).or_default().push_str(text);
    }

    /// Column values in column order.
    pub fn values(&self) -> impl Iterator<Item = (Column, &str)> {
        self.values.iter().map(|(c, v)| (*c, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn invoice_number(&self) -> Option<&str> {
        self.invoice_number.as_deref()
    }

    pub(crate) fn set_invoice_number(&mut self, number: String) {
        self.invoice_number = Some(number);
    }
}

impl Serialize for LineItemRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.values.len() + usize::from(self.invoice_number.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(number) = &self.invoice_number {
            map.serialize_entry(INVOICE_NUMBER_FIELD, number)?;
        }
        for (column, value) in &self.values {
            map.serialize_entry(column.label(), value)?;
        }
        map.end()
    }
}

/// What the assembler did with a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Opened a new record.
    Primary,
    /// Appended to the active record.
    Continuation,
    /// Arrived before any primary row; dropped.
    Orphan,
}

/// Groups line-item rows into records.
///
/// Two states: no active record (initially) and an active record, always
/// the last one pushed. A primary row pushes a new record and makes it
/// active. Every accepted row appends its classified blocks to the active
/// record. A continuation row with no active record is dropped.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    records: Vec<LineItemRecord>,
    active: Option<usize>,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one row. `classify` is only called for non-blank blocks of
    /// accepted rows.
    pub fn push_row<F>(&mut self, row: &[Block], mut classify: F) -> RowKind
    where
        F: FnMut(&Block) -> Option<Column>,
    {
        let kind = if is_primary_line(&row_text(row)) {
            self.records.push(LineItemRecord::new());
            self.active = Some(self.records.len() - 1);
            RowKind::Primary
        } else if self.active.is_some() {
            RowKind::Continuation
        } else {
            return RowKind::Orphan;
        };

        let Some(record) = self.active.and_then(|i| self.records.get_mut(i)) else {
            return RowKind::Orphan;
        };
        for block in row.iter().filter(|b| !b.is_blank()) {
            if let Some(column) = classify(block) {
                record.append(column, &block.text);
            }
        }
        kind
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn records(&self) -> &[LineItemRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<LineItemRecord> {
        self.records
    }
}
