//! Invoice number recovery.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::layout::{Row, row_text};

const LABELS: [&str; 2] = ["发票号码：", "发票号码:"];

/// ASCII word runs; the number is the run made of exactly 20 digits.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

const NUMBER_LEN: usize = 20;

/// Outcome of the invoice-number search for one document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvoiceNumber {
    Found(String),
    /// The label row was found but carries no 20-digit number.
    NumberMissing,
    /// No page has the label.
    LabelNotFound,
}

impl InvoiceNumber {
    pub fn as_found(&self) -> Option<&str> {
        match self {
            InvoiceNumber::Found(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceNumber::Found(n) => f.write_str(n),
            InvoiceNumber::NumberMissing => {
                write!(f, "No invoice number found on the same line as \"{}\"", LABELS[0])
            }
            InvoiceNumber::LabelNotFound => f.write_str("发票号码 is not found"),
        }
    }
}

impl Serialize for InvoiceNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn find_number(text: &str) -> Option<&str> {
    WORD.find_iter(text)
        .map(|m| m.as_str())
        .find(|w| w.len() == NUMBER_LEN && w.bytes().all(|b| b.is_ascii_digit()))
}

/// Scan one page's rows for the invoice-number label.
///
/// Returns `None` when no row carries the label. Only the first labelled
/// row is examined.
pub fn find_invoice_number(rows: &[Row]) -> Option<InvoiceNumber> {
    let text = rows
        .iter()
        .map(|row| row_text(row))
        .find(|text| LABELS.iter().any(|label| text.contains(label)))?;

    Some(match find_number(&text) {
        Some(number) => InvoiceNumber::Found(number.to_string()),
        None => InvoiceNumber::NumberMissing,
    })
}
