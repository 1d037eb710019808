//! Line-item table reconstruction over synthetic invoice pages.

mod common;

use common::{INVOICE_NUMBER, PageBuilder, invoice_page};
use fapiao_core::api::DocumentExtractor;
use fapiao_core::{ClassifierStrategy, Column, ExtractParams, InvoiceNumber, extract_document};

#[test]
fn test_single_item_between_header_and_subtotal() {
    let page = PageBuilder::new()
        .invoice_number(300.0, "12345678901234567890")
        .header(270.0)
        .text("*Widget*", 20.0, 255.0, 40.0)
        .text("DescriptionText", 60.0, 255.0, 60.0)
        .text("2", 277.0, 255.0, 6.0)
        .text("10.00", 325.0, 255.0, 25.0)
        .text("20.00", 395.0, 255.0, 25.0)
        .text("小计", 40.0, 240.0, 18.0)
        .text("¥20.00", 390.0, 240.0, 30.0)
        .text("¥0.00", 535.0, 240.0, 25.0)
        .build();

    let result = extract_document([page], &ExtractParams::default());

    assert_eq!(
        result.invoice_number,
        InvoiceNumber::Found("12345678901234567890".to_string())
    );
    assert_eq!(result.line_items.len(), 1);
    let item = &result.line_items[0];
    assert_eq!(item.get(Column::ItemName), Some("*Widget*DescriptionText"));
    assert_eq!(item.get(Column::Quantity), Some("2"));
    assert_eq!(item.get(Column::UnitPrice), Some("10.00"));
    assert_eq!(item.get(Column::Amount), Some("20.00"));
    assert_eq!(item.get(Column::TaxAmount), None);
    assert_eq!(item.invoice_number(), Some("12345678901234567890"));
    assert!(item.values().all(|(_, v)| !v.contains('小')));
}

#[test]
fn test_wrapped_item_name_is_concatenated() {
    let page = PageBuilder::new()
        .header(270.0)
        .item(255.0, "*电子元件*贴片电阻", "100", "0.10", "10.00")
        .text("0603封装", 40.0, 240.0, 40.0)
        .text("1%精度", 40.0, 225.0, 30.0)
        .subtotal(210.0, "10.00", "1.30")
        .build();

    for strategy in [ClassifierStrategy::ContentSpan, ClassifierStrategy::FixedBounds] {
        let params = ExtractParams::default().with_strategy(strategy);
        let result = extract_document([page.clone()], &params);
        assert_eq!(result.line_items.len(), 1, "{strategy:?}");
        assert_eq!(
            result.line_items[0].get(Column::ItemName),
            Some("*电子元件*贴片电阻0603封装1%精度"),
            "{strategy:?}"
        );
    }
}

#[test]
fn test_each_primary_line_opens_a_record() {
    let page = invoice_page(&[
        ("*食品*饼干", "2", "5.00", "10.00"),
        ("*食品*牛奶", "3", "4.00", "12.00"),
        ("*日用品*纸巾", "1", "8.00", "8.00"),
    ]);
    let result = extract_document([page], &ExtractParams::default());

    let names: Vec<_> = result
        .line_items
        .iter()
        .map(|item| item.get(Column::ItemName).unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["*食品*饼干", "*食品*牛奶", "*日用品*纸巾"]);
    assert_eq!(result.line_items[1].get(Column::Amount), Some("12.00"));
    assert!(
        result
            .line_items
            .iter()
            .all(|item| item.invoice_number() == Some(INVOICE_NUMBER))
    );
}

#[test]
fn test_full_row_with_every_column() {
    let page = PageBuilder::new()
        .header(270.0)
        .text("*家用电器*电风扇", 20.0, 255.0, 120.0)
        .text("FS-40", 150.0, 255.0, 25.0)
        .text("台", 225.0, 255.0, 9.0)
        .text("1", 281.0, 255.0, 6.0)
        .text("199.00", 320.0, 255.0, 30.0)
        .text("199.00", 390.0, 255.0, 30.0)
        .text("13%", 470.0, 255.0, 15.0)
        .text("25.87", 535.0, 255.0, 25.0)
        .subtotal(240.0, "199.00", "25.87")
        .build();

    let result = extract_document([page], &ExtractParams::default());
    assert_eq!(result.line_items.len(), 1);
    let item = &result.line_items[0];
    let values: Vec<(Column, &str)> = item.values().collect();
    assert_eq!(
        values,
        vec![
            (Column::ItemName, "*家用电器*电风扇"),
            (Column::SpecModel, "FS-40"),
            (Column::Unit, "台"),
            (Column::Quantity, "1"),
            (Column::UnitPrice, "199.00"),
            (Column::Amount, "199.00"),
            (Column::TaxRate, "13%"),
            (Column::TaxAmount, "25.87"),
        ]
    );
}

#[test]
fn test_rows_before_first_item_are_dropped() {
    let page = PageBuilder::new()
        .header(270.0)
        .text("stray", 40.0, 255.0, 20.0)
        .item(240.0, "*a*b", "1", "1.00", "1.00")
        .subtotal(225.0, "1.00", "0.00")
        .build();

    let mut extractor = DocumentExtractor::new(ExtractParams::default());
    let summary = extractor.process_page(1, &page);
    assert_eq!(summary.orphan_rows, 1);
    assert_eq!(summary.new_records, 1);
    let result = extractor.finish();
    assert_eq!(result.line_items.len(), 1);
    assert_eq!(result.line_items[0].get(Column::ItemName), Some("*a*b"));
}

#[test]
fn test_items_run_to_page_end_without_subtotal() {
    let page = PageBuilder::new()
        .header(270.0)
        .item(255.0, "*a*first", "1", "1.00", "1.00")
        .item(240.0, "*a*second", "2", "1.00", "2.00")
        .build();

    let mut extractor = DocumentExtractor::new(ExtractParams::default());
    let summary = extractor.process_page(1, &page);
    assert_eq!(summary.line_item_rows, 1..3);
    assert_eq!(extractor.finish().line_items.len(), 2);
}

#[test]
fn test_missing_header_degrades_to_first_row() {
    let page = PageBuilder::new()
        .text("电子发票（普通发票）", 200.0, 300.0, 100.0)
        .item(255.0, "*a*b", "1", "1.00", "1.00")
        .build();

    let mut extractor = DocumentExtractor::new(ExtractParams::default());
    let summary = extractor.process_page(1, &page);
    assert_eq!(summary.header_row, Some(0));
    let header = extractor.header().unwrap();
    assert!(!header.confirmed);
    assert_eq!(header.columns.discovered(), 0);

    // The record opens but its blocks have no column to go to.
    let result = extractor.finish();
    assert_eq!(result.line_items.len(), 1);
    assert!(result.line_items[0].is_empty());
    assert_eq!(result.invoice_number, InvoiceNumber::LabelNotFound);
}
