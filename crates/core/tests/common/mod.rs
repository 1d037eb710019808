#![allow(dead_code)]

use fapiao_core::Fragment;

pub const GLYPH_HEIGHT: f64 = 9.0;
pub const INVOICE_NUMBER: &str = "24442000000123456789";

/// Header labels as (text, x, width), one fragment per label.
pub const HEADER: [(&str, f64, f64); 8] = [
    ("项目名称", 40.0, 40.0),
    ("规格型号", 150.0, 40.0),
    ("单位", 220.0, 20.0),
    ("数量", 270.0, 20.0),
    ("单价", 330.0, 20.0),
    ("金额", 400.0, 20.0),
    ("税率/征收率", 450.0, 55.0),
    ("税额", 540.0, 20.0),
];

/// Builds one page of fragments, rows given top to bottom.
#[derive(Default)]
pub struct PageBuilder {
    fragments: Vec<Fragment>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str, x: f64, y: f64, width: f64) -> Self {
        self.fragments
            .push(Fragment::new(text, x, y, width, GLYPH_HEIGHT));
        self
    }

    pub fn invoice_number(self, y: f64, number: &str) -> Self {
        self.text("发票号码：", 400.0, y, 45.0).text(number, 446.0, y, 100.0)
    }

    pub fn header(mut self, y: f64) -> Self {
        for (label, x, width) in HEADER {
            self = self.text(label, x, y, width);
        }
        self
    }

    pub fn subtotal(self, y: f64, amount: &str, tax: &str) -> Self {
        self.text("小", 40.0, y, 9.0)
            .text("计", 70.0, y, 9.0)
            .text(&format!("¥{amount}"), 390.0, y, 30.0)
            .text(&format!("¥{tax}"), 530.0, y, 30.0)
    }

    /// A line item laid out under the standard header.
    pub fn item(self, y: f64, name: &str, qty: &str, price: &str, amount: &str) -> Self {
        self.text(name, 20.0, y, 120.0)
            .text(qty, 277.0, y, 6.0)
            .text(price, 325.0, y, 25.0)
            .text(amount, 395.0, y, 25.0)
    }

    pub fn build(self) -> Vec<Fragment> {
        self.fragments
    }
}

/// A single-page invoice with the given items, rows 15 units apart.
pub fn invoice_page(items: &[(&str, &str, &str, &str)]) -> Vec<Fragment> {
    let mut page = PageBuilder::new()
        .invoice_number(300.0, INVOICE_NUMBER)
        .header(270.0);
    let mut y = 255.0;
    for (name, qty, price, amount) in items {
        page = page.item(y, name, qty, price, amount);
        y -= 15.0;
    }
    page.subtotal(y, "0.00", "0.00").build()
}
