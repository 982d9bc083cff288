//! # CSV Export
//!
//! Serializes rows to CSV text for download.
//!
//! ## Quoting Rules (legacy, preserved exactly)
//! - A cell is quoted only when it contains a comma; internal quotes are
//!   then doubled.
//! - Booleans stringify as `true`/`false`, missing values as the empty
//!   string.
//! - Rows join with `\n`, no trailing newline.
//! - An empty row set exports as the empty string, header included.
//!
//! Ingestion goes through the `csv` crate ([`crate::source`]); this
//! writer stays hand-rolled so the exported bytes match the legacy tool
//! cell for cell.

use crate::invoice::InvoiceRow;
use crate::item::InventoryItem;
use crate::money::Money;

/// Default file name for the full inventory dump.
pub const INVENTORY_EXPORT_FILE: &str = "inventory.csv";

/// Default file name for the invoice export.
pub const INVOICE_EXPORT_FILE: &str = "invoice.csv";

// =============================================================================
// Row Trait
// =============================================================================

/// A cell value, stringified JS-style.
#[derive(Debug, Clone, PartialEq)]
pub enum CsvValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl CsvValue {
    fn render(&self) -> String {
        match self {
            CsvValue::Text(s) => s.clone(),
            CsvValue::Int(n) => n.to_string(),
            CsvValue::Bool(b) => b.to_string(),
        }
    }
}

/// A record type exportable as one CSV row.
///
/// `headers` fixes the column set and order; `values` must yield one
/// value per header.
pub trait CsvRow {
    fn headers() -> &'static [&'static str];
    fn values(&self) -> Vec<CsvValue>;
}

// =============================================================================
// Writer
// =============================================================================

fn escape_cell(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serializes rows to CSV text. Empty input exports as `""`.
pub fn to_csv<R: CsvRow>(rows: &[R]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        R::headers()
            .iter()
            .map(|h| escape_cell(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.values()
                .iter()
                .map(|v| escape_cell(&v.render()))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

// =============================================================================
// Row Implementations
// =============================================================================

/// Full inventory dump. Columns keep the legacy object key order; the
/// runtime id is internal identity and is not dumped.
impl CsvRow for InventoryItem {
    fn headers() -> &'static [&'static str] {
        &[
            "section",
            "product",
            "unitPrice",
            "count",
            "description",
            "selected",
            "askCount",
        ]
    }

    fn values(&self) -> Vec<CsvValue> {
        vec![
            CsvValue::Text(self.section.clone()),
            CsvValue::Text(self.product.clone()),
            CsvValue::Text(self.unit_price.clone()),
            CsvValue::Int(self.count),
            CsvValue::Text(self.description.clone()),
            CsvValue::Bool(self.selected),
            CsvValue::Int(self.ask_count),
        ]
    }
}

/// Invoice export. Subtotal renders as a bare two-decimal amount.
impl CsvRow for InvoiceRow {
    fn headers() -> &'static [&'static str] {
        &[
            "Section",
            "Product",
            "Description",
            "Unit Price",
            "Quantity",
            "Subtotal",
        ]
    }

    fn values(&self) -> Vec<CsvValue> {
        vec![
            CsvValue::Text(self.section.clone()),
            CsvValue::Text(self.product.clone()),
            CsvValue::Text(self.description.clone()),
            CsvValue::Text(self.unit_price.clone()),
            CsvValue::Int(self.quantity),
            CsvValue::Text(Money::from_cents(self.subtotal_cents).to_decimal_string()),
        ]
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::build_invoice;
    use crate::item::{InventoryItem, StagedItem};
    use crate::money::DiscountRate;
    use crate::source::parse_source_csv;

    #[test]
    fn test_empty_rows_export_empty_string() {
        let rows: Vec<InventoryItem> = Vec::new();
        assert_eq!(to_csv(&rows), "");
    }

    #[test]
    fn test_row_count_is_input_plus_header() {
        let items = vec![
            InventoryItem::new("Dairy", "Milk", "$3.50", 12),
            InventoryItem::new("Pantry", "Rice", "$10.00", 5),
        ];
        let csv = to_csv(&items);
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.starts_with(
            "section,product,unitPrice,count,description,selected,askCount"
        ));
    }

    #[test]
    fn test_cells_with_commas_are_quoted() {
        let mut item = InventoryItem::new("Pantry", "Beans, canned", "$0.99", 8);
        item.description = "say \"hi\", twice".to_string();
        let csv = to_csv(&[item]);

        let data_line = csv.lines().nth(1).unwrap();
        assert!(data_line.contains("\"Beans, canned\""));
        assert!(data_line.contains("\"say \"\"hi\"\", twice\""));
    }

    #[test]
    fn test_cells_without_commas_stay_raw() {
        let mut item = InventoryItem::new("Pantry", "Rice", "$10.00", 5);
        item.description = "long \"grain\"".to_string();
        let csv = to_csv(&[item]);
        // No comma, no quoting, quotes left as-is.
        assert!(csv.lines().nth(1).unwrap().contains("long \"grain\""));
    }

    #[test]
    fn test_booleans_render_js_style() {
        let mut item = InventoryItem::new("Dairy", "Milk", "$3.50", 12);
        item.selected = true;
        let csv = to_csv(&[item]);
        assert!(csv.lines().nth(1).unwrap().ends_with("true,0"));
    }

    #[test]
    fn test_invoice_export_columns() {
        let mut staged =
            StagedItem::from_inventory(&InventoryItem::new("Dairy", "Milk", "$10.00", 12));
        staged.ask_count = 3;
        let summary = build_invoice(&[staged], DiscountRate::zero(), None);
        let csv = to_csv(&summary.rows);

        assert_eq!(
            csv.lines().next().unwrap(),
            "Section,Product,Description,Unit Price,Quantity,Subtotal"
        );
        assert_eq!(csv.lines().nth(1).unwrap(), "Dairy,Milk,,$10.00,3,30.00");
    }

    #[test]
    fn test_inventory_dump_round_trips_through_source_parser() {
        let items = vec![
            InventoryItem::new("Dairy", "Milk, oat", "$3.50", 12),
            InventoryItem::new("Pantry", "Rice", "$10.00", 5),
        ];
        let csv = to_csv(&items);

        // Remap the dump headers onto the source layout and re-parse.
        let renamed = csv.replacen(
            "section,product,unitPrice,count,description,selected,askCount",
            "Section,Product,Unit Price,Count,Description,Selected,AskCount",
            1,
        );
        let parsed = parse_source_csv(&renamed);
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].product, "Milk, oat");
        assert_eq!(parsed.items[0].unit_price, "$3.50");
        assert_eq!(parsed.items[0].count, 12);
        assert_eq!(parsed.items[1].product, "Rice");
    }
}
