//! # Source Catalog Ingestion
//!
//! Parses the source catalog CSV into inventory items.
//!
//! ## Format
//! Header columns `Section, Product, Unit Price, Count, Description`;
//! commas inside quoted fields are supported, empty lines are skipped,
//! missing columns fall back to empty values. Column order does not
//! matter, mapping is by header name.
//!
//! The parser takes text and returns items; reading the file (or fetching
//! the resource) is the caller's concern. Records that fail to parse are
//! counted and skipped, never fatal.

use csv::ReaderBuilder;
use serde::Deserialize;

use crate::item::{new_item_id, parse_count_input, InventoryItem};

/// One raw record of the source catalog, mapped by header name.
///
/// Every column is optional; `Count` stays text here and is coerced when
/// the record becomes an item.
#[derive(Debug, Deserialize)]
struct SourceRecord {
    #[serde(rename = "Section", default)]
    section: String,
    #[serde(rename = "Product", default)]
    product: String,
    #[serde(rename = "Unit Price", default)]
    unit_price: String,
    #[serde(rename = "Count", default)]
    count: String,
    #[serde(rename = "Description", default)]
    description: String,
}

impl SourceRecord {
    fn into_item(self) -> InventoryItem {
        InventoryItem {
            id: new_item_id(),
            section: self.section,
            product: self.product,
            description: self.description,
            unit_price: self.unit_price,
            count: parse_count_input(&self.count),
            selected: false,
            ask_count: 0,
        }
    }
}

/// Result of parsing a source catalog.
#[derive(Debug, Default)]
pub struct ParsedSource {
    /// Items in source order.
    pub items: Vec<InventoryItem>,
    /// Records dropped because they failed to parse.
    pub skipped: usize,
}

/// Parses source catalog CSV text.
///
/// Per-record failures are skipped and counted; the worst outcome of any
/// input is an empty item list, never an error.
pub fn parse_source_csv(text: &str) -> ParsedSource {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut parsed = ParsedSource::default();
    for record in reader.deserialize::<SourceRecord>() {
        match record {
            Ok(record) => parsed.items.push(record.into_item()),
            Err(_) => parsed.skipped += 1,
        }
    }
    parsed
}

// =============================================================================
// Unit Tests
// =============================================================================
