//! # Inventory Collection
//!
//! The ordered, versioned collection of inventory items.
//!
//! ## Addressing
//! The frontend renders the inventory grouped by section, so every
//! mutation addresses a row as `(section, index-within-section)`. The
//! flat order of the collection is authoritative; the grouping is a
//! derived view (see [`crate::sections`]).
//!
//! ## Versioning
//! Every successful mutation bumps `version`. Derived views key their
//! caches on it instead of re-deriving per render.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::item::{parse_count_input, sanitize_price_input, InventoryItem, ItemField};

/// Ordered inventory collection with a mutation version counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    #[serde(skip)]
    version: u64,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Creates an inventory from existing items (snapshot restore).
    pub fn from_items(items: Vec<InventoryItem>) -> Self {
        Inventory { items, version: 0 }
    }

    /// All items in flat order.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current mutation version. Strictly increases on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of rows currently ticked for staging.
    pub fn selected_count(&self) -> usize {
        self.items.iter().filter(|i| i.selected).count()
    }

    /// Resolves `(section, index-within-section)` to a flat index.
    fn resolve(&self, section: &str, index: usize) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.section == section)
            .nth(index)
            .map(|(flat, _)| flat)
    }

    fn resolve_or_err(&self, section: &str, index: usize) -> CoreResult<usize> {
        self.resolve(section, index)
            .ok_or_else(|| CoreError::ItemNotFound {
                section: section.to_string(),
                index,
            })
    }

    /// Edits one field of a row in place.
    ///
    /// Price input is sanitized to digits and decimal points; count input
    /// is coerced to a non-negative integer. Text fields are stored
    /// verbatim.
    pub fn set_field(
        &mut self,
        section: &str,
        index: usize,
        field: ItemField,
        value: &str,
    ) -> CoreResult<()> {
        let flat = self.resolve_or_err(section, index)?;
        let item = &mut self.items[flat];

        match field {
            ItemField::Section => item.section = value.to_string(),
            ItemField::Product => item.product = value.to_string(),
            ItemField::Description => item.description = value.to_string(),
            ItemField::UnitPrice => item.unit_price = sanitize_price_input(value),
            ItemField::Count => item.count = parse_count_input(value),
        }

        self.version += 1;
        Ok(())
    }

    /// Toggles the staging tick on a row.
    pub fn toggle_selected(&mut self, section: &str, index: usize) -> CoreResult<()> {
        let flat = self.resolve_or_err(section, index)?;
        self.items[flat].selected = !self.items[flat].selected;
        self.version += 1;
        Ok(())
    }

    /// Removes a row.
    pub fn remove(&mut self, section: &str, index: usize) -> CoreResult<()> {
        let flat = self.resolve_or_err(section, index)?;
        self.items.remove(flat);
        self.version += 1;
        Ok(())
    }

    /// Adds a new row to a section and re-sorts the collection.
    ///
    /// The product name must be non-empty after trimming. Price and count
    /// inputs are coerced like in-place edits. After insertion the whole
    /// collection is sorted by section rank (first-appearance order, new
    /// sections last) then product name, case-insensitively.
    ///
    /// Returns the id of the new row.
    pub fn add_to_section(
        &mut self,
        section: &str,
        product: &str,
        price: &str,
        count: &str,
    ) -> CoreResult<String> {
        if product.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "product".to_string(),
            }
            .into());
        }

        let item = InventoryItem::new(
            section,
            product.trim(),
            &sanitize_price_input(price),
            parse_count_input(count),
        );
        let id = item.id.clone();
        self.items.push(item);
        self.sort_by_section_then_product();
        self.version += 1;
        Ok(id)
    }

    /// Replaces the whole collection (source reload or snapshot restore),
    /// discarding any in-place edits.
    pub fn replace_all(&mut self, items: Vec<InventoryItem>) {
        self.items = items;
        self.version += 1;
    }

    /// Sorts by section rank (first-appearance order) then product name,
    /// case-insensitively. Stable, so equal keys keep their order.
    fn sort_by_section_then_product(&mut self) {
        let mut ranks: Vec<String> = Vec::new();
        for item in &self.items {
            if !ranks.contains(&item.section) {
                ranks.push(item.section.clone());
            }
        }

        self.items.sort_by_cached_key(|item| {
            let rank = ranks
                .iter()
                .position(|s| *s == item.section)
                .unwrap_or(ranks.len());
            (rank, item.product.to_lowercase())
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Inventory {
        Inventory::from_items(vec![
            InventoryItem::new("Dairy", "Milk", "$3.50", 12),
            InventoryItem::new("Dairy", "Yogurt", "$1.25", 30),
            InventoryItem::new("Pantry", "Rice", "$10.00", 5),
        ])
    }

    #[test]
    fn test_resolve_by_section_and_index() {
        let mut inv = sample();
        inv.toggle_selected("Pantry", 0).unwrap();
        assert!(inv.items()[2].selected);

        inv.toggle_selected("Dairy", 1).unwrap();
        assert!(inv.items()[1].selected);
        assert!(!inv.items()[0].selected);
    }

    #[test]
    fn test_unknown_address_errors() {
        let mut inv = sample();
        let err = inv.toggle_selected("Dairy", 5).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound { .. }));

        let err = inv
            .set_field("Frozen", 0, ItemField::Product, "Peas")
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound { .. }));
    }

    #[test]
    fn test_set_field_coerces_price_and_count() {
        let mut inv = sample();

        inv.set_field("Dairy", 0, ItemField::UnitPrice, "$4.x99")
            .unwrap();
        assert_eq!(inv.items()[0].unit_price, "4.99");

        inv.set_field("Dairy", 0, ItemField::Count, "15kg").unwrap();
        assert_eq!(inv.items()[0].count, 15);

        inv.set_field("Dairy", 0, ItemField::Count, "-3").unwrap();
        assert_eq!(inv.items()[0].count, 0);

        inv.set_field("Dairy", 0, ItemField::Count, "junk").unwrap();
        assert_eq!(inv.items()[0].count, 0);
    }

    #[test]
    fn test_set_field_can_move_between_sections() {
        let mut inv = sample();
        inv.set_field("Dairy", 1, ItemField::Section, "Pantry")
            .unwrap();
        assert_eq!(inv.items()[1].section, "Pantry");
        // Addressing follows the new grouping: Pantry now has two rows.
        assert!(inv.resolve("Pantry", 1).is_some());
    }

    #[test]
    fn test_remove() {
        let mut inv = sample();
        inv.remove("Dairy", 0).unwrap();
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.items()[0].product, "Yogurt");
    }

    #[test]
    fn test_add_rejects_empty_product() {
        let mut inv = sample();
        let err = inv.add_to_section("Dairy", "   ", "1.00", "1").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn test_add_sorts_within_section_case_insensitively() {
        let mut inv = sample();
        inv.add_to_section("Dairy", "butter", "$2.00", "8").unwrap();

        let dairy: Vec<&str> = inv
            .items()
            .iter()
            .filter(|i| i.section == "Dairy")
            .map(|i| i.product.as_str())
            .collect();
        assert_eq!(dairy, vec!["butter", "Milk", "Yogurt"]);

        // Section blocks keep their first-appearance order.
        assert_eq!(inv.items()[3].section, "Pantry");
    }

    #[test]
    fn test_add_new_section_sorts_last() {
        let mut inv = sample();
        inv.add_to_section("Frozen", "Peas", "$1.00", "4").unwrap();
        assert_eq!(inv.items().last().unwrap().section, "Frozen");
    }

    #[test]
    fn test_add_coerces_price_and_count() {
        let mut inv = Inventory::new();
        let id = inv.add_to_section("Misc", "Tape", "$1.5a0", "2x").unwrap();
        let item = &inv.items()[0];
        assert_eq!(item.id, id);
        assert_eq!(item.unit_price, "1.50");
        assert_eq!(item.count, 2);
    }

    #[test]
    fn test_version_bumps_on_every_mutation() {
        let mut inv = sample();
        let v0 = inv.version();

        inv.toggle_selected("Dairy", 0).unwrap();
        inv.set_field("Dairy", 0, ItemField::Count, "9").unwrap();
        inv.remove("Pantry", 0).unwrap();
        inv.add_to_section("Dairy", "Cream", "3.00", "1").unwrap();
        inv.replace_all(Vec::new());

        assert_eq!(inv.version(), v0 + 5);
    }

    #[test]
    fn test_failed_mutation_keeps_version() {
        let mut inv = sample();
        let v0 = inv.version();
        let _ = inv.toggle_selected("Nope", 0);
        assert_eq!(inv.version(), v0);
    }
}
