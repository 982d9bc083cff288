//! # Section View
//!
//! Explicit, memoized grouping of the flat inventory into sections.
//!
//! The grouping is rebuilt only when the inventory version moves, so the
//! cost of a refresh is O(1) for every render that did not mutate the
//! collection.

use crate::inventory::Inventory;

/// One named group of inventory rows.
///
/// `rows` holds flat indices into [`Inventory::items`], in inventory
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub rows: Vec<usize>,
}

/// Memoized section grouping keyed on the inventory version.
#[derive(Debug, Clone, Default)]
pub struct SectionView {
    seen_version: Option<u64>,
    sections: Vec<Section>,
}

impl SectionView {
    pub fn new() -> Self {
        SectionView::default()
    }

    /// Rebuilds the grouping if the inventory changed since the last
    /// refresh. Returns whether a rebuild happened.
    pub fn refresh(&mut self, inventory: &Inventory) -> bool {
        if self.seen_version == Some(inventory.version()) {
            return false;
        }

        self.sections.clear();
        for (flat, item) in inventory.items().iter().enumerate() {
            match self.sections.iter_mut().find(|s| s.name == item.section) {
                Some(section) => section.rows.push(flat),
                None => self.sections.push(Section {
                    name: item.section.clone(),
                    rows: vec![flat],
                }),
            }
        }
        self.seen_version = Some(inventory.version());
        true
    }

    /// The grouped sections, in first-appearance order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{InventoryItem, ItemField};

    fn sample() -> Inventory {
        Inventory::from_items(vec![
            InventoryItem::new("Dairy", "Milk", "$3.50", 12),
            InventoryItem::new("Pantry", "Rice", "$10.00", 5),
            InventoryItem::new("Dairy", "Yogurt", "$1.25", 30),
        ])
    }

    #[test]
    fn test_groups_in_first_appearance_order() {
        let inv = sample();
        let mut view = SectionView::new();
        assert!(view.refresh(&inv));

        let names: Vec<&str> = view.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Dairy", "Pantry"]);
        assert_eq!(view.sections()[0].rows, vec![0, 2]);
        assert_eq!(view.sections()[1].rows, vec![1]);
    }

    #[test]
    fn test_refresh_is_noop_at_same_version() {
        let inv = sample();
        let mut view = SectionView::new();
        assert!(view.refresh(&inv));
        assert!(!view.refresh(&inv));
        assert!(!view.refresh(&inv));
    }

    #[test]
    fn test_refresh_rebuilds_after_mutation() {
        let mut inv = sample();
        let mut view = SectionView::new();
        view.refresh(&inv);

        inv.set_field("Pantry", 0, ItemField::Section, "Dry Goods")
            .unwrap();
        assert!(view.refresh(&inv));

        let names: Vec<&str> = view.sections().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Dairy", "Dry Goods"]);
    }

    #[test]
    fn test_empty_inventory_has_no_sections() {
        let inv = Inventory::new();
        let mut view = SectionView::new();
        view.refresh(&inv);
        assert!(view.sections().is_empty());
    }
}
