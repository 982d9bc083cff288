//! # Item Types
//!
//! Inventory and staged item types, plus the coercion helpers applied to
//! every user-supplied field value.
//!
//! ## Stable Identity
//! Every item carries an `id` (UUID v4 as a string) assigned once at
//! creation. Staged copies keep the id of the inventory row they came
//! from, and all staged/prior matching runs on the id. Duplicate product
//! names within a section therefore cannot collide.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::{parse_price, Money};

/// Generates a fresh item id.
#[inline]
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A row of the inventory.
///
/// `unit_price` is kept as the raw text the user sees and edits (it may
/// carry a non-digit prefix such as "$" when loaded from the source
/// catalog); the cents value is derived on demand. `count` and
/// `ask_count` are clamped non-negative by every mutation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryItem {
    /// Stable identifier (UUID v4), assigned at creation.
    pub id: String,

    /// Section this item belongs to (aisle, category).
    pub section: String,

    /// Product name shown in every table.
    pub product: String,

    /// Free-text description.
    pub description: String,

    /// Price text as displayed and edited.
    pub unit_price: String,

    /// Units currently in stock.
    pub count: i64,

    /// Whether the row is ticked for staging.
    pub selected: bool,

    /// Order quantity. Stays 0 on inventory rows; staged copies own the
    /// live value.
    pub ask_count: i64,
}

impl InventoryItem {
    /// Creates a new item with a fresh id, unselected, ask count 0.
    pub fn new(section: &str, product: &str, unit_price: &str, count: i64) -> Self {
        InventoryItem {
            id: new_item_id(),
            section: section.to_string(),
            product: product.to_string(),
            description: String::new(),
            unit_price: unit_price.to_string(),
            count: count.max(0),
            selected: false,
            ask_count: 0,
        }
    }

    /// Parses the price text into cents.
    #[inline]
    pub fn unit_price_money(&self) -> Money {
        parse_price(&self.unit_price)
    }
}

// =============================================================================
// Staged Item
// =============================================================================

/// An item staged for procurement.
///
/// Structurally identical to [`InventoryItem`]; created by copying a
/// selected inventory row with `ask_count` reset to 0. The copy has an
/// independent lifetime: later inventory edits do not reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StagedItem {
    /// Id of the inventory row this copy was made from.
    pub id: String,
    pub section: String,
    pub product: String,
    pub description: String,
    pub unit_price: String,
    /// Units in stock at stage time (frozen).
    pub count: i64,
    pub selected: bool,
    /// Order quantity, edited on the stage table. Clamped non-negative.
    pub ask_count: i64,
}

impl StagedItem {
    /// Copies an inventory row into the stage with ask count reset.
    pub fn from_inventory(item: &InventoryItem) -> Self {
        StagedItem {
            id: item.id.clone(),
            section: item.section.clone(),
            product: item.product.clone(),
            description: item.description.clone(),
            unit_price: item.unit_price.clone(),
            count: item.count,
            selected: item.selected,
            ask_count: 0,
        }
    }

    /// Parses the price text into cents.
    #[inline]
    pub fn unit_price_money(&self) -> Money {
        parse_price(&self.unit_price)
    }

    /// Line subtotal: unit price times ask count.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price_money().multiply_quantity(self.ask_count)
    }
}

// =============================================================================
// Editable Fields
// =============================================================================

/// The inventory fields editable in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum ItemField {
    Section,
    Product,
    Description,
    UnitPrice,
    Count,
}

// =============================================================================
// Input Coercion
// =============================================================================

/// Sanitizes price input to digits and decimal points.
///
/// Applied when the unit price is edited in place; source-catalog values
/// are stored as-is (prefix and all) until first edited.
pub fn sanitize_price_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Coerces count input to a non-negative integer.
///
/// Reads the leading integer literal after optional whitespace and sign;
/// anything else degrades to 0, and negative input clamps to 0.
pub fn parse_count_input(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    let mut saw_digit = false;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => {
                saw_digit = true;
                value = value.saturating_mul(10).saturating_add(d as i64);
            }
            None => break,
        }
    }

    if !saw_digit || negative {
        0
    } else {
        value
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
