//! # Invoice Calculator
//!
//! Pure derivation of invoice rows and totals from the staged items.
//!
//! ## Derivation Chain
//! ```text
//! staged items ──filter ask_count > 0──► invoice rows
//!      │                                     │
//!      │                         subtotal = ask_count × unit price
//!      ▼                                     ▼
//!   total = Σ subtotal ──discount──► discounted total (ceil to $5)
//!                                            │
//!            manual override (if set) ──────►│
//!                                            ▼
//!                                    displayed total
//! ```
//!
//! Nothing here is stored; the summary is recomputed from the staged
//! collection on demand.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::item::StagedItem;
use crate::money::{discounted_total, DiscountRate, Money};

/// One line of the invoice. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceRow {
    pub section: String,
    pub product: String,
    pub description: String,
    /// Price text exactly as carried on the staged item.
    pub unit_price: String,
    /// Ordered quantity (the item's ask count).
    pub quantity: i64,
    /// Line subtotal in cents.
    pub subtotal_cents: i64,
}

impl InvoiceRow {
    /// The line subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }
}

/// The derived invoice: rows plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceSummary {
    pub rows: Vec<InvoiceRow>,

    /// Sum of line subtotals, in cents. Never affected by the discount
    /// or the manual override.
    pub total_cents: i64,

    /// Discount applied to the displayed total, whole percent.
    pub discount_percent: u8,

    /// Discounted total rounded up to the next $5, in cents.
    pub discounted_total_cents: i64,

    /// What the user sees: the manual override when set, otherwise the
    /// discounted total.
    pub displayed_total_cents: i64,

    /// Whether a manual override is in effect.
    pub manual_override: bool,
}

/// Builds the invoice summary from staged items.
///
/// Only items with `ask_count > 0` produce rows. `manual_total`, when
/// set, replaces the displayed total but never the underlying total.
pub fn build_invoice(
    staged: &[StagedItem],
    discount: DiscountRate,
    manual_total: Option<Money>,
) -> InvoiceSummary {
    let rows: Vec<InvoiceRow> = staged
        .iter()
        .filter(|item| item.ask_count > 0)
        .map(|item| InvoiceRow {
            section: item.section.clone(),
            product: item.product.clone(),
            description: item.description.clone(),
            unit_price: item.unit_price.clone(),
            quantity: item.ask_count,
            subtotal_cents: item.subtotal().cents(),
        })
        .collect();

    let total: Money = rows.iter().map(InvoiceRow::subtotal).sum();
    let discounted = discounted_total(total, discount);
    let displayed = manual_total.unwrap_or(discounted);

    InvoiceSummary {
        rows,
        total_cents: total.cents(),
        discount_percent: discount.percent(),
        discounted_total_cents: discounted.cents(),
        displayed_total_cents: displayed.cents(),
        manual_override: manual_total.is_some(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
