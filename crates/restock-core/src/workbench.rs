//! # Workbench
//!
//! The application state object: inventory, staged items, history,
//! discount and the manual total override, with every transition the UI
//! can trigger. Holds no I/O and no rendering concerns, so the whole
//! state machine is unit-testable without a UI harness.
//!
//! ## State And Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Workbench                                      │
//! │                                                                         │
//! │  inventory ◄── set_field / toggle_selected / remove_item /             │
//! │      │         add_item / load_inventory                               │
//! │      │ generate_stage (copy selected, ask 0)                           │
//! │      ▼                                                                  │
//! │  staged ◄───── set_ask_count / restore_prior_ask_counts                │
//! │      │                                                                  │
//! │      │ every staged change records a snapshot (dedup, cap 10)          │
//! │      ▼                                                                  │
//! │  history                                                                │
//! │                                                                         │
//! │  discount, manual_total ◄── set_discount / set_manual_total            │
//! │  (any staged or discount change clears the manual override)            │
//! │                                                                         │
//! │  invoice() derives rows and totals; nothing derived is stored.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::CoreResult;
use crate::export::to_csv;
use crate::history::HistoryLedger;
use crate::inventory::Inventory;
use crate::invoice::{build_invoice, InvoiceSummary};
use crate::item::{parse_count_input, InventoryItem, ItemField, StagedItem};
use crate::money::{DiscountRate, Money};
use crate::sections::{Section, SectionView};
use crate::CoreError;

/// Application state and its transition functions.
#[derive(Debug, Default)]
pub struct Workbench {
    inventory: Inventory,
    sections: SectionView,
    staged: Vec<StagedItem>,
    history: HistoryLedger,
    discount: DiscountRate,
    manual_total: Option<Money>,
}

impl Workbench {
    /// Creates an empty workbench.
    pub fn new() -> Self {
        Workbench::default()
    }

    /// Rebuilds a workbench from persisted parts. Absent parts default to
    /// empty; discount and the manual override are session state and
    /// always start fresh.
    pub fn from_parts(
        inventory: Option<Vec<InventoryItem>>,
        staged: Option<Vec<StagedItem>>,
        history: Option<HistoryLedger>,
    ) -> Self {
        Workbench {
            inventory: Inventory::from_items(inventory.unwrap_or_default()),
            sections: SectionView::new(),
            staged: staged.unwrap_or_default(),
            history: history.unwrap_or_default(),
            discount: DiscountRate::zero(),
            manual_total: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn staged(&self) -> &[StagedItem] {
        &self.staged
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn discount(&self) -> DiscountRate {
        self.discount
    }

    pub fn manual_total(&self) -> Option<Money> {
        self.manual_total
    }

    /// Runs `f` with the memoized section grouping and the flat items.
    ///
    /// The grouping refreshes only when the inventory version moved since
    /// the last call.
    pub fn with_sections<R>(&mut self, f: impl FnOnce(&[Section], &[InventoryItem]) -> R) -> R {
        self.sections.refresh(&self.inventory);
        f(self.sections.sections(), self.inventory.items())
    }

    // =========================================================================
    // Inventory Transitions
    // =========================================================================

    /// Replaces the inventory wholesale (source load or reload). Staged
    /// items are decoupled copies and stay as they are.
    pub fn load_inventory(&mut self, items: Vec<InventoryItem>) {
        self.inventory.replace_all(items);
    }

    /// Edits one inventory field in place.
    pub fn set_field(
        &mut self,
        section: &str,
        index: usize,
        field: ItemField,
        value: &str,
    ) -> CoreResult<()> {
        self.inventory.set_field(section, index, field, value)
    }

    /// Toggles the staging tick on an inventory row.
    pub fn toggle_selected(&mut self, section: &str, index: usize) -> CoreResult<()> {
        self.inventory.toggle_selected(section, index)
    }

    /// Removes an inventory row.
    pub fn remove_item(&mut self, section: &str, index: usize) -> CoreResult<()> {
        self.inventory.remove(section, index)
    }

    /// Adds an inventory row to a section. Returns the new row's id.
    pub fn add_item(
        &mut self,
        section: &str,
        product: &str,
        price: &str,
        count: &str,
    ) -> CoreResult<String> {
        self.inventory.add_to_section(section, product, price, count)
    }

    // =========================================================================
    // Stage Transitions
    // =========================================================================

    /// Replaces the staged collection with copies of the selected
    /// inventory rows, ask counts reset to 0. Prior staged edits are
    /// discarded (they live on in history if recorded).
    pub fn generate_stage(&mut self) {
        self.staged = self
            .inventory
            .items()
            .iter()
            .filter(|item| item.selected)
            .map(StagedItem::from_inventory)
            .collect();
        self.touch_staged();
    }

    /// Sets the ask count of a staged row from raw input, clamped
    /// non-negative.
    pub fn set_ask_count(&mut self, index: usize, raw: &str) -> CoreResult<()> {
        let item = self
            .staged
            .get_mut(index)
            .ok_or(CoreError::StageIndexOutOfRange { index })?;
        item.ask_count = parse_count_input(raw);
        self.touch_staged();
        Ok(())
    }

    /// Restores the previous ask-count state from history.
    ///
    /// Pops the current snapshot, reads the new last entry as "prior",
    /// and copies each prior ask count onto the matching staged item (by
    /// id). Staged items absent from the prior snapshot keep their
    /// current ask count. Returns false when there was nothing to pop.
    pub fn restore_prior_ask_counts(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }

        let prior: Vec<StagedItem> = self
            .history
            .last()
            .map(|entries| entries.to_vec())
            .unwrap_or_default();
        for item in &mut self.staged {
            if let Some(previous) = prior.iter().find(|p| p.id == item.id) {
                item.ask_count = previous.ask_count;
            }
        }

        self.touch_staged();
        true
    }

    // =========================================================================
    // Invoice Transitions
    // =========================================================================

    /// Sets the discount. A changed discount clears the manual override.
    pub fn set_discount(&mut self, discount: DiscountRate) {
        if self.discount != discount {
            self.discount = discount;
            self.manual_total = None;
        }
    }

    /// Sets or clears the manual total override. The override replaces
    /// the displayed total only; the underlying total is untouched.
    pub fn set_manual_total(&mut self, value: Option<Money>) {
        self.manual_total = value;
    }

    /// Derives the invoice summary from the current staged items.
    pub fn invoice(&self) -> InvoiceSummary {
        build_invoice(&self.staged, self.discount, self.manual_total)
    }

    // =========================================================================
    // Exports
    // =========================================================================

    /// Full inventory dump as CSV text.
    pub fn export_inventory_csv(&self) -> String {
        to_csv(self.inventory.items())
    }

    /// Invoice rows as CSV text.
    pub fn export_invoice_csv(&self) -> String {
        to_csv(&self.invoice().rows)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Records the staged state in history; a by-value change also clears
    /// the manual override.
    fn touch_staged(&mut self) {
        if self.history.record(&self.staged) {
            self.manual_total = None;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
