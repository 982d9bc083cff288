//! # Invoice Commands
//!
//! Commands behind the invoice view: derived totals, discount, manual
//! total override, invoice export.

use tauri::State;
use tracing::debug;

use restock_core::export::INVOICE_EXPORT_FILE;
use restock_core::money::parse_price;
use restock_core::{DiscountRate, InvoiceSummary};

use crate::commands::ExportPayload;
use crate::state::WorkbenchState;

/// Returns the invoice derived from the current stage.
#[tauri::command]
pub fn get_invoice(workbench: State<'_, WorkbenchState>) -> InvoiceSummary {
    debug!("get_invoice command");
    workbench.with_workbench(|wb| wb.invoice())
}

/// Sets the invoice discount in whole percent (clamped to 0..=100).
/// A changed discount clears the manual override.
#[tauri::command]
pub fn set_discount(workbench: State<'_, WorkbenchState>, percent: i64) -> InvoiceSummary {
    debug!(percent, "set_discount command");

    workbench.with_workbench_mut(|wb| {
        wb.set_discount(DiscountRate::from_percent(percent));
        wb.invoice()
    })
}

/// Sets or clears the manual total override.
///
/// Empty or missing input clears the override; anything else is parsed
/// like a price.
#[tauri::command]
pub fn set_manual_total(
    workbench: State<'_, WorkbenchState>,
    value: Option<String>,
) -> InvoiceSummary {
    debug!(?value, "set_manual_total command");

    let parsed = value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(parse_price);

    workbench.with_workbench_mut(|wb| {
        wb.set_manual_total(parsed);
        wb.invoice()
    })
}

/// Exports the invoice rows as CSV text.
#[tauri::command]
pub fn export_invoice_csv(workbench: State<'_, WorkbenchState>) -> ExportPayload {
    debug!("export_invoice_csv command");

    ExportPayload {
        file_name: INVOICE_EXPORT_FILE.to_string(),
        content: workbench.with_workbench(|wb| wb.export_invoice_csv()),
    }
}
