// Invoice editor: the form that owns the numeric values and feeds them to the fields.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::size::rem;
use shared::DocumentStatus;

use crate::components::{NumericTextField, PermissionGate, StatusBadge};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::{AppState, InvoiceDraft};

// Stands in for an invoice fetched from the backend.
fn saved_invoice() -> InvoiceDraft {
    InvoiceDraft {
        number: "INV-0042".to_string(),
        status: DocumentStatus::Pending,
        unit_price: Some(2_500_000.0),
        quantity: Some(1.0),
        discount: None,
    }
}

#[component]
pub fn InvoiceForm() -> Element {
    let config = use_context::<AppConfig>();
    let palette = use_context::<ThemePalette>();
    let mut state = use_context::<Signal<AppState>>();

    let money = config.number_format();
    let count = money.with_max_fraction_digits(Some(0));
    let placeholder = config.number_field.placeholder.clone();
    let input_style = palette.input_style();
    let gap = rem(12.0);
    let max_width = rem(480.0);

    let invoice = state.read().invoice.clone();
    let number = invoice.number.clone();
    let total = money.format_value(Some(invoice.total()));

    rsx! {
        div {
            class: "invoice-form",
            style: "display: flex; flex-direction: column; gap: {gap}; max-width: {max_width};",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { "Invoice {number}" }
                StatusBadge { status: invoice.status }
            }
            label {
                "Unit price"
                NumericTextField {
                    value: invoice.unit_price,
                    onchange: move |next: Option<f64>| {
                        state.write().invoice.unit_price = next;
                    },
                    placeholder: placeholder.clone(),
                    format: money,
                    style: "{input_style}",
                }
            }
            label {
                "Quantity"
                NumericTextField {
                    value: invoice.quantity,
                    onchange: move |next: Option<f64>| {
                        state.write().invoice.quantity = next;
                    },
                    placeholder: "1",
                    format: count,
                    style: "{input_style}",
                }
            }
            label {
                "Discount"
                NumericTextField {
                    value: invoice.discount,
                    onchange: move |next: Option<f64>| {
                        state.write().invoice.discount = next;
                    },
                    placeholder: placeholder.clone(),
                    format: money,
                    style: "{input_style}",
                }
            }
            p { style: "text-align: right; font-weight: bold;", "Total: {total}" }
            div {
                style: "display: flex; gap: {gap};",
                button {
                    onclick: move |_| state.write().load_invoice(saved_invoice()),
                    "Load saved invoice"
                }
                button {
                    onclick: move |_| state.write().clear_invoice(),
                    "Clear"
                }
                PermissionGate {
                    permissions: config.permissions.clone(),
                    capability: "invoice.create",
                    button {
                        onclick: move |_| {
                            let mut state = state.write();
                            tracing::info!(
                                "Submitting invoice {} with total {}",
                                state.invoice.number,
                                state.invoice.total()
                            );
                            state.invoice.status = DocumentStatus::Pending;
                        },
                        "Submit for approval"
                    }
                }
                PermissionGate {
                    permissions: config.permissions.clone(),
                    capability: "invoice.approve",
                    button {
                        onclick: move |_| {
                            state.write().invoice.status = DocumentStatus::Approved;
                        },
                        "Approve"
                    }
                }
            }
        }
    }
}
