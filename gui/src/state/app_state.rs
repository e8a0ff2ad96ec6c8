// Form state for the GUI.
// This is the external source of truth the numeric fields read from and
// report back to; the fields themselves only keep display text.

use serde::{Deserialize, Serialize};
use shared::DocumentStatus;

use crate::config::AppConfig;

/// Invoice being edited. `None` means the user left the field empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub number: String,
    pub status: DocumentStatus,
    pub unit_price: Option<f64>,
    pub quantity: Option<f64>,
    pub discount: Option<f64>,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            number: "INV-0001".to_string(),
            status: DocumentStatus::Draft,
            unit_price: Some(0.0),
            quantity: Some(1.0),
            discount: None,
        }
    }
}

impl InvoiceDraft {
    // Empty fields count as zero, except quantity which defaults to one line item.
    pub fn total(&self) -> f64 {
        let gross = self.unit_price.unwrap_or(0.0) * self.quantity.unwrap_or(1.0);
        (gross - self.discount.unwrap_or(0.0)).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub language: String, // e.g., "pt-BR", "en-US"
    pub invoice: InvoiceDraft,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            language: "pt-BR".to_string(),
            invoice: InvoiceDraft::default(),
        }
    }
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            language: config.app.language.clone(),
            invoice: InvoiceDraft::default(),
        }
    }

    // Replaces the invoice as if it had been fetched from the backend.
    pub fn load_invoice(&mut self, invoice: InvoiceDraft) {
        tracing::info!("Loaded invoice {} ({})", invoice.number, invoice.status);
        self.invoice = invoice;
    }

    pub fn clear_invoice(&mut self) {
        self.invoice = InvoiceDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_with_empty_fields() {
        let draft = InvoiceDraft {
            unit_price: None,
            quantity: None,
            discount: None,
            ..InvoiceDraft::default()
        };
        assert_eq!(draft.total(), 0.0);
    }

    #[test]
    fn test_total_never_negative() {
        let draft = InvoiceDraft {
            unit_price: Some(100.0),
            quantity: Some(2.0),
            discount: Some(500.0),
            ..InvoiceDraft::default()
        };
        assert_eq!(draft.total(), 0.0);
    }

    #[test]
    fn test_total() {
        let draft = InvoiceDraft {
            unit_price: Some(1250000.0),
            quantity: Some(2.0),
            discount: Some(100000.0),
            ..InvoiceDraft::default()
        };
        assert_eq!(draft.total(), 2400000.0);
    }

    #[test]
    fn test_from_config() {
        let config = AppConfig::load_default().unwrap();
        let state = AppState::from_config(&config);
        assert_eq!(state.language, "pt-BR");
        assert_eq!(state.invoice, InvoiceDraft::default());
    }

    #[test]
    fn test_load_and_clear_invoice() {
        let mut state = AppState::default();
        state.load_invoice(InvoiceDraft {
            number: "INV-0042".to_string(),
            status: DocumentStatus::Pending,
            unit_price: Some(2500000.0),
            ..InvoiceDraft::default()
        });
        assert_eq!(state.invoice.unit_price, Some(2500000.0));
        state.clear_invoice();
        assert_eq!(state.invoice, InvoiceDraft::default());
    }
}
