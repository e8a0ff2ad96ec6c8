// GUI components module
pub mod invoice_form;
pub mod numeric_text_field;
pub mod permission_gate;
pub mod status_badge;

// Re-export components for easier access from app.rs or other modules
pub use invoice_form::InvoiceForm;
pub use numeric_text_field::NumericTextField;
pub use permission_gate::PermissionGate;
pub use status_badge::StatusBadge;
