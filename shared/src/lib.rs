pub mod error;
pub mod locale;
pub mod numeric_field;
pub mod permissions;
pub mod size;
pub mod status;

// Re-export the field core for the GUI crate.
pub use error::FormatError;
pub use locale::NumberLocale;
pub use numeric_field::{EmptyPolicy, FieldMode, FieldState, NumberFormat, NumericField};
pub use permissions::PermissionSet;
pub use status::{DocumentStatus, Tone};
