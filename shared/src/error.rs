use thiserror::Error;

// Errors raised while building a field configuration or resolving lookup data.
// Editing a field never produces one of these: malformed input degrades to the
// empty policy instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("Grouping and decimal separator must differ, both are '{0}'")]
    SeparatorClash(char),

    #[error("Invalid separator '{0}': digits and sign characters cannot separate")]
    InvalidSeparator(char),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Unknown document status: {0}")]
    UnknownStatus(String),

    #[error("Invalid size '{0}': expected a pixel number such as \"24\" or \"24px\"")]
    InvalidSize(String),
}
