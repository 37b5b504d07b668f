use thiserror::Error;

/// Errors raised by form state and settings setters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("{0} is required")]
    Required(&'static str),

    #[error("field `{field}` expects a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}
