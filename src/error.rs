use thiserror::Error;

/// Errors raised while building a transaction tree.
///
/// Runtime failures of the transaction itself are not errors here; they are
/// `rollback` nodes inside the tree.
#[derive(Error, Debug)]
pub enum SyntaxError {
    /// A dynamic value has no literal representation
    #[error("Cannot convert {type_name} to a transaction: {value}")]
    TypeConversion { type_name: &'static str, value: String },

    /// A key segment contains the field delimiter
    #[error("Key segment '{segment}' contains the field delimiter '{delimiter}'")]
    Delimiter { segment: String, delimiter: char },

    /// A key segment is empty
    #[error("Key segments must not be empty")]
    EmptySegment,

    /// A real with no wire representation (NaN or infinite)
    #[error("Real literal {value} cannot be encoded; the wire format carries finite doubles only")]
    NonFiniteReal { value: f64 },

    /// Malformed wire JSON
    #[error("Invalid transaction JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
