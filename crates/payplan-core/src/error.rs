use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayplanError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for PayplanError {
    fn from(e: serde_json::Error) -> Self {
        PayplanError::SerializationError(e.to_string())
    }
}
