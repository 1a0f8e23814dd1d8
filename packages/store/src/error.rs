use thiserror::Error;

/// Failures at the storage boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A stored blob did not parse, or parsed into a record that fails validation.
    #[error("stored `{key}` is malformed: {reason}")]
    Malformed { key: String, reason: String },

    #[error("could not serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The underlying key-value backend refused the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn malformed(key: &str, reason: impl ToString) -> Self {
        StoreError::Malformed {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
