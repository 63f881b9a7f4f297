use thiserror::Error;

/// Failures at the persistence boundary.
///
/// These are never translated or retried by the access layer; callers decide
/// what to show the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to write record to '{collection}': {message}")]
    Write { collection: String, message: String },

    #[error("Failed to read records from '{collection}': {message}")]
    Read { collection: String, message: String },
}

impl StoreError {
    pub fn write(collection: impl Into<String>, message: impl ToString) -> Self {
        StoreError::Write {
            collection: collection.into(),
            message: message.to_string(),
        }
    }

    pub fn read(collection: impl Into<String>, message: impl ToString) -> Self {
        StoreError::Read {
            collection: collection.into(),
            message: message.to_string(),
        }
    }
}

/// Form problems caught before anything reaches the store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    BlankName,

    #[error("Please add at least one companion or untick the companions option.")]
    NoCompanions,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
