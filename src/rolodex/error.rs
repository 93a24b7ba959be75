use crate::model::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RolodexError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact {0} not found")]
    ContactNotFound(String),

    #[error("Phone number {0} not found in the record")]
    PhoneNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Command(String),
}

impl RolodexError {
    /// Errors the command loop reports and recovers from.
    ///
    /// Disk and snapshot failures are not in this set: they must reach the
    /// process boundary.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RolodexError::Validation(_)
                | RolodexError::ContactNotFound(_)
                | RolodexError::PhoneNotFound(_)
                | RolodexError::Command(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RolodexError>;
