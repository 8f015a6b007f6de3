use thiserror::Error;

/// Everything that can go wrong while reading or changing an activity roster.
///
/// The `Display` text of the domain variants is what API clients see in the
/// `detail` field, so keep it stable.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up for this activity")]
    AlreadySignedUp,

    #[error("Student is not registered for this activity")]
    NotRegistered,

    #[error("Activity is full")]
    ActivityFull,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ActivityError {
    /// True for rejected requests, false for storage failures.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ActivityError::Database(_))
    }
}
