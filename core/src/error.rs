//! Error types for Stitch Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Chat not found: {0}")]
    ChatNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Call not found: {0}")]
    CallNotFound(String),

    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    #[error("Notification {0} has no actions")]
    NotActionable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Form errors surfaced to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter at least {0} characters for both fields")]
    TooShort(usize),

    #[error("New email address is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("New email must be different from current email")]
    SameEmail,

    #[error("New phone number is required")]
    PhoneRequired,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("New phone number must be different from current phone number")]
    SamePhone,

    #[error("Name cannot be empty")]
    EmptyName,
}
