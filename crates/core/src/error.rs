//! Error types for frontkit-core

use thiserror::Error;

/// Errors raised when parsing core tags from strings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Publication type tag is neither `user` nor `company`
    #[error("Unknown publication type: '{0}' (expected 'user' or 'company')")]
    UnknownPublicationType(String),

    /// Select action tag is not one of the known actions
    #[error("Unknown select action: '{0}'")]
    UnknownSelectAction(String),
}
