//! Shared frontend data shapes and identifiers
//!
//! This crate provides:
//! - Publication metadata (user / company authors)
//! - Select widget option records and action tags
//! - Version-4-style UUID string generation

pub mod error;
pub mod id;
pub mod publication;
pub mod select;

// Re-exports
pub use error::CoreError;
pub use id::{create_uuid, create_uuid_with, UUID_TEMPLATE};
pub use publication::{PublicationInfo, PublicationInfoType};
pub use select::{SelectAction, SelectValue};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
