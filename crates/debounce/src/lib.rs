//! Trailing-edge debouncing for UI event handlers
//!
//! This crate provides:
//! - [`debounce`]: wrap a callback so bursts of calls collapse into one
//!   delayed call carrying the last arguments
//! - [`DebounceConfig`]: serde/TOML configuration for the delay
//!
//! Timers run on the ambient tokio runtime.

pub mod config;
pub mod debounce;
pub mod error;

// Re-exports
pub use config::{DebounceConfig, DEFAULT_DELAY_MS};
pub use debounce::{debounce, Debounced};
pub use error::DebounceError;
