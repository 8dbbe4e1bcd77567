//! Error types for frontkit-debounce

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebounceError {
    /// `debounce` was called from a thread that is not driving a tokio runtime
    #[error("No tokio runtime available to schedule debounced calls")]
    NoRuntime,
}
