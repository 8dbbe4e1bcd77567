//! Select widget records
//!
//! [`SelectAction`] values are symbolic tags for whatever drives a selection
//! list; nothing here gives them behavior.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One option in a select list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectValue {
    /// Text shown to the user
    pub label: String,
    /// Value submitted when chosen
    pub value: String,
}

impl SelectValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Named actions of a selection-list widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectAction {
    Close,
    CloseSelect,
    First,
    Last,
    Next,
    Open,
    PageDown,
    PageUp,
    Previous,
    Select,
    Type,
}

impl SelectAction {
    /// Every action, in declaration order
    pub const ALL: [SelectAction; 11] = [
        Self::Close,
        Self::CloseSelect,
        Self::First,
        Self::Last,
        Self::Next,
        Self::Open,
        Self::PageDown,
        Self::PageUp,
        Self::Previous,
        Self::Select,
        Self::Type,
    ];

    /// Kebab-case tag, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::CloseSelect => "close-select",
            Self::First => "first",
            Self::Last => "last",
            Self::Next => "next",
            Self::Open => "open",
            Self::PageDown => "page-down",
            Self::PageUp => "page-up",
            Self::Previous => "previous",
            Self::Select => "select",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for SelectAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectAction {
    type Err = CoreError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSelectAction(s.to_string()))
    }
}
