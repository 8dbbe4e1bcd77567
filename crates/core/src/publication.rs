//! Publication metadata shape shared by list renderers

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of account a publication belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationInfoType {
    /// Individual author
    User,
    /// Organisation
    Company,
}

impl PublicationInfoType {
    /// Wire tag (`user` / `company`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Company => "company",
        }
    }
}

impl fmt::Display for PublicationInfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationInfoType {
    type Err = CoreError;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "user" => Ok(Self::User),
            "company" => Ok(Self::Company),
            _ => Err(CoreError::UnknownPublicationType(s.to_string())),
        }
    }
}

/// Who published something, as shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationInfo {
    /// Account kind
    #[serde(rename = "type")]
    pub kind: PublicationInfoType,

    /// Unique handle
    pub alias: String,

    /// Display name
    pub name: String,

    /// Avatar reference (URL or asset key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl PublicationInfo {
    /// Create publication info without an avatar
    pub fn new(kind: PublicationInfoType, alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            alias: alias.into(),
            name: name.into(),
            avatar: None,
        }
    }

    /// Attach an avatar reference
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn is_user(&self) -> bool {
        self.kind == PublicationInfoType::User
    }

    pub fn is_company(&self) -> bool {
        self.kind == PublicationInfoType::Company
    }
}
