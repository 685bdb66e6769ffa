use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub i64);

impl ContactId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("id", "contact id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContactId> for i64 {
    fn from(value: ContactId) -> Self {
        value.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactStatus {
    #[default]
    Unread,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "UNREAD",
            Self::Read => "READ",
            Self::Replied => "REPLIED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            // Older clients label fresh messages NEW.
            "UNREAD" | "NEW" => Ok(Self::Unread),
            "READ" => Ok(Self::Read),
            "REPLIED" => Ok(Self::Replied),
            "ARCHIVED" => Ok(Self::Archived),
            other => Err(DomainError::validation(
                "status",
                format!("unknown contact status '{other}'"),
            )),
        }
    }
}
