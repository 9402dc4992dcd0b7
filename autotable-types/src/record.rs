use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A single automation row, exactly as the dataset stores it.
///
/// Records are immutable once loaded; the query engine only ever reads
/// them through shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    /// Unique within one collection.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub automation_type: AutomationType,
    #[serde(with = "crate::timestamp")]
    pub creation_time: DateTime<Utc>,
    pub status: Status,
}

/// What kind of automation a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationType {
    Robot,
    Flow,
    Application,
}

impl AutomationType {
    /// Returns the wire literal (`robot`, `flow`, `application`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Robot => "robot",
            Self::Flow => "flow",
            Self::Application => "application",
        }
    }
}

impl fmt::Display for AutomationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutomationType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "robot" => Ok(Self::Robot),
            "flow" => Ok(Self::Flow),
            "application" => Ok(Self::Application),
            other => Err(Error::UnknownVariant {
                kind: "automation type",
                value: other.to_string(),
            }),
        }
    }
}

/// Lifecycle status of an automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Deleted,
    Inactive,
}

impl Status {
    /// Returns the wire literal (`active`, `deleted`, `inactive`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "deleted" => Ok(Self::Deleted),
            "inactive" => Ok(Self::Inactive),
            other => Err(Error::UnknownVariant {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}
