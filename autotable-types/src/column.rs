//! Queryable columns and typed cell access.
//!
//! Column references arriving from clients are resolved against the closed
//! [`Column`] enumeration once, up front. After that every cell is read
//! through [`Automation::field`], which returns a [`FieldValue`] carrying
//! enough type information for comparisons to be type-aware.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::{Automation, Error, timestamp};

/// A column of the automations table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "creationTime")]
    CreationTime,
    #[serde(rename = "status")]
    Status,
}

impl Column {
    /// All columns, in table-header order.
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Name,
        Column::Status,
        Column::CreationTime,
        Column::Type,
    ];

    /// Returns the wire name of the column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Type => "type",
            Self::CreationTime => "creationTime",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "creationTime" => Ok(Self::CreationTime),
            "status" => Ok(Self::Status),
            other => Err(Error::UnknownColumn(other.to_string())),
        }
    }
}

/// A borrowed, typed view of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Free text (`id`, `name`).
    Text(&'a str),
    /// A closed-enumeration literal (`type`, `status`).
    Enum(&'static str),
    /// A point in time (`creationTime`).
    Timestamp(DateTime<Utc>),
}

impl FieldValue<'_> {
    /// Returns the cell as text if it is textual (free text or an enum literal).
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(*s),
            Self::Enum(s) => Some(*s),
            Self::Timestamp(_) => None,
        }
    }

    /// Returns the canonical string form used for exact-match filtering.
    ///
    /// Text and enum values are returned as-is; timestamps are rendered
    /// with [`timestamp::canonical`].
    #[must_use]
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(*s),
            Self::Enum(s) => Cow::Borrowed(*s),
            Self::Timestamp(ts) => Cow::Owned(timestamp::canonical(ts)),
        }
    }
}

impl Automation {
    /// Reads one cell of this record.
    #[must_use]
    pub fn field(&self, column: Column) -> FieldValue<'_> {
        match column {
            Column::Id => FieldValue::Text(&self.id),
            Column::Name => FieldValue::Text(&self.name),
            Column::Type => FieldValue::Enum(self.automation_type.as_str()),
            Column::CreationTime => FieldValue::Timestamp(self.creation_time),
            Column::Status => FieldValue::Enum(self.status.as_str()),
        }
    }
}
