//! Column names as clients send them, known or not.

use autotable_types::Column;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A column named by a client.
///
/// Names outside the closed [`Column`] set are kept as `Unknown` instead of
/// being rejected: filtering on them matches nothing and sorting on them is
/// a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnRef {
    Known(Column),
    Unknown(String),
}

impl ColumnRef {
    /// Returns the resolved column, if the name was recognised.
    #[must_use]
    pub fn column(&self) -> Option<Column> {
        match self {
            Self::Known(column) => Some(*column),
            Self::Unknown(_) => None,
        }
    }

    /// Returns the name as the client sent it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(column) => column.as_str(),
            Self::Unknown(name) => name,
        }
    }
}

impl From<Column> for ColumnRef {
    fn from(column: Column) -> Self {
        Self::Known(column)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        name.parse()
            .map(Self::Known)
            .unwrap_or_else(|_| Self::Unknown(name.to_string()))
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        match name.parse() {
            Ok(column) => Self::Known(column),
            Err(_) => Self::Unknown(name),
        }
    }
}

impl From<ColumnRef> for String {
    fn from(column: ColumnRef) -> Self {
        match column {
            ColumnRef::Known(column) => column.as_str().to_string(),
            ColumnRef::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
