//! Sorting types for folder listings and search results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return whether this is the descending direction.
    pub fn is_desc(&self) -> bool {
        matches!(self, Self::Desc)
    }
}

/// The field a listing is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Item name.
    #[default]
    Name,
    /// Size in bytes (folders count as zero).
    Size,
    /// Type label (`folder` or the file extension).
    Type,
    /// Creation timestamp.
    Created,
    /// Last-modified timestamp.
    Updated,
}

impl SortField {
    /// Return the lowercase name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::Type => "type",
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "size" => Ok(Self::Size),
            "type" => Ok(Self::Type),
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            other => Err(AppError::validation(format!("Unknown sort field: {other}"))),
        }
    }
}
