//! Externally sourced holiday records.
//!
//! Holiday data comes from an outside collaborator (a holiday library or
//! service) as `(date, name, category)` triples.  Only
//! [`HolidayCategory::Public`] days are free for everyone and therefore count
//! as non-working days for planning.

use std::str::FromStr;

use crate::date::Date;
use pto_core::errors::{Error, Result};

/// Kind of holiday as reported by the holiday source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HolidayCategory {
    /// Public holiday, a day off for the general population.
    Public,
    /// Bank holiday: banks and offices closed.
    Bank,
    /// School holiday.
    School,
    /// Optional day off that employees may choose.
    Optional,
    /// Observance: noted in the calendar but not a day off.
    Observance,
}

impl HolidayCategory {
    /// The lowercase name used by holiday sources.
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayCategory::Public => "public",
            HolidayCategory::Bank => "bank",
            HolidayCategory::School => "school",
            HolidayCategory::Optional => "optional",
            HolidayCategory::Observance => "observance",
        }
    }
}

impl FromStr for HolidayCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(HolidayCategory::Public),
            "bank" => Ok(HolidayCategory::Bank),
            "school" => Ok(HolidayCategory::School),
            "optional" => Ok(HolidayCategory::Optional),
            "observance" => Ok(HolidayCategory::Observance),
            other => Err(Error::InvalidArgument(format!(
                "unknown holiday category {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: Date,
    /// Display name (e.g. `"Christmas Day"`).
    pub name: String,
    /// Category reported by the source.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub category: HolidayCategory,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(date: Date, name: impl Into<String>, category: HolidayCategory) -> Self {
        Self {
            date,
            name: name.into(),
            category,
        }
    }

    /// Shorthand for a [`HolidayCategory::Public`] holiday.
    pub fn public(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayCategory::Public)
    }

    /// Return `true` if this holiday is a general day off.
    pub fn is_public(&self) -> bool {
        self.category == HolidayCategory::Public
    }
}
