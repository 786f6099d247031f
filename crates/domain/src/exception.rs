// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-date overrides of the weekly pattern.

use crate::dates::iso_date;
use crate::error::DomainError;
use crate::validation::validate_hours;
use serde::{Deserialize, Serialize};
use time::Date;

/// A named category of day override, such as a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExceptionType {
    /// The category name (e.g., "HOLIDAY").
    name: String,
    /// Display attribute used by calendar views.
    color: String,
    /// Whether the category applies to a single resource only.
    resource_specific: bool,
}

impl ExceptionType {
    /// Creates a new `ExceptionType`.
    ///
    /// # Arguments
    ///
    /// * `name` - The category name
    /// * `color` - The display attribute
    /// * `resource_specific` - Whether the category is resource-specific
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, resource_specific: bool) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            resource_specific,
        }
    }

    /// Returns the category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display attribute.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns whether the category is resource-specific.
    #[must_use]
    pub const fn is_resource_specific(&self) -> bool {
        self.resource_specific
    }
}

/// One date paired with an explicit hour value and its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionDay {
    #[serde(with = "iso_date")]
    date: Date,
    hours: u32,
    exception_type: ExceptionType,
}

impl ExceptionDay {
    /// Creates a new `ExceptionDay`.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours` is negative or out of range.
    pub fn new(date: Date, hours: i64, exception_type: ExceptionType) -> Result<Self, DomainError> {
        Ok(Self {
            date,
            hours: validate_hours(hours)?,
            exception_type,
        })
    }

    /// Builds an exception from an already validated hour value.
    pub(crate) const fn from_parts(date: Date, hours: u32, exception_type: ExceptionType) -> Self {
        Self {
            date,
            hours,
            exception_type,
        }
    }

    /// Returns the date this exception applies to.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Returns the hours available on the date.
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    /// Returns the exception category.
    #[must_use]
    pub const fn exception_type(&self) -> &ExceptionType {
        &self.exception_type
    }
}

/// Serde representation of a version's exception set as a list.
///
/// Loading rejects lists that declare the same date twice.
pub(crate) mod exception_list {
    use super::ExceptionDay;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;
    use time::Date;

    pub fn serialize<S: Serializer>(
        exceptions: &BTreeMap<Date, ExceptionDay>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let days: Vec<&ExceptionDay> = exceptions.values().collect();
        days.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Date, ExceptionDay>, D::Error> {
        let days: Vec<ExceptionDay> = Vec::deserialize(deserializer)?;
        let mut exceptions: BTreeMap<Date, ExceptionDay> = BTreeMap::new();
        for day in days {
            let date: Date = day.date();
            if exceptions.insert(date, day).is_some() {
                return Err(serde::de::Error::custom(format!(
                    "duplicate exception on {date}"
                )));
            }
        }
        Ok(exceptions)
    }
}
