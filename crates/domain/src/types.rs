// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_hours;
use serde::{Deserialize, Serialize};
use time::Weekday;

/// Identifies a calendar within a registry.
///
/// Parent references between calendars are expressed through this id and
/// never own the referenced calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarId(u64);

impl CalendarId {
    /// Creates a new `CalendarId`.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The hour rule for one weekday.
///
/// `Default` defers to the parent calendar. `Explicit(0)` is a closed day
/// and never defers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum DayHours {
    /// No rule of its own; ask the parent.
    #[default]
    Default,
    /// An explicit number of hours, possibly zero.
    Explicit(u32),
}

impl DayHours {
    /// Builds a rule from raw input, where `None` means default.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour value is negative or out of range.
    pub fn from_input(hours: Option<i64>) -> Result<Self, DomainError> {
        match hours {
            None => Ok(Self::Default),
            Some(hours) => Ok(Self::Explicit(validate_hours(hours)?)),
        }
    }

    /// Returns the explicit hour value, if any.
    #[must_use]
    pub const fn explicit(&self) -> Option<u32> {
        match self {
            Self::Default => None,
            Self::Explicit(hours) => Some(*hours),
        }
    }

    /// Whether this rule defers to the parent.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl From<Option<u32>> for DayHours {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Self::Default, Self::Explicit)
    }
}

impl From<DayHours> for Option<u32> {
    fn from(value: DayHours) -> Self {
        value.explicit()
    }
}

/// The per-weekday hour table of a calendar version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekTable {
    monday: DayHours,
    tuesday: DayHours,
    wednesday: DayHours,
    thursday: DayHours,
    friday: DayHours,
    saturday: DayHours,
    sunday: DayHours,
}

impl WeekTable {
    /// Creates a table where every weekday defers to the parent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            monday: DayHours::Default,
            tuesday: DayHours::Default,
            wednesday: DayHours::Default,
            thursday: DayHours::Default,
            friday: DayHours::Default,
            saturday: DayHours::Default,
            sunday: DayHours::Default,
        }
    }

    /// Returns the rule for a weekday.
    #[must_use]
    pub const fn get(&self, weekday: Weekday) -> DayHours {
        match weekday {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }

    /// Replaces the rule for a weekday.
    pub fn set(&mut self, weekday: Weekday, hours: DayHours) {
        let slot: &mut DayHours = match weekday {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        };
        *slot = hours;
    }

    /// Iterates the table from Monday to Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, DayHours)> + '_ {
        WEEK.iter().map(|weekday| (*weekday, self.get(*weekday)))
    }
}

/// The seven weekdays, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Classification of a single date in a calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    /// A working day given by the weekly rules.
    Normal,
    /// The weekly rules give zero hours.
    ZeroHours,
    /// The calendar itself declares an exception on this date.
    OwnException,
    /// The value comes from an exception declared by an ancestor.
    AncestorException,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = match self {
            Self::Normal => "NORMAL",
            Self::ZeroHours => "ZERO_HOURS",
            Self::OwnException => "OWN_EXCEPTION",
            Self::AncestorException => "ANCESTOR_EXCEPTION",
        };
        f.write_str(label)
    }
}
