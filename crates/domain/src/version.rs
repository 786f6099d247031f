// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A time-bounded snapshot of a calendar's rules.

use crate::dates::iso_date;
use crate::error::DomainError;
use crate::exception::{ExceptionDay, ExceptionType, exception_list};
use crate::types::{CalendarId, DayHours, WeekTable};
use crate::validation::validate_hours;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, Weekday};

/// One version of a calendar.
///
/// A version is valid on the half-open interval `[valid_from, expiring_date)`.
/// An unset `valid_from` means open from the beginning of time and an unset
/// `expiring_date` means open-ended.
///
/// Versions do not know whether they are current. The owning calendar only
/// exposes mutation for its last version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarVersion {
    #[serde(default)]
    hours: WeekTable,
    #[serde(with = "exception_list", default)]
    exceptions: BTreeMap<Date, ExceptionDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<CalendarId>,
    #[serde(
        with = "iso_date::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    valid_from: Option<Date>,
    #[serde(
        with = "iso_date::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    expiring_date: Option<Date>,
}

impl CalendarVersion {
    /// Creates an unbounded version with every weekday at default, no
    /// exceptions and no parent.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hours: WeekTable::new(),
            exceptions: BTreeMap::new(),
            parent: None,
            valid_from: None,
            expiring_date: None,
        }
    }

    /// Creates an unbounded, empty version that defers everything to `parent`.
    #[must_use]
    pub const fn derived_from(parent: CalendarId) -> Self {
        Self {
            hours: WeekTable::new(),
            exceptions: BTreeMap::new(),
            parent: Some(parent),
            valid_from: None,
            expiring_date: None,
        }
    }

    /// Returns a deep copy of this version's rules starting on
    /// `effective_from` and open-ended.
    #[must_use]
    pub fn successor(&self, effective_from: Date) -> Self {
        Self {
            hours: self.hours,
            exceptions: self.exceptions.clone(),
            parent: self.parent,
            valid_from: Some(effective_from),
            expiring_date: None,
        }
    }

    /// Returns a deep copy of this version's rules with both bounds unset.
    #[must_use]
    pub fn unbounded_copy(&self) -> Self {
        Self {
            valid_from: None,
            expiring_date: None,
            ..self.clone()
        }
    }

    /// Returns the weekday table.
    #[must_use]
    pub const fn week(&self) -> &WeekTable {
        &self.hours
    }

    /// Returns the rule for a weekday.
    #[must_use]
    pub const fn hours(&self, weekday: Weekday) -> DayHours {
        self.hours.get(weekday)
    }

    /// Returns the exception declared on `date`, if any.
    #[must_use]
    pub fn exception(&self, date: Date) -> Option<&ExceptionDay> {
        self.exceptions.get(&date)
    }

    /// Iterates the declared exceptions in date order.
    pub fn exceptions(&self) -> impl Iterator<Item = &ExceptionDay> + '_ {
        self.exceptions.values()
    }

    /// Returns the parent calendar, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<CalendarId> {
        self.parent
    }

    /// Returns the first day of validity, if bounded.
    #[must_use]
    pub const fn valid_from(&self) -> Option<Date> {
        self.valid_from
    }

    /// Returns the first day after validity, if bounded.
    #[must_use]
    pub const fn expiring_date(&self) -> Option<Date> {
        self.expiring_date
    }

    /// Whether this version is still valid on `date` or later.
    #[must_use]
    pub fn is_posterior_to(&self, date: Date) -> bool {
        self.expiring_date.is_none_or(|expiring| expiring > date)
    }

    /// Whether `date` falls inside this version's validity.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.valid_from.is_none_or(|from| from <= date) && self.is_posterior_to(date)
    }

    /// Replaces the rule for a weekday.
    pub fn set_hours(&mut self, weekday: Weekday, hours: DayHours) {
        self.hours.set(weekday, hours);
    }

    /// Adds an exception.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An exception already exists on the same date
    /// - The date precedes this version's start
    pub fn add_exception(&mut self, exception: ExceptionDay) -> Result<(), DomainError> {
        let date: Date = exception.date();
        if let Some(valid_from) = self.valid_from.filter(|from| date < *from) {
            return Err(DomainError::ExceptionBeforeCurrentVersion { date, valid_from });
        }
        if self.exceptions.contains_key(&date) {
            return Err(DomainError::DuplicateException { date });
        }
        self.exceptions.insert(date, exception);
        Ok(())
    }

    /// Removes the exception declared on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if this version declares no exception on `date`.
    pub fn remove_exception(&mut self, date: Date) -> Result<ExceptionDay, DomainError> {
        self.exceptions
            .remove(&date)
            .ok_or(DomainError::ExceptionNotFound { date })
    }

    /// Replaces the hours and category of the exception declared on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `hours` is negative or out of range
    /// - This version declares no exception on `date`
    pub fn update_exception(
        &mut self,
        date: Date,
        hours: i64,
        exception_type: ExceptionType,
    ) -> Result<(), DomainError> {
        let hours: u32 = validate_hours(hours)?;
        let existing: &mut ExceptionDay = self
            .exceptions
            .get_mut(&date)
            .ok_or(DomainError::ExceptionNotFound { date })?;
        *existing = ExceptionDay::from_parts(date, hours, exception_type);
        Ok(())
    }

    /// Replaces the parent reference.
    pub const fn set_parent(&mut self, parent: Option<CalendarId>) {
        self.parent = parent;
    }

    /// Replaces the start bound.
    pub const fn set_valid_from(&mut self, valid_from: Option<Date>) {
        self.valid_from = valid_from;
    }

    /// Replaces the end bound.
    pub const fn set_expiring_date(&mut self, expiring_date: Option<Date>) {
        self.expiring_date = expiring_date;
    }
}
