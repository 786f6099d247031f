// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A calendar as a chronological chain of versions.
//!
//! Only the last version of the chain is mutable. Every edit validates its
//! input before writing, so a failed call leaves the chain untouched.
//! Anything that needs to follow parent references lives on
//! [`crate::CalendarRegistry`].

use serde::{Deserialize, Serialize};
use time::{Date, Weekday};
use tracing::{debug, info};
use workcal_domain::{
    CalendarId, CalendarVersion, DayHours, DomainError, ExceptionDay, ExceptionType,
    validate_version_chain,
};

/// A named calendar whose rules change over time through versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarRecord")]
pub struct Calendar {
    id: CalendarId,
    name: String,
    versions: Vec<CalendarVersion>,
}

/// Unvalidated stored form of a calendar.
#[derive(Deserialize)]
struct CalendarRecord {
    id: CalendarId,
    name: String,
    versions: Vec<CalendarVersion>,
}

impl TryFrom<CalendarRecord> for Calendar {
    type Error = DomainError;

    fn try_from(record: CalendarRecord) -> Result<Self, Self::Error> {
        validate_version_chain(&record.versions)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            versions: record.versions,
        })
    }
}

impl Calendar {
    /// Creates a calendar with a single empty, unbounded version.
    pub(crate) fn new(id: CalendarId, name: String) -> Self {
        Self::with_version(id, name, CalendarVersion::new())
    }

    /// Creates a calendar whose only version is `version`, with bounds cleared.
    pub(crate) fn with_version(id: CalendarId, name: String, version: CalendarVersion) -> Self {
        Self {
            id,
            name,
            versions: vec![version.unbounded_copy()],
        }
    }

    /// Returns the calendar id.
    #[must_use]
    pub const fn id(&self) -> CalendarId {
        self.id
    }

    /// Returns the calendar name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Returns the version chain, oldest first.
    #[must_use]
    pub fn versions(&self) -> &[CalendarVersion] {
        &self.versions
    }

    fn current_index(&self) -> usize {
        self.versions.len() - 1
    }

    /// Returns the current (last) version.
    #[must_use]
    pub fn current(&self) -> &CalendarVersion {
        &self.versions[self.current_index()]
    }

    fn current_mut(&mut self) -> &mut CalendarVersion {
        let index: usize = self.current_index();
        &mut self.versions[index]
    }

    fn version_index_at(&self, date: Date) -> usize {
        self.versions
            .iter()
            .position(|version| version.is_posterior_to(date))
            .unwrap_or_else(|| self.current_index())
    }

    /// Returns the version in effect on `date`.
    #[must_use]
    pub fn version_at(&self, date: Date) -> &CalendarVersion {
        &self.versions[self.version_index_at(date)]
    }

    /// Returns the current rule for a weekday.
    #[must_use]
    pub fn hours(&self, weekday: Weekday) -> DayHours {
        self.current().hours(weekday)
    }

    /// Whether the current version defers this weekday to the parent.
    #[must_use]
    pub fn is_default(&self, weekday: Weekday) -> bool {
        self.hours(weekday).is_default()
    }

    /// Sets the current hours for a weekday; `None` resets it to default.
    ///
    /// # Errors
    ///
    /// Returns an error if `hours` is negative or out of range.
    pub fn set_hours(&mut self, weekday: Weekday, hours: Option<i64>) -> Result<(), DomainError> {
        let hours: DayHours = DayHours::from_input(hours)?;
        debug!(calendar = %self.name, ?weekday, ?hours, "Setting weekday hours");
        self.current_mut().set_hours(weekday, hours);
        Ok(())
    }

    /// Resets a weekday of the current version to default.
    pub fn set_default(&mut self, weekday: Weekday) {
        debug!(calendar = %self.name, ?weekday, "Resetting weekday to default");
        self.current_mut().set_hours(weekday, DayHours::Default);
    }

    /// Sets several weekdays at once. All values are validated before any
    /// is written.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is negative or out of range.
    pub fn set_hours_per_day(
        &mut self,
        hours: &[(Weekday, Option<i64>)],
    ) -> Result<(), DomainError> {
        let validated: Vec<(Weekday, DayHours)> = hours
            .iter()
            .map(|(weekday, value)| DayHours::from_input(*value).map(|hours| (*weekday, hours)))
            .collect::<Result<_, DomainError>>()?;

        let current: &mut CalendarVersion = self.current_mut();
        for (weekday, value) in validated {
            current.set_hours(weekday, value);
        }
        Ok(())
    }

    /// Adds an exception to the current version.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current version already has an exception on that date
    /// - The date precedes the start of the current version
    pub fn add_exception_day(&mut self, exception: ExceptionDay) -> Result<(), DomainError> {
        debug!(
            calendar = %self.name,
            date = %exception.date(),
            hours = exception.hours(),
            "Adding exception day"
        );
        self.current_mut().add_exception(exception)
    }

    /// Removes an own exception from the current version.
    ///
    /// Exceptions inherited from an ancestor cannot be removed here.
    ///
    /// # Errors
    ///
    /// Returns an error if the current version declares no exception on `date`.
    pub fn remove_exception_day(&mut self, date: Date) -> Result<ExceptionDay, DomainError> {
        debug!(calendar = %self.name, %date, "Removing exception day");
        self.current_mut().remove_exception(date)
    }

    /// Replaces the hours and category of an own exception of the current
    /// version.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `hours` is negative or out of range
    /// - The current version declares no exception on `date`
    pub fn update_exception_day(
        &mut self,
        date: Date,
        hours: i64,
        exception_type: ExceptionType,
    ) -> Result<(), DomainError> {
        debug!(calendar = %self.name, %date, hours, "Updating exception day");
        self.current_mut()
            .update_exception(date, hours, exception_type)
    }

    /// Iterates the exceptions declared by the current version.
    pub fn own_exceptions(&self) -> impl Iterator<Item = &ExceptionDay> + '_ {
        self.current().exceptions()
    }

    /// Returns the exception declared on `date` by the version in effect on
    /// that date.
    #[must_use]
    pub fn own_exception_day(&self, date: Date) -> Option<&ExceptionDay> {
        self.version_at(date).exception(date)
    }

    /// Returns the parent of the current version.
    #[must_use]
    pub fn parent(&self) -> Option<CalendarId> {
        self.current().parent()
    }

    /// Returns the parent of the version in effect on `date`.
    #[must_use]
    pub fn parent_at(&self, date: Date) -> Option<CalendarId> {
        self.version_at(date).parent()
    }

    /// Whether the current version has a parent.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.parent().is_some()
    }

    /// Replaces the parent of the current version. Callers are responsible
    /// for rejecting cycles.
    pub(crate) fn set_parent(&mut self, parent: Option<CalendarId>) {
        self.current_mut().set_parent(parent);
    }

    /// Iterates every parent referenced by any version of this calendar.
    pub(crate) fn referenced_parents(&self) -> impl Iterator<Item = CalendarId> + '_ {
        self.versions.iter().filter_map(CalendarVersion::parent)
    }

    /// Closes the current version on `effective_from` and appends a deep
    /// copy of it that becomes the new current version.
    ///
    /// # Errors
    ///
    /// Returns an error if `effective_from` is not strictly after the start
    /// of the current version.
    pub fn new_version(&mut self, effective_from: Date) -> Result<(), DomainError> {
        if let Some(current_start) = self
            .current()
            .valid_from()
            .filter(|start| effective_from <= *start)
        {
            return Err(DomainError::InvalidVersionStart {
                effective_from,
                current_start,
            });
        }

        let successor: CalendarVersion = self.current().successor(effective_from);
        self.current_mut().set_expiring_date(Some(effective_from));
        self.versions.push(successor);

        info!(
            calendar = %self.name,
            %effective_from,
            versions = self.versions.len(),
            "Created new calendar version"
        );
        Ok(())
    }

    /// Returns the end bound of the version containing `reference`.
    #[must_use]
    pub fn expiring_date(&self, reference: Date) -> Option<Date> {
        self.version_at(reference).expiring_date()
    }

    /// Returns the start bound of the version containing `reference`.
    #[must_use]
    pub fn valid_from(&self, reference: Date) -> Option<Date> {
        self.version_at(reference).valid_from()
    }

    /// Moves the boundary between the version containing `reference` and
    /// the version after it to `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There is no version after the one containing `reference`
    /// - `date` is not strictly between the start of that version and the
    ///   end of the next one
    pub fn set_expiring_date(&mut self, date: Date, reference: Date) -> Result<(), DomainError> {
        let index: usize = self.version_index_at(reference);
        let next: usize = index + 1;
        if next >= self.versions.len() {
            return Err(DomainError::NoNextVersion { reference });
        }

        self.move_boundary(index, date)
    }

    /// Moves the boundary between the version containing `reference` and
    /// the version before it to `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There is no version before the one containing `reference`
    /// - `date` is not strictly between the start of the previous version
    ///   and the end of this one
    pub fn set_valid_from(&mut self, date: Date, reference: Date) -> Result<(), DomainError> {
        let index: usize = self.version_index_at(reference);
        if index == 0 {
            return Err(DomainError::NoPreviousVersion { reference });
        }

        self.move_boundary(index - 1, date)
    }

    /// Moves the boundary that closes version `index` and opens `index + 1`.
    fn move_boundary(&mut self, index: usize, date: Date) -> Result<(), DomainError> {
        let lower: Option<Date> = self.versions[index].valid_from();
        let upper: Option<Date> = self.versions[index + 1].expiring_date();

        let after_lower: bool = lower.is_none_or(|lower| date > lower);
        let before_upper: bool = upper.is_none_or(|upper| date < upper);
        if !after_lower || !before_upper {
            return Err(DomainError::BoundaryOutOfOrder { date, lower, upper });
        }

        let previous: Option<Date> = self.versions[index].expiring_date();
        self.versions[index].set_expiring_date(Some(date));
        self.versions[index + 1].set_valid_from(Some(date));

        info!(
            calendar = %self.name,
            from = ?previous,
            to = %date,
            "Moved calendar version boundary"
        );
        Ok(())
    }
}
