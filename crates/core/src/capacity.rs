// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capacity resolution through the parent chain.
//!
//! For a calendar and a date:
//! 1. Pick the version in effect on the date.
//! 2. An own exception on the date wins.
//! 3. Otherwise an explicit weekday rule wins, zero included.
//! 4. Otherwise ask the parent of that version for the same date, as if the
//!    query had been made against the parent directly. Without a parent the
//!    capacity is zero.

use crate::error::CoreError;
use crate::registry::CalendarRegistry;
use std::collections::{BTreeMap, BTreeSet};
use time::{Date, Weekday};
use workcal_domain::{
    CalendarId, CalendarVersion, DateRange, DayHours, DayType, ExceptionDay, WEEK, week_bounds,
};

/// Where a resolved capacity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    OwnException,
    AncestorException,
    WeeklyRule,
}

/// A resolved capacity and its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Resolution {
    hours: u32,
    source: Source,
}

impl CalendarRegistry {
    fn resolve(&self, id: CalendarId, date: Date) -> Result<Resolution, CoreError> {
        let weekday: Weekday = date.weekday();
        let mut current: CalendarId = id;
        loop {
            let version: &CalendarVersion = self.get(current)?.version_at(date);

            if let Some(exception) = version.exception(date) {
                let source: Source = if current == id {
                    Source::OwnException
                } else {
                    Source::AncestorException
                };
                return Ok(Resolution {
                    hours: exception.hours(),
                    source,
                });
            }

            match (version.hours(weekday), version.parent()) {
                (DayHours::Explicit(hours), _) => {
                    return Ok(Resolution {
                        hours,
                        source: Source::WeeklyRule,
                    });
                }
                (DayHours::Default, Some(parent)) => current = parent,
                (DayHours::Default, None) => {
                    return Ok(Resolution {
                        hours: 0,
                        source: Source::WeeklyRule,
                    });
                }
            }
        }
    }

    /// Returns the work-hours available on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar or one of its ancestors is missing.
    pub fn capacity_at(&self, id: CalendarId, date: Date) -> Result<u32, CoreError> {
        Ok(self.resolve(id, date)?.hours)
    }

    /// Classifies `date` by where its capacity comes from.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar or one of its ancestors is missing.
    pub fn classify(&self, id: CalendarId, date: Date) -> Result<DayType, CoreError> {
        let resolution: Resolution = self.resolve(id, date)?;
        Ok(match resolution.source {
            Source::OwnException => DayType::OwnException,
            Source::AncestorException => DayType::AncestorException,
            Source::WeeklyRule if resolution.hours == 0 => DayType::ZeroHours,
            Source::WeeklyRule => DayType::Normal,
        })
    }

    /// Sums the capacity of every date in `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start` is after `end`
    /// - The calendar or one of its ancestors is missing
    pub fn workable_hours(
        &self,
        id: CalendarId,
        start: Date,
        end: Date,
    ) -> Result<u64, CoreError> {
        DateRange::new(start, end)?.try_fold(0_u64, |total, date| {
            Ok(total + u64::from(self.capacity_at(id, date)?))
        })
    }

    /// Sums the capacity of the Monday-to-Sunday week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar or one of its ancestors is missing.
    pub fn workable_hours_per_week(&self, id: CalendarId, date: Date) -> Result<u64, CoreError> {
        let (monday, sunday) = week_bounds(date)?;
        self.workable_hours(id, monday, sunday)
    }

    /// Returns the dates in `[start, end]` with zero capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `start` is after `end`
    /// - The calendar or one of its ancestors is missing
    pub fn non_workable_days(
        &self,
        id: CalendarId,
        start: Date,
        end: Date,
    ) -> Result<BTreeSet<Date>, CoreError> {
        let mut days: BTreeSet<Date> = BTreeSet::new();
        for date in DateRange::new(start, end)? {
            if self.capacity_at(id, date)? == 0 {
                days.insert(date);
            }
        }
        Ok(days)
    }

    /// Whether the current rules give zero hours on every weekday.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar or one of its ancestors is missing.
    pub fn only_gives_zero_hours(&self, id: CalendarId) -> Result<bool, CoreError> {
        for weekday in WEEK {
            if !self.only_gives_zero_hours_on(id, weekday)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether the current rules give zero hours on `weekday`: the current
    /// version says zero, or defers to a parent whose current rules give
    /// zero, or defers with no parent.
    ///
    /// Exceptions are not considered.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar or one of its ancestors is missing.
    pub fn only_gives_zero_hours_on(
        &self,
        id: CalendarId,
        weekday: Weekday,
    ) -> Result<bool, CoreError> {
        let mut current: CalendarId = id;
        loop {
            let version: &CalendarVersion = self.get(current)?.current();
            match (version.hours(weekday), version.parent()) {
                (DayHours::Explicit(hours), _) => return Ok(hours == 0),
                (DayHours::Default, Some(parent)) => current = parent,
                (DayHours::Default, None) => return Ok(true),
            }
        }
    }

    /// Returns the exception that applies on `date`: the calendar's own, or
    /// else the one its parent would report for that date. A weekday with
    /// explicit hours stops the walk, so an ancestor exception it hides is
    /// not reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar or one of its ancestors is missing.
    pub fn exception_day(
        &self,
        id: CalendarId,
        date: Date,
    ) -> Result<Option<&ExceptionDay>, CoreError> {
        let weekday: Weekday = date.weekday();
        let mut current: CalendarId = id;
        loop {
            let version: &CalendarVersion = self.get(current)?.version_at(date);
            if let Some(exception) = version.exception(date) {
                return Ok(Some(exception));
            }
            match (version.hours(weekday), version.parent()) {
                (DayHours::Default, Some(parent)) => current = parent,
                _ => return Ok(None),
            }
        }
    }

    /// Returns the exceptions of the current version merged with those
    /// inherited from its ancestors' current versions. On a shared date the
    /// nearest calendar wins. An ancestor exception is left out when a
    /// nearer calendar gives its weekday explicit hours.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar or one of its ancestors is missing.
    pub fn exceptions(&self, id: CalendarId) -> Result<Vec<&ExceptionDay>, CoreError> {
        let mut merged: BTreeMap<Date, &ExceptionDay> = BTreeMap::new();
        let mut hidden: BTreeSet<u8> = BTreeSet::new();
        let mut next: Option<CalendarId> = Some(id);
        while let Some(current) = next {
            let version: &CalendarVersion = self.get(current)?.current();
            for exception in version.exceptions() {
                let weekday: u8 = exception.date().weekday().number_days_from_monday();
                if !hidden.contains(&weekday) {
                    merged.entry(exception.date()).or_insert(exception);
                }
            }
            hidden.extend(
                WEEK.iter()
                    .filter(|weekday| !version.hours(**weekday).is_default())
                    .map(|weekday| weekday.number_days_from_monday()),
            );
            next = version.parent();
        }
        Ok(merged.into_values().collect())
    }
}
