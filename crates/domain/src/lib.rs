// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Value types for work-hour calendars.
//!
//! A calendar is a chain of [`CalendarVersion`]s. Each version holds a
//! weekly hour table, a set of per-date [`ExceptionDay`]s and an optional
//! parent reference. This crate owns those values and their local rules;
//! resolving capacity across parent calendars lives in the `workcal` crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod dates;
mod error;
mod exception;
mod types;
mod validation;
mod version;

#[cfg(test)]
mod tests;

// Re-export public types
pub use dates::{DateRange, parse_date, parse_weekday, week_bounds, weekday_name};
pub use error::DomainError;
pub use exception::{ExceptionDay, ExceptionType};
pub use types::{CalendarId, DayHours, DayType, WEEK, WeekTable};
pub use validation::{validate_date_range, validate_hours, validate_version_chain};
pub use version::CalendarVersion;
