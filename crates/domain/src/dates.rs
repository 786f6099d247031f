// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date helpers: parsing, week bounds, inclusive ranges and the serde
//! representations used by persisted calendars.

use crate::error::DomainError;
use crate::validation::validate_date_range;
use time::macros::format_description;
use time::{Date, Duration, Weekday};

/// Parses an ISO `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns an error if the string is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]")).map_err(|err| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: err.to_string(),
        }
    })
}

/// Parses an English weekday name, case-insensitively. Three-letter
/// abbreviations are accepted.
///
/// # Errors
///
/// Returns an error if the name is not a weekday.
pub fn parse_weekday(value: &str) -> Result<Weekday, DomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(DomainError::InvalidWeekday(value.to_string())),
    }
}

/// Returns the lowercase English name of a weekday.
#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "monday",
        Weekday::Tuesday => "tuesday",
        Weekday::Wednesday => "wednesday",
        Weekday::Thursday => "thursday",
        Weekday::Friday => "friday",
        Weekday::Saturday => "saturday",
        Weekday::Sunday => "sunday",
    }
}

/// Returns the Monday and Sunday of the week containing `date`.
///
/// # Errors
///
/// Returns an error if the week extends past the supported date range.
pub fn week_bounds(date: Date) -> Result<(Date, Date), DomainError> {
    let offset: i64 = i64::from(date.weekday().number_days_from_monday());
    let monday: Date = date
        .checked_sub(Duration::days(offset))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: "finding the start of the week".to_string(),
        })?;
    let sunday: Date = monday
        .checked_add(Duration::days(6))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: "finding the end of the week".to_string(),
        })?;
    Ok((monday, sunday))
}

/// An inclusive range of consecutive dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl DateRange {
    /// Creates the inclusive range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        validate_date_range(start, end)?;
        Ok(Self {
            next: Some(start),
            end,
        })
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current: Date = self.next?;
        self.next = if current < self.end {
            current.next_day()
        } else {
            None
        };
        Some(current)
    }
}

/// Serde representation of a `Date` as `YYYY-MM-DD`.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;
    use time::macros::format_description;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be formatted.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text: String = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserializes a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid date string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        super::parse_date(&text).map_err(serde::de::Error::custom)
    }

    /// Serde representation of an optional `Date`, `null` when unset.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        /// Serializes an optional date.
        ///
        /// # Errors
        ///
        /// Returns an error if the date cannot be formatted.
        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional date.
        ///
        /// # Errors
        ///
        /// Returns an error if the input is neither `null` nor a valid date string.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            let text: Option<String> = Option::deserialize(deserializer)?;
            text.map(|text| crate::dates::parse_date(&text).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

/// Serde representation of a `Weekday` as its lowercase English name.
pub mod weekday_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Weekday;

    /// Serializes a weekday by name.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(weekday: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::weekday_name(*weekday))
    }

    /// Deserializes a weekday from its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a weekday name.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        super::parse_weekday(&text).map_err(serde::de::Error::custom)
    }
}
