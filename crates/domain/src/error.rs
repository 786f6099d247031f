// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while validating or editing calendar rules.
///
/// Every variant is an invalid-argument failure raised at the point of the
/// offending call. Operations that return one of these leave the calendar
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An hour value was negative.
    NegativeHours {
        /// The rejected value.
        hours: i64,
    },
    /// An hour value does not fit the supported range.
    HoursOutOfRange {
        /// The rejected value.
        hours: i64,
    },
    /// The version already declares an exception on this date.
    DuplicateException {
        /// The conflicting date.
        date: Date,
    },
    /// The version does not declare an exception on this date.
    ExceptionNotFound {
        /// The requested date.
        date: Date,
    },
    /// The exception date lies before the start of the current version.
    ExceptionBeforeCurrentVersion {
        /// The rejected exception date.
        date: Date,
        /// The start of the current version.
        valid_from: Date,
    },
    /// A new version must start strictly after the current version starts.
    InvalidVersionStart {
        /// The requested start of the new version.
        effective_from: Date,
        /// The start of the current version.
        current_start: Date,
    },
    /// There is no version after the one containing the reference date.
    NoNextVersion {
        /// The reference date.
        reference: Date,
    },
    /// There is no version before the one containing the reference date.
    NoPreviousVersion {
        /// The reference date.
        reference: Date,
    },
    /// A version boundary would break the chronological order of the chain.
    BoundaryOutOfOrder {
        /// The requested boundary.
        date: Date,
        /// The boundary the new date must follow, if any.
        lower: Option<Date>,
        /// The boundary the new date must precede, if any.
        upper: Option<Date>,
    },
    /// A date range ends before it starts.
    InvalidDateRange {
        /// The range start (inclusive).
        start: Date,
        /// The range end (inclusive).
        end: Date,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The weekday name is not recognised.
    InvalidWeekday(String),
    /// A stored version chain violates the chain invariants.
    InvalidChain {
        /// Description of the violation.
        reason: String,
    },
}

impl DomainError {
    /// Returns `true` for the duplicate-entry sub-kind of invalid argument.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateException { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeHours { hours } => {
                write!(f, "The number of hours for a day can not be negative: {hours}")
            }
            Self::HoursOutOfRange { hours } => {
                write!(f, "The number of hours for a day is out of range: {hours}")
            }
            Self::DuplicateException { date } => {
                write!(f, "An exception already exists on {date}")
            }
            Self::ExceptionNotFound { date } => {
                write!(f, "No own exception exists on {date}")
            }
            Self::ExceptionBeforeCurrentVersion { date, valid_from } => {
                write!(
                    f,
                    "Exception on {date} precedes the current version, which starts on {valid_from}"
                )
            }
            Self::InvalidVersionStart {
                effective_from,
                current_start,
            } => {
                write!(
                    f,
                    "New version starting on {effective_from} must start after {current_start}"
                )
            }
            Self::NoNextVersion { reference } => {
                write!(f, "There is no version after the one containing {reference}")
            }
            Self::NoPreviousVersion { reference } => {
                write!(
                    f,
                    "There is no version before the one containing {reference}"
                )
            }
            Self::BoundaryOutOfOrder { date, lower, upper } => {
                write!(f, "Version boundary {date} must be")?;
                match (lower, upper) {
                    (Some(lower), Some(upper)) => write!(f, " after {lower} and before {upper}"),
                    (Some(lower), None) => write!(f, " after {lower}"),
                    (None, Some(upper)) => write!(f, " before {upper}"),
                    (None, None) => write!(f, " in chronological order"),
                }
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {start} is after {end}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidWeekday(name) => write!(f, "Invalid weekday: {name}"),
            Self::InvalidChain { reason } => write!(f, "Invalid version chain: {reason}"),
        }
    }
}

impl std::error::Error for DomainError {}
