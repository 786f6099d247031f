// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workcal_domain::{CalendarId, DomainError};

/// Errors that can occur while editing or querying calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No calendar with this id exists in the registry.
    CalendarNotFound(CalendarId),
    /// No calendar with this name exists in the registry.
    CalendarNameNotFound(String),
    /// Another calendar already uses this name.
    DuplicateCalendarName(String),
    /// Calendar name is empty or invalid.
    InvalidName(String),
    /// The parent assignment would make the calendar its own ancestor.
    CyclicParent {
        /// The calendar being edited.
        calendar: CalendarId,
        /// The rejected parent.
        parent: CalendarId,
    },
    /// The calendar is still a parent of another calendar.
    ParentInUse {
        /// The calendar that was to be removed.
        calendar: CalendarId,
        /// A calendar that still references it.
        dependant: CalendarId,
    },
    /// A stored registry is inconsistent.
    InvalidRegistry {
        /// Description of the inconsistency.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CalendarNotFound(id) => write!(f, "Calendar {id} not found"),
            Self::CalendarNameNotFound(name) => write!(f, "Calendar '{name}' not found"),
            Self::DuplicateCalendarName(name) => {
                write!(f, "Calendar '{name}' already exists")
            }
            Self::InvalidName(msg) => write!(f, "Invalid calendar name: {msg}"),
            Self::CyclicParent { calendar, parent } => {
                write!(
                    f,
                    "Calendar {parent} cannot be the parent of {calendar}: it would create a cycle"
                )
            }
            Self::ParentInUse {
                calendar,
                dependant,
            } => {
                write!(
                    f,
                    "Calendar {calendar} cannot be removed: calendar {dependant} derives from it"
                )
            }
            Self::InvalidRegistry { reason } => write!(f, "Invalid calendar registry: {reason}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
