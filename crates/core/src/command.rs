// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::{Date, Weekday};
use workcal_domain::ExceptionType;
use workcal_domain::dates::{iso_date, weekday_serde};

/// A command represents an edit of the calendar registry as data only.
///
/// Calendars are named, not referenced by id, so command documents stay
/// readable and portable between registries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Create an empty calendar.
    CreateCalendar {
        /// Name of the new calendar.
        name: String,
    },
    /// Create a calendar that inherits everything from `parent`.
    DeriveCalendar {
        /// Name of the calendar to derive from.
        parent: String,
        /// Name of the new calendar.
        name: String,
    },
    /// Create a calendar from the current version of `source`.
    CopyCalendar {
        /// Name of the calendar to copy.
        source: String,
        /// Name of the new calendar.
        name: String,
    },
    /// Rename a calendar.
    RenameCalendar {
        /// Current name.
        calendar: String,
        /// New name.
        name: String,
    },
    /// Remove a calendar nothing derives from.
    RemoveCalendar {
        /// Calendar to remove.
        calendar: String,
    },
    /// Set or reset the hours of a weekday on the current version.
    SetHours {
        /// Calendar to edit.
        calendar: String,
        /// The weekday.
        #[serde(with = "weekday_serde")]
        weekday: Weekday,
        /// Hours, or `None` to defer to the parent.
        #[serde(default)]
        hours: Option<i64>,
    },
    /// Add an exception to the current version.
    AddException {
        /// Calendar to edit.
        calendar: String,
        /// Date of the exception.
        #[serde(with = "iso_date")]
        date: Date,
        /// Hours available on that date.
        hours: i64,
        /// Category of the exception.
        exception_type: ExceptionType,
    },
    /// Remove an own exception from the current version.
    RemoveException {
        /// Calendar to edit.
        calendar: String,
        /// Date of the exception.
        #[serde(with = "iso_date")]
        date: Date,
    },
    /// Replace the hours and category of an own exception.
    UpdateException {
        /// Calendar to edit.
        calendar: String,
        /// Date of the exception.
        #[serde(with = "iso_date")]
        date: Date,
        /// New hours.
        hours: i64,
        /// New category.
        exception_type: ExceptionType,
    },
    /// Set or clear the parent of the current version.
    SetParent {
        /// Calendar to edit.
        calendar: String,
        /// Name of the new parent, or `None` to detach.
        #[serde(default)]
        parent: Option<String>,
    },
    /// Close the current version and start a new one.
    NewVersion {
        /// Calendar to edit.
        calendar: String,
        /// First day of the new version.
        #[serde(with = "iso_date")]
        effective_from: Date,
    },
    /// Move the end of the version containing `reference`.
    SetExpiringDate {
        /// Calendar to edit.
        calendar: String,
        /// New boundary.
        #[serde(with = "iso_date")]
        date: Date,
        /// A date inside the version whose end moves.
        #[serde(with = "iso_date")]
        reference: Date,
    },
    /// Move the start of the version containing `reference`.
    SetValidFrom {
        /// Calendar to edit.
        calendar: String,
        /// New boundary.
        #[serde(with = "iso_date")]
        date: Date,
        /// A date inside the version whose start moves.
        #[serde(with = "iso_date")]
        reference: Date,
    },
}

impl Command {
    /// Returns the command name used in action records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateCalendar { .. } => "CreateCalendar",
            Self::DeriveCalendar { .. } => "DeriveCalendar",
            Self::CopyCalendar { .. } => "CopyCalendar",
            Self::RenameCalendar { .. } => "RenameCalendar",
            Self::RemoveCalendar { .. } => "RemoveCalendar",
            Self::SetHours { .. } => "SetHours",
            Self::AddException { .. } => "AddException",
            Self::RemoveException { .. } => "RemoveException",
            Self::UpdateException { .. } => "UpdateException",
            Self::SetParent { .. } => "SetParent",
            Self::NewVersion { .. } => "NewVersion",
            Self::SetExpiringDate { .. } => "SetExpiringDate",
            Self::SetValidFrom { .. } => "SetValidFrom",
        }
    }
}
