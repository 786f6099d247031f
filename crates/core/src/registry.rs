// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ownership of calendars and the references between them.
//!
//! A calendar refers to its parent by [`CalendarId`]; the registry owns
//! every calendar and is the only place those ids are resolved. Parent
//! assignment is the single entry point that can introduce a cycle, so the
//! check lives there and resolution can follow parents without a depth
//! guard.

use crate::calendar::Calendar;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};
use workcal_domain::{CalendarId, CalendarVersion};

/// The set of calendars known to the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegistryRecord", into = "RegistryRecord")]
pub struct CalendarRegistry {
    calendars: BTreeMap<CalendarId, Calendar>,
    next_id: u64,
}

/// Stored form of a registry. Version chains are kept verbatim.
#[derive(Serialize, Deserialize)]
struct RegistryRecord {
    next_id: u64,
    calendars: Vec<Calendar>,
}

impl From<CalendarRegistry> for RegistryRecord {
    fn from(registry: CalendarRegistry) -> Self {
        Self {
            next_id: registry.next_id,
            calendars: registry.calendars.into_values().collect(),
        }
    }
}

impl TryFrom<RegistryRecord> for CalendarRegistry {
    type Error = CoreError;

    fn try_from(record: RegistryRecord) -> Result<Self, Self::Error> {
        Self::from_calendars(record.calendars, record.next_id)
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calendars: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a registry from stored calendars.
    ///
    /// Nothing is recomputed; the calendars are checked and kept as given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two calendars share an id or a name
    /// - A name is invalid
    /// - A version references a parent that is not in the set
    /// - The parent graph contains a cycle
    /// - A calendar id leaves no room for new ids
    pub fn from_calendars(calendars: Vec<Calendar>, next_id: u64) -> Result<Self, CoreError> {
        let mut registry: Self = Self::new();
        for calendar in calendars {
            let id: CalendarId = calendar.id();
            let name: String = validate_name(calendar.name())?;
            if registry.calendars.values().any(|other| other.name() == name) {
                return Err(CoreError::DuplicateCalendarName(name));
            }
            if registry.calendars.insert(id, calendar).is_some() {
                return Err(CoreError::InvalidRegistry {
                    reason: format!("calendar id {id} is used twice"),
                });
            }
        }

        let highest: u64 = registry
            .calendars
            .keys()
            .map(CalendarId::value)
            .max()
            .unwrap_or(0);
        let floor: u64 = highest
            .checked_add(1)
            .ok_or_else(|| exhausted_ids(highest))?;
        registry.next_id = next_id.max(floor);

        for calendar in registry.calendars.values() {
            for parent in calendar.referenced_parents() {
                if !registry.calendars.contains_key(&parent) {
                    return Err(CoreError::InvalidRegistry {
                        reason: format!(
                            "calendar {} references missing parent {parent}",
                            calendar.id()
                        ),
                    });
                }
                if registry.reaches(parent, calendar.id()) {
                    return Err(CoreError::CyclicParent {
                        calendar: calendar.id(),
                        parent,
                    });
                }
            }
        }

        Ok(registry)
    }

    /// Returns the number of calendars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Whether the registry holds no calendars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }

    /// Iterates all calendars in id order.
    pub fn calendars(&self) -> impl Iterator<Item = &Calendar> + '_ {
        self.calendars.values()
    }

    /// Returns a calendar by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar does not exist.
    pub fn get(&self, id: CalendarId) -> Result<&Calendar, CoreError> {
        self.calendars
            .get(&id)
            .ok_or(CoreError::CalendarNotFound(id))
    }

    /// Returns a calendar by id for editing its current version.
    ///
    /// # Errors
    ///
    /// Returns an error if the calendar does not exist.
    pub fn get_mut(&mut self, id: CalendarId) -> Result<&mut Calendar, CoreError> {
        self.calendars
            .get_mut(&id)
            .ok_or(CoreError::CalendarNotFound(id))
    }

    /// Returns a calendar by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no calendar has this name.
    pub fn find_by_name(&self, name: &str) -> Result<&Calendar, CoreError> {
        let name: &str = name.trim();
        self.calendars
            .values()
            .find(|calendar| calendar.name() == name)
            .ok_or_else(|| CoreError::CalendarNameNotFound(name.to_string()))
    }

    /// Returns the id of the calendar with this name.
    ///
    /// # Errors
    ///
    /// Returns an error if no calendar has this name.
    pub fn id_of(&self, name: &str) -> Result<CalendarId, CoreError> {
        self.find_by_name(name).map(Calendar::id)
    }

    /// Creates a calendar with a single empty version and no parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or already used, or if no
    /// calendar ids remain.
    pub fn create_calendar(&mut self, name: &str) -> Result<CalendarId, CoreError> {
        let name: String = self.available_name(name)?;
        let id: CalendarId = self.allocate_id()?;
        info!(calendar = %name, %id, "Created calendar");
        self.calendars.insert(id, Calendar::new(id, name));
        Ok(id)
    }

    /// Creates a calendar that inherits everything from `parent` until it is
    /// edited.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent does not exist
    /// - The name is invalid or already used
    /// - No calendar ids remain
    pub fn new_derived_calendar(
        &mut self,
        parent: CalendarId,
        name: &str,
    ) -> Result<CalendarId, CoreError> {
        self.get(parent)?;
        let name: String = self.available_name(name)?;
        let id: CalendarId = self.allocate_id()?;
        info!(calendar = %name, %id, %parent, "Created derived calendar");
        self.calendars.insert(
            id,
            Calendar::with_version(id, name, CalendarVersion::derived_from(parent)),
        );
        Ok(id)
    }

    /// Creates a calendar holding a copy of the current version of `source`,
    /// parent reference included. History is not copied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source does not exist
    /// - The name is invalid or already used
    /// - No calendar ids remain
    pub fn new_copy(&mut self, source: CalendarId, name: &str) -> Result<CalendarId, CoreError> {
        let version: CalendarVersion = self.get(source)?.current().clone();
        let name: String = self.available_name(name)?;
        let id: CalendarId = self.allocate_id()?;
        info!(calendar = %name, %id, %source, "Copied calendar");
        self.calendars
            .insert(id, Calendar::with_version(id, name, version));
        Ok(id)
    }

    /// Renames a calendar.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The calendar does not exist
    /// - The name is invalid or used by another calendar
    pub fn rename(&mut self, id: CalendarId, name: &str) -> Result<(), CoreError> {
        let name: String = validate_name(name)?;
        if self
            .calendars
            .values()
            .any(|other| other.id() != id && other.name() == name)
        {
            return Err(CoreError::DuplicateCalendarName(name));
        }
        self.get_mut(id)?.set_name(name);
        Ok(())
    }

    /// Removes a calendar that no other calendar derives from.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The calendar does not exist
    /// - Any version of another calendar still references it
    pub fn remove_calendar(&mut self, id: CalendarId) -> Result<Calendar, CoreError> {
        self.get(id)?;
        if let Some(dependant) = self.calendars.values().find(|calendar| {
            calendar.id() != id && calendar.referenced_parents().any(|parent| parent == id)
        }) {
            return Err(CoreError::ParentInUse {
                calendar: id,
                dependant: dependant.id(),
            });
        }
        info!(%id, "Removed calendar");
        self.calendars
            .remove(&id)
            .ok_or(CoreError::CalendarNotFound(id))
    }

    /// Sets or clears the parent of a calendar's current version.
    ///
    /// Superseded versions keep the parent they had.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either calendar does not exist
    /// - The calendar is the parent itself or one of its ancestors
    pub fn set_parent(
        &mut self,
        id: CalendarId,
        parent: Option<CalendarId>,
    ) -> Result<(), CoreError> {
        self.get(id)?;
        if let Some(parent) = parent {
            self.get(parent)?;
            if self.reaches(parent, id) {
                warn!(calendar = %id, %parent, "Rejected cyclic parent assignment");
                return Err(CoreError::CyclicParent {
                    calendar: id,
                    parent,
                });
            }
        }
        info!(calendar = %id, parent = ?parent, "Changed calendar parent");
        self.get_mut(id)?.set_parent(parent);
        Ok(())
    }

    /// Whether `target` is `from` or one of its ancestors through any
    /// version.
    fn reaches(&self, from: CalendarId, target: CalendarId) -> bool {
        let mut visited: BTreeSet<CalendarId> = BTreeSet::new();
        let mut pending: Vec<CalendarId> = vec![from];
        while let Some(current) = pending.pop() {
            if current == target {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(calendar) = self.calendars.get(&current) {
                pending.extend(calendar.referenced_parents());
            }
        }
        false
    }

    fn allocate_id(&mut self) -> Result<CalendarId, CoreError> {
        let next: u64 = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| exhausted_ids(self.next_id))?;
        let id: CalendarId = CalendarId::new(self.next_id);
        self.next_id = next;
        Ok(id)
    }

    fn available_name(&self, name: &str) -> Result<String, CoreError> {
        let name: String = validate_name(name)?;
        if self.calendars.values().any(|other| other.name() == name) {
            return Err(CoreError::DuplicateCalendarName(name));
        }
        Ok(name)
    }
}

/// Validates and normalizes a calendar name.
fn validate_name(name: &str) -> Result<String, CoreError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidName(String::from(
            "Calendar name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

fn exhausted_ids(id: u64) -> CoreError {
    CoreError::InvalidRegistry {
        reason: format!("calendar id {id} leaves no room for new ids"),
    }
}
