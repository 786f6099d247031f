// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::registry::CalendarRegistry;
use crate::state::{Action, BatchResult, TransitionResult};
use tracing::debug;
use workcal_domain::{CalendarId, ExceptionDay, weekday_name};

/// Applies a command to a registry, producing a new registry and an action
/// record.
///
/// The input registry is never modified.
///
/// # Arguments
///
/// * `registry` - The current registry (immutable)
/// * `command` - The command to apply
///
/// # Errors
///
/// Returns an error if:
/// - A named calendar does not exist
/// - The command violates a calendar or registry rule
#[allow(clippy::too_many_lines)]
pub fn apply(registry: &CalendarRegistry, command: Command) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();
    debug!(command = command_name, "Applying command");
    let mut new_state: CalendarRegistry = registry.clone();

    let (calendar, details): (String, String) = match command {
        Command::CreateCalendar { name } => {
            let id: CalendarId = new_state.create_calendar(&name)?;
            (name, format!("Created calendar {id}"))
        }
        Command::DeriveCalendar { parent, name } => {
            let parent_id: CalendarId = new_state.id_of(&parent)?;
            let id: CalendarId = new_state.new_derived_calendar(parent_id, &name)?;
            (name, format!("Created calendar {id} derived from '{parent}'"))
        }
        Command::CopyCalendar { source, name } => {
            let source_id: CalendarId = new_state.id_of(&source)?;
            let id: CalendarId = new_state.new_copy(source_id, &name)?;
            (name, format!("Created calendar {id} as a copy of '{source}'"))
        }
        Command::RenameCalendar { calendar, name } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            new_state.rename(id, &name)?;
            (calendar, format!("Renamed to '{}'", name.trim()))
        }
        Command::RemoveCalendar { calendar } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            new_state.remove_calendar(id)?;
            (calendar, format!("Removed calendar {id}"))
        }
        Command::SetHours {
            calendar,
            weekday,
            hours,
        } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            new_state.get_mut(id)?.set_hours(weekday, hours)?;
            let details: String = hours.map_or_else(
                || format!("Reset {} to default", weekday_name(weekday)),
                |hours| format!("Set {} to {hours} hours", weekday_name(weekday)),
            );
            (calendar, details)
        }
        Command::AddException {
            calendar,
            date,
            hours,
            exception_type,
        } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            let exception: ExceptionDay = ExceptionDay::new(date, hours, exception_type)?;
            let details: String = format!(
                "Added {} exception on {date} with {hours} hours",
                exception.exception_type().name()
            );
            new_state.get_mut(id)?.add_exception_day(exception)?;
            (calendar, details)
        }
        Command::RemoveException { calendar, date } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            let removed: ExceptionDay = new_state.get_mut(id)?.remove_exception_day(date)?;
            (
                calendar,
                format!(
                    "Removed {} exception on {date}",
                    removed.exception_type().name()
                ),
            )
        }
        Command::UpdateException {
            calendar,
            date,
            hours,
            exception_type,
        } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            let details: String = format!(
                "Updated exception on {date} to {} with {hours} hours",
                exception_type.name()
            );
            new_state
                .get_mut(id)?
                .update_exception_day(date, hours, exception_type)?;
            (calendar, details)
        }
        Command::SetParent { calendar, parent } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            let parent_id: Option<CalendarId> = parent
                .as_deref()
                .map(|parent| new_state.id_of(parent))
                .transpose()?;
            new_state.set_parent(id, parent_id)?;
            let details: String = parent.map_or_else(
                || String::from("Detached from parent"),
                |parent| format!("Parent set to '{parent}'"),
            );
            (calendar, details)
        }
        Command::NewVersion {
            calendar,
            effective_from,
        } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            new_state.get_mut(id)?.new_version(effective_from)?;
            (
                calendar,
                format!("Started a new version on {effective_from}"),
            )
        }
        Command::SetExpiringDate {
            calendar,
            date,
            reference,
        } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            new_state.get_mut(id)?.set_expiring_date(date, reference)?;
            (
                calendar,
                format!("Version containing {reference} now expires on {date}"),
            )
        }
        Command::SetValidFrom {
            calendar,
            date,
            reference,
        } => {
            let id: CalendarId = new_state.id_of(&calendar)?;
            new_state.get_mut(id)?.set_valid_from(date, reference)?;
            (
                calendar,
                format!("Version containing {reference} now starts on {date}"),
            )
        }
    };

    Ok(TransitionResult {
        new_state,
        action: Action::new(command_name, calendar, Some(details)),
    })
}

/// Applies commands in order. Either every command succeeds or nothing is
/// applied and the first error is returned.
///
/// # Errors
///
/// Returns the error of the first command that fails.
pub fn apply_all(
    registry: &CalendarRegistry,
    commands: impl IntoIterator<Item = Command>,
) -> Result<BatchResult, CoreError> {
    let mut new_state: CalendarRegistry = registry.clone();
    let mut actions: Vec<Action> = Vec::new();
    for command in commands {
        let result: TransitionResult = apply(&new_state, command)?;
        new_state = result.new_state;
        actions.push(result.action);
    }
    debug!(commands = actions.len(), "Applied command batch");
    Ok(BatchResult { new_state, actions })
}
