// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::registry::CalendarRegistry;
use std::fmt;

/// A record of what a command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The command name.
    pub name: String,
    /// The calendar the command was addressed to.
    pub calendar: String,
    /// Human-readable description of the change.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new `Action`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        calendar: impl Into<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            calendar: calendar.into(),
            details,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{} [{}]: {details}", self.name, self.calendar),
            None => write!(f, "{} [{}]", self.name, self.calendar),
        }
    }
}

/// The result of a successful transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The registry after the transition.
    pub new_state: CalendarRegistry,
    /// What the transition did.
    pub action: Action,
}

/// The result of applying a batch of commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// The registry after every command was applied.
    pub new_state: CalendarRegistry,
    /// One action per command, in order.
    pub actions: Vec<Action>,
}
