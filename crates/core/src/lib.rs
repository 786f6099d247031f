// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Versioned work-hour calendars with parent inheritance.
//!
//! [`CalendarRegistry`] owns every [`Calendar`] and answers capacity
//! questions by following parent references. Edits go either directly
//! through the registry and its calendars or through [`Command`]s and
//! [`apply`], which never mutate their input.

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

mod apply;
mod calendar;
mod capacity;
mod command;
mod error;
mod registry;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{apply, apply_all};
pub use calendar::Calendar;
pub use command::Command;
pub use error::CoreError;
pub use registry::CalendarRegistry;
pub use state::{Action, BatchResult, TransitionResult};
