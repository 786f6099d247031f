// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading and writing the calendar document.

use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use workcal::{CalendarRegistry, Command};

/// Loads a registry. Every stored invariant is checked while parsing.
pub fn load(path: &Path) -> Result<CalendarRegistry> {
    let contents: String = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read calendar file {}", path.display()))?;
    let registry: CalendarRegistry = serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Invalid calendar file {}", path.display()))?;
    debug!(path = %path.display(), calendars = registry.len(), "Loaded calendars");
    Ok(registry)
}

/// Writes a registry, replacing the file.
pub fn save(path: &Path, registry: &CalendarRegistry) -> Result<()> {
    let contents: String =
        serde_json::to_string_pretty(registry).wrap_err("Failed to serialize calendars")?;
    fs::write(path, contents + "\n")
        .wrap_err_with(|| format!("Failed to write calendar file {}", path.display()))?;
    info!(path = %path.display(), calendars = registry.len(), "Saved calendars");
    Ok(())
}

/// Creates a new empty document.
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; use --force to overwrite it",
            path.display()
        );
    }
    save(path, &CalendarRegistry::new())
}

/// Reads a JSON array of commands.
pub fn load_commands(path: &Path) -> Result<Vec<Command>> {
    let contents: String = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read command file {}", path.display()))?;
    serde_json::from_str(&contents)
        .wrap_err_with(|| format!("Invalid command file {}", path.display()))
}
