// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CalendarRegistry;
use time::macros::date;
use time::{Date, Weekday};
use workcal_domain::{CalendarId, ExceptionDay, ExceptionType};

/// Monday of the reference week (2026-06-01 to 2026-06-07).
pub const MONDAY: Date = date!(2026 - 06 - 01);
pub const WEDNESDAY: Date = date!(2026 - 06 - 03);
pub const SATURDAY: Date = date!(2026 - 06 - 06);
pub const SUNDAY: Date = date!(2026 - 06 - 07);

/// A Friday.
pub const CHRISTMAS: Date = date!(2026 - 12 - 25);

pub fn create_holiday_type() -> ExceptionType {
    ExceptionType::new("HOLIDAY", "red", false)
}

pub fn create_exception(date: Date, hours: i64) -> ExceptionDay {
    ExceptionDay::new(date, hours, create_holiday_type()).unwrap()
}

/// Sets Monday to Friday to `hours` and the weekend to zero.
pub fn set_working_week(registry: &mut CalendarRegistry, id: CalendarId, hours: i64) {
    let calendar = registry.get_mut(id).unwrap();
    calendar
        .set_hours_per_day(&[
            (Weekday::Monday, Some(hours)),
            (Weekday::Tuesday, Some(hours)),
            (Weekday::Wednesday, Some(hours)),
            (Weekday::Thursday, Some(hours)),
            (Weekday::Friday, Some(hours)),
            (Weekday::Saturday, Some(0)),
            (Weekday::Sunday, Some(0)),
        ])
        .unwrap();
}

/// A registry holding one "Base" calendar with an 8 hour working week.
pub fn create_base_registry() -> (CalendarRegistry, CalendarId) {
    let mut registry: CalendarRegistry = CalendarRegistry::new();
    let base: CalendarId = registry.create_calendar("Base").unwrap();
    set_working_week(&mut registry, base, 8);
    (registry, base)
}

/// The base registry plus Christmas as a zero hour holiday on "Base".
pub fn create_registry_with_christmas() -> (CalendarRegistry, CalendarId) {
    let (mut registry, base) = create_base_registry();
    registry
        .get_mut(base)
        .unwrap()
        .add_exception_day(create_exception(CHRISTMAS, 0))
        .unwrap();
    (registry, base)
}
