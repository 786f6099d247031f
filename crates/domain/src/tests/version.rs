// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalendarId, CalendarVersion, DayHours, DomainError, ExceptionDay, ExceptionType,
    validate_version_chain,
};
use time::Weekday;
use time::macros::date;

fn holiday() -> ExceptionType {
    ExceptionType::new("HOLIDAY", "red", false)
}

fn christmas() -> ExceptionDay {
    ExceptionDay::new(date!(2026 - 12 - 25), 0, holiday()).unwrap()
}

#[test]
fn test_new_version_is_empty_and_unbounded() {
    let version: CalendarVersion = CalendarVersion::new();
    assert!(version.week().iter().all(|(_, hours)| hours.is_default()));
    assert_eq!(version.exceptions().count(), 0);
    assert_eq!(version.parent(), None);
    assert_eq!(version.valid_from(), None);
    assert_eq!(version.expiring_date(), None);
    assert!(version.contains(date!(1900 - 01 - 01)));
}

#[test]
fn test_derived_version_points_at_parent() {
    let version: CalendarVersion = CalendarVersion::derived_from(CalendarId::new(3));
    assert_eq!(version.parent(), Some(CalendarId::new(3)));
    assert_eq!(version.hours(Weekday::Monday), DayHours::Default);
}

#[test]
fn test_expiring_date_is_exclusive() {
    let mut version: CalendarVersion = CalendarVersion::new();
    version.set_expiring_date(Some(date!(2026 - 06 - 03)));

    assert!(version.is_posterior_to(date!(2026 - 06 - 02)));
    assert!(!version.is_posterior_to(date!(2026 - 06 - 03)));
    assert!(version.contains(date!(2026 - 06 - 02)));
    assert!(!version.contains(date!(2026 - 06 - 03)));
}

#[test]
fn test_valid_from_is_inclusive() {
    let version: CalendarVersion = CalendarVersion::new().successor(date!(2026 - 06 - 03));
    assert!(!version.contains(date!(2026 - 06 - 02)));
    assert!(version.contains(date!(2026 - 06 - 03)));
}

#[test]
fn test_add_duplicate_exception_fails() {
    let mut version: CalendarVersion = CalendarVersion::new();
    version.add_exception(christmas()).unwrap();

    let second: ExceptionDay = ExceptionDay::new(date!(2026 - 12 - 25), 4, holiday()).unwrap();
    let result: Result<(), DomainError> = version.add_exception(second);

    assert_eq!(
        result,
        Err(DomainError::DuplicateException {
            date: date!(2026 - 12 - 25)
        })
    );
    assert_eq!(version.exception(date!(2026 - 12 - 25)), Some(&christmas()));
}

#[test]
fn test_add_exception_before_start_fails() {
    let mut version: CalendarVersion = CalendarVersion::new().successor(date!(2027 - 01 - 01));
    let result: Result<(), DomainError> = version.add_exception(christmas());

    assert_eq!(
        result,
        Err(DomainError::ExceptionBeforeCurrentVersion {
            date: date!(2026 - 12 - 25),
            valid_from: date!(2027 - 01 - 01),
        })
    );
    assert_eq!(version.exceptions().count(), 0);
}

#[test]
fn test_remove_missing_exception_fails() {
    let mut version: CalendarVersion = CalendarVersion::new();
    assert_eq!(
        version.remove_exception(date!(2026 - 12 - 25)),
        Err(DomainError::ExceptionNotFound {
            date: date!(2026 - 12 - 25)
        })
    );
}

#[test]
fn test_update_exception_replaces_hours_and_type() {
    let mut version: CalendarVersion = CalendarVersion::new();
    version.add_exception(christmas()).unwrap();

    let shift: ExceptionType = ExceptionType::new("SPECIAL_SHIFT", "blue", false);
    version
        .update_exception(date!(2026 - 12 - 25), 8, shift.clone())
        .unwrap();

    let updated: &ExceptionDay = version.exception(date!(2026 - 12 - 25)).unwrap();
    assert_eq!(updated.hours(), 8);
    assert_eq!(updated.exception_type(), &shift);
}

#[test]
fn test_update_exception_validates_before_writing() {
    let mut version: CalendarVersion = CalendarVersion::new();
    version.add_exception(christmas()).unwrap();

    let result: Result<(), DomainError> =
        version.update_exception(date!(2026 - 12 - 25), -2, holiday());

    assert_eq!(result, Err(DomainError::NegativeHours { hours: -2 }));
    assert_eq!(version.exception(date!(2026 - 12 - 25)), Some(&christmas()));
}

#[test]
fn test_successor_is_a_deep_copy() {
    let mut original: CalendarVersion = CalendarVersion::derived_from(CalendarId::new(1));
    original.set_hours(Weekday::Monday, DayHours::Explicit(8));
    original.add_exception(christmas()).unwrap();

    let mut next: CalendarVersion = original.successor(date!(2026 - 06 - 01));
    assert_eq!(next.valid_from(), Some(date!(2026 - 06 - 01)));
    assert_eq!(next.expiring_date(), None);
    assert_eq!(next.parent(), Some(CalendarId::new(1)));

    next.set_hours(Weekday::Monday, DayHours::Explicit(4));
    next.remove_exception(date!(2026 - 12 - 25)).unwrap();

    assert_eq!(original.hours(Weekday::Monday), DayHours::Explicit(8));
    assert!(original.exception(date!(2026 - 12 - 25)).is_some());
}

#[test]
fn test_unbounded_copy_drops_bounds_only() {
    let mut version: CalendarVersion = CalendarVersion::new().successor(date!(2026 - 06 - 01));
    version.set_expiring_date(Some(date!(2026 - 07 - 01)));
    version.set_hours(Weekday::Friday, DayHours::Explicit(6));

    let copy: CalendarVersion = version.unbounded_copy();
    assert_eq!(copy.valid_from(), None);
    assert_eq!(copy.expiring_date(), None);
    assert_eq!(copy.hours(Weekday::Friday), DayHours::Explicit(6));
}

#[test]
fn test_version_serialization_round_trip() {
    let mut version: CalendarVersion = CalendarVersion::derived_from(CalendarId::new(2));
    version.set_hours(Weekday::Monday, DayHours::Explicit(8));
    version.add_exception(christmas()).unwrap();
    version.set_expiring_date(Some(date!(2027 - 01 - 01)));

    let json: serde_json::Value = serde_json::to_value(&version).unwrap();
    assert_eq!(json["parent"], serde_json::json!(2));
    assert_eq!(json["expiring_date"], serde_json::json!("2027-01-01"));
    assert!(json.get("valid_from").is_none());
    assert_eq!(json["exceptions"][0]["date"], serde_json::json!("2026-12-25"));

    let restored: CalendarVersion = serde_json::from_value(json).unwrap();
    assert_eq!(restored, version);
}

#[test]
fn test_version_deserialization_rejects_duplicate_exceptions() {
    let json: serde_json::Value = serde_json::json!({
        "exceptions": [
            { "date": "2026-12-25", "hours": 0, "exception_type": { "name": "A", "color": "red", "resource_specific": false } },
            { "date": "2026-12-25", "hours": 4, "exception_type": { "name": "B", "color": "red", "resource_specific": false } }
        ]
    });
    assert!(serde_json::from_value::<CalendarVersion>(json).is_err());
}

#[test]
fn test_valid_chain() {
    let mut first: CalendarVersion = CalendarVersion::new();
    first.set_expiring_date(Some(date!(2026 - 06 - 01)));
    let mut second: CalendarVersion = first.successor(date!(2026 - 06 - 01));
    second.set_expiring_date(Some(date!(2026 - 07 - 01)));
    let third: CalendarVersion = second.successor(date!(2026 - 07 - 01));

    assert_eq!(validate_version_chain(&[first, second, third]), Ok(()));
}

#[test]
fn test_empty_chain_is_invalid() {
    assert!(matches!(
        validate_version_chain(&[]),
        Err(DomainError::InvalidChain { .. })
    ));
}

#[test]
fn test_chain_with_gap_is_invalid() {
    let mut first: CalendarVersion = CalendarVersion::new();
    first.set_expiring_date(Some(date!(2026 - 06 - 01)));
    let second: CalendarVersion = first.successor(date!(2026 - 06 - 02));

    assert!(matches!(
        validate_version_chain(&[first, second]),
        Err(DomainError::InvalidChain { .. })
    ));
}

#[test]
fn test_chain_out_of_order_is_invalid() {
    let mut first: CalendarVersion = CalendarVersion::new();
    first.set_expiring_date(Some(date!(2026 - 07 - 01)));
    let mut second: CalendarVersion = first.successor(date!(2026 - 07 - 01));
    second.set_expiring_date(Some(date!(2026 - 06 - 01)));
    let third: CalendarVersion = second.successor(date!(2026 - 06 - 01));

    assert!(matches!(
        validate_version_chain(&[first, second, third]),
        Err(DomainError::InvalidChain { .. })
    ));
}

#[test]
fn test_chain_with_open_last_boundary_is_invalid() {
    let mut only: CalendarVersion = CalendarVersion::new();
    only.set_expiring_date(Some(date!(2026 - 07 - 01)));

    assert!(matches!(
        validate_version_chain(&[only]),
        Err(DomainError::InvalidChain { .. })
    ));
}
