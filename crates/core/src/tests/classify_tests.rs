// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CalendarRegistry;
use crate::tests::helpers::{
    CHRISTMAS, MONDAY, SATURDAY, create_base_registry, create_exception,
    create_registry_with_christmas,
};
use time::{Date, Weekday};
use workcal_domain::{CalendarId, DayType};

#[test]
fn test_holiday_scenario() {
    let (mut registry, base) = create_registry_with_christmas();

    assert_eq!(registry.capacity_at(base, CHRISTMAS).unwrap(), 0);
    assert_eq!(
        registry.classify(base, CHRISTMAS).unwrap(),
        DayType::OwnException
    );

    let child: CalendarId = registry.new_derived_calendar(base, "Child").unwrap();
    assert_eq!(registry.capacity_at(child, CHRISTMAS).unwrap(), 0);
    assert_eq!(
        registry.classify(child, CHRISTMAS).unwrap(),
        DayType::AncestorException
    );
}

#[test]
fn test_explicit_zero_weekday_is_zero_hours() {
    let (registry, base) = create_base_registry();

    assert_eq!(
        registry.classify(base, SATURDAY).unwrap(),
        DayType::ZeroHours
    );
}

#[test]
fn test_working_day_is_normal() {
    let (registry, base) = create_base_registry();

    assert_eq!(registry.classify(base, MONDAY).unwrap(), DayType::Normal);
}

#[test]
fn test_default_without_parent_is_zero_hours() {
    let mut registry: CalendarRegistry = CalendarRegistry::new();
    let id: CalendarId = registry.create_calendar("Empty").unwrap();

    assert_eq!(registry.classify(id, MONDAY).unwrap(), DayType::ZeroHours);
}

#[test]
fn test_exception_with_hours_is_still_an_exception() {
    let (mut registry, base) = create_base_registry();
    registry
        .get_mut(base)
        .unwrap()
        .add_exception_day(create_exception(SATURDAY, 5))
        .unwrap();

    assert_eq!(
        registry.classify(base, SATURDAY).unwrap(),
        DayType::OwnException
    );
}

#[test]
fn test_own_weekday_rule_hides_ancestor_exception() {
    let (mut registry, base) = create_registry_with_christmas();
    let child: CalendarId = registry.new_derived_calendar(base, "Child").unwrap();
    registry
        .get_mut(child)
        .unwrap()
        .set_hours(Weekday::Friday, Some(6))
        .unwrap();

    assert_eq!(registry.capacity_at(child, CHRISTMAS).unwrap(), 6);
    assert_eq!(registry.classify(child, CHRISTMAS).unwrap(), DayType::Normal);
}

#[test]
fn test_exception_lookups_agree_with_weekday_rule_hiding() {
    let (mut registry, base) = create_registry_with_christmas();
    let child: CalendarId = registry.new_derived_calendar(base, "Child").unwrap();
    registry
        .get_mut(child)
        .unwrap()
        .set_hours(Weekday::Friday, Some(6))
        .unwrap();
    registry
        .get_mut(base)
        .unwrap()
        .add_exception_day(create_exception(MONDAY, 2))
        .unwrap();

    assert_eq!(registry.classify(child, CHRISTMAS).unwrap(), DayType::Normal);
    assert!(registry.exception_day(child, CHRISTMAS).unwrap().is_none());
    assert_eq!(
        registry.classify(child, MONDAY).unwrap(),
        DayType::AncestorException
    );
    assert_eq!(
        registry
            .exception_day(child, MONDAY)
            .unwrap()
            .map(|exception| exception.hours()),
        Some(2)
    );

    let dates: Vec<Date> = registry
        .exceptions(child)
        .unwrap()
        .iter()
        .map(|exception| exception.date())
        .collect();
    assert_eq!(dates, vec![MONDAY]);
}

#[test]
fn test_own_exception_wins_over_ancestor_exception() {
    let (mut registry, base) = create_registry_with_christmas();
    let child: CalendarId = registry.new_derived_calendar(base, "Child").unwrap();
    registry
        .get_mut(child)
        .unwrap()
        .add_exception_day(create_exception(CHRISTMAS, 3))
        .unwrap();

    assert_eq!(registry.capacity_at(child, CHRISTMAS).unwrap(), 3);
    assert_eq!(
        registry.classify(child, CHRISTMAS).unwrap(),
        DayType::OwnException
    );
}

#[test]
fn test_grandchild_sees_ancestor_exception() {
    let (mut registry, base) = create_registry_with_christmas();
    let child: CalendarId = registry.new_derived_calendar(base, "Child").unwrap();
    let grandchild: CalendarId = registry
        .new_derived_calendar(child, "Grandchild")
        .unwrap();

    assert_eq!(
        registry.classify(grandchild, CHRISTMAS).unwrap(),
        DayType::AncestorException
    );
    assert_eq!(registry.classify(grandchild, MONDAY).unwrap(), DayType::Normal);
}
