// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::NegativeHours { hours: -5 };
    assert_eq!(
        format!("{err}"),
        "The number of hours for a day can not be negative: -5"
    );

    let err: DomainError = DomainError::DuplicateException {
        date: date!(2026 - 12 - 25),
    };
    assert_eq!(format!("{err}"), "An exception already exists on 2026-12-25");

    let err: DomainError = DomainError::ExceptionNotFound {
        date: date!(2026 - 12 - 25),
    };
    assert_eq!(format!("{err}"), "No own exception exists on 2026-12-25");

    let err: DomainError = DomainError::InvalidVersionStart {
        effective_from: date!(2026 - 06 - 01),
        current_start: date!(2026 - 06 - 05),
    };
    assert_eq!(
        format!("{err}"),
        "New version starting on 2026-06-01 must start after 2026-06-05"
    );

    let err: DomainError = DomainError::NoNextVersion {
        reference: date!(2026 - 06 - 03),
    };
    assert_eq!(
        format!("{err}"),
        "There is no version after the one containing 2026-06-03"
    );

    let err: DomainError = DomainError::InvalidWeekday(String::from("funday"));
    assert_eq!(format!("{err}"), "Invalid weekday: funday");
}

#[test]
fn test_boundary_error_display_names_both_limits() {
    let err: DomainError = DomainError::BoundaryOutOfOrder {
        date: date!(2026 - 07 - 01),
        lower: Some(date!(2026 - 06 - 01)),
        upper: Some(date!(2026 - 06 - 15)),
    };
    assert_eq!(
        format!("{err}"),
        "Version boundary 2026-07-01 must be after 2026-06-01 and before 2026-06-15"
    );

    let err: DomainError = DomainError::BoundaryOutOfOrder {
        date: date!(2026 - 05 - 01),
        lower: Some(date!(2026 - 06 - 01)),
        upper: None,
    };
    assert_eq!(
        format!("{err}"),
        "Version boundary 2026-05-01 must be after 2026-06-01"
    );
}

#[test]
fn test_only_duplicates_are_flagged_as_duplicate() {
    assert!(
        DomainError::DuplicateException {
            date: date!(2026 - 12 - 25)
        }
        .is_duplicate()
    );
    assert!(!DomainError::NegativeHours { hours: -1 }.is_duplicate());
}
