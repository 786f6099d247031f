// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::version::CalendarVersion;
use time::Date;

/// Validates a raw hour value.
///
/// Negative values are rejected rather than clamped.
///
/// # Errors
///
/// Returns an error if the value is negative or does not fit in `u32`.
pub fn validate_hours(hours: i64) -> Result<u32, DomainError> {
    if hours < 0 {
        return Err(DomainError::NegativeHours { hours });
    }
    u32::try_from(hours).map_err(|_| DomainError::HoursOutOfRange { hours })
}

/// Validates that an inclusive date range is not reversed.
///
/// # Errors
///
/// Returns an error if `start` is after `end`.
pub fn validate_date_range(start: Date, end: Date) -> Result<(), DomainError> {
    if start > end {
        return Err(DomainError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Validates the invariants of a stored version chain.
///
/// The chain must be non-empty, the first version must be open at the
/// start, the last version must be open at the end, and every inner
/// boundary must be shared by its two neighbors and strictly increasing.
///
/// # Errors
///
/// Returns an error describing the first violation found.
pub fn validate_version_chain(versions: &[CalendarVersion]) -> Result<(), DomainError> {
    let (Some(first), Some(last)) = (versions.first(), versions.last()) else {
        return Err(DomainError::InvalidChain {
            reason: "a calendar needs at least one version".to_string(),
        });
    };

    if first.valid_from().is_some() {
        return Err(DomainError::InvalidChain {
            reason: "the first version must not have a start date".to_string(),
        });
    }
    if last.expiring_date().is_some() {
        return Err(DomainError::InvalidChain {
            reason: "the last version must not have an expiring date".to_string(),
        });
    }

    let mut previous_boundary: Option<Date> = None;
    for pair in versions.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        let Some(boundary) = earlier.expiring_date() else {
            return Err(DomainError::InvalidChain {
                reason: "only the last version may be open-ended".to_string(),
            });
        };
        if later.valid_from() != Some(boundary) {
            return Err(DomainError::InvalidChain {
                reason: format!("version boundary {boundary} is not shared by the next version"),
            });
        }
        if previous_boundary.is_some_and(|previous| previous >= boundary) {
            return Err(DomainError::InvalidChain {
                reason: format!("version boundary {boundary} is out of order"),
            });
        }
        previous_boundary = Some(boundary);
    }

    Ok(())
}
