//! Monthly eligibility rule.
//!
//! A user may participate in an activity once per calendar month (UTC). The rule compares
//! calendar dates, not elapsed time: a participation on Jan 31 23:59 allows another one on
//! Feb 1 00:00.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::error::internal::InternalError;

/// Result of checking a participation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// The user has not participated this month.
    Eligible,
    /// An administrator bypassed the check with `--force`.
    Forced,
    /// The user already participated this month.
    Ineligible { last_participation_micros: i64 },
}

impl Eligibility {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, Self::Ineligible { .. })
    }
}

/// Converts microseconds since the Unix epoch to a UTC date time.
pub fn datetime_from_micros(micros: i64) -> Result<DateTime<Utc>, InternalError> {
    DateTime::from_timestamp_micros(micros).ok_or(InternalError::InvalidTimestamp { micros })
}

/// First day of the UTC month containing `now`.
fn month_start(now: DateTime<Utc>) -> Result<NaiveDate, InternalError> {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1).ok_or(InternalError::InvalidTimestamp {
        micros: now.timestamp_micros(),
    })
}

/// Decides whether a participation attempt at `now_micros` is allowed.
///
/// # Arguments
/// - `last_participation_micros` - Stored timestamp of the last success, if any
/// - `now_micros` - Time of the attempt
/// - `is_admin` - Whether the requester is a configured administrator
/// - `force` - Whether the requester asked to bypass the check
///
/// # Returns
/// - `Ok(Eligibility)` - The decision
/// - `Err(InternalError::InvalidTimestamp)` - A timestamp cannot be represented as a date
pub fn check(
    last_participation_micros: Option<i64>,
    now_micros: i64,
    is_admin: bool,
    force: bool,
) -> Result<Eligibility, InternalError> {
    if is_admin && force {
        return Ok(Eligibility::Forced);
    }

    let Some(last_participation_micros) = last_participation_micros else {
        return Ok(Eligibility::Eligible);
    };

    let now = datetime_from_micros(now_micros)?;
    let last = datetime_from_micros(last_participation_micros)?;

    if last.date_naive() < month_start(now)? {
        Ok(Eligibility::Eligible)
    } else {
        Ok(Eligibility::Ineligible {
            last_participation_micros,
        })
    }
}

/// Calendar days (UTC) between two timestamps, or `None` if either is out of range.
pub fn days_between(earlier_micros: i64, later_micros: i64) -> Option<i64> {
    let earlier = DateTime::from_timestamp_micros(earlier_micros)?.date_naive();
    let later = DateTime::from_timestamp_micros(later_micros)?.date_naive();

    Some((later - earlier).num_days())
}
