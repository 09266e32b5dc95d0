// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-granularity calendar arithmetic.
//!
//! Every value handled here is a pure calendar date (`time::Date`): there is
//! no time-of-day component, so daylight saving transitions and leap seconds
//! cannot shift a day difference. The only place a wall clock is consulted
//! is [`today_in`], which collapses "now" to a date in a declared timezone.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month};

/// Textual date layout used on the wire (`DD/MM/YYYY`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// Returns the number of whole days from `anchor` to `date`.
///
/// The result is negative when `date` precedes `anchor`.
#[must_use]
pub fn day_index_since(anchor: Date, date: Date) -> i64 {
    (date - anchor).whole_days()
}

/// Adds `days` (possibly negative) whole days to `date`.
///
/// # Errors
///
/// Returns an error if the result falls outside the representable calendar.
pub fn add_days(date: Date, days: i64) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("adding {days} days to {}", format_date(date)),
        })
}

/// Formats a date as `DD/MM/YYYY`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Parses a `DD/MM/YYYY` date. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the text is not a valid calendar date in that layout.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Returns the weekday of `date` numbered 0 = Sunday through 6 = Saturday.
#[must_use]
pub const fn weekday_index(date: Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns an error if the name is not a known timezone.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Returns the calendar date of `instant` as observed in `tz`.
///
/// # Errors
///
/// Returns an error if the local date cannot be represented as a `time::Date`.
pub fn date_in_timezone(instant: DateTime<Utc>, tz: Tz) -> Result<Date, DomainError> {
    let local = instant.with_timezone(&tz).date_naive();

    // Convert chrono::NaiveDate to time::Date
    let month: Month = u8::try_from(local.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("converting month of {local}"),
        })?;
    let day: u8 = u8::try_from(local.day()).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("converting day of {local}"),
    })?;

    Date::from_calendar_date(local.year(), month, day).map_err(|e| {
        DomainError::DateArithmeticOverflow {
            operation: format!("converting {local}: {e}"),
        }
    })
}

/// Returns today's calendar date in `tz`.
///
/// # Errors
///
/// Returns an error if the local date cannot be represented as a `time::Date`.
pub fn today_in(tz: Tz) -> Result<Date, DomainError> {
    date_in_timezone(Utc::now(), tz)
}
