// ABOUTME: Clock capability and civil-calendar helpers for workload bucketing
// ABOUTME: Fixed-offset "today", ISO date parsing, Monday-anchored weeks, and calendar months
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calendar
//!
//! The engine never reads ambient time. Anything that needs "today" receives
//! a [`Clock`], so tests and replays can pin the date.
//!
//! Weeks always start on Monday. Week numbers count Monday-aligned weeks from
//! the week containing January 1st, so January 1st is always in week 1.

use chrono::{Datelike, Days, Duration, Months, NaiveDate, Utc};

use crate::constants::calendar::{DEFAULT_UTC_OFFSET_HOURS, ISO_DATE_FORMAT};
use crate::errors::{AppError, AppResult, ErrorCode};

/// Source of the current civil date
pub trait Clock: Send + Sync {
    /// Today's date in the clock's calendar
    fn today(&self) -> NaiveDate;
}

/// Wall clock read at a fixed UTC offset, independent of the host timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedOffsetClock {
    offset_seconds: i64,
}

impl FixedOffsetClock {
    /// Largest offset accepted, in hours
    const MAX_OFFSET_HOURS: i32 = 14;

    /// Create a clock `hours_east` hours ahead of UTC
    ///
    /// # Errors
    ///
    /// Returns `AppError` if the offset is outside -14..=14 hours
    pub fn new(hours_east: i32) -> AppResult<Self> {
        if hours_east.abs() > Self::MAX_OFFSET_HOURS {
            return Err(AppError::new(
                ErrorCode::ValueOutOfRange,
                format!("UTC offset must be within ±14 hours, got {hours_east}"),
            ));
        }
        Ok(Self {
            offset_seconds: i64::from(hours_east) * 3600,
        })
    }

    /// UTC+9 clock used by the dashboard
    #[must_use]
    pub const fn kst() -> Self {
        Self {
            offset_seconds: DEFAULT_UTC_OFFSET_HOURS as i64 * 3600,
        }
    }
}

impl Default for FixedOffsetClock {
    fn default() -> Self {
        Self::kst()
    }
}

impl Clock for FixedOffsetClock {
    fn today(&self) -> NaiveDate {
        (Utc::now() + Duration::seconds(self.offset_seconds)).date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parse a `YYYY-MM-DD` date, returning `None` for anything else
#[must_use]
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

/// First date of a trailing window of `days` days ending on `date`
#[must_use]
pub fn window_start(date: NaiveDate, days: u32) -> NaiveDate {
    date - Days::new(u64::from(days.saturating_sub(1)))
}

/// Monday of the week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Sunday of the week containing `date`
#[must_use]
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Days::new(6)
}

/// Monday-aligned week number of `date` within its year (January 1st is week 1)
#[must_use]
pub fn week_number(date: NaiveDate) -> u32 {
    let ordinal0 = i64::from(date.ordinal0());
    let weekday = i64::from(date.weekday().num_days_from_monday());
    // Days between the Monday on or before January 1st and January 1st itself
    let jan1_offset = (weekday - ordinal0).rem_euclid(7);
    ((ordinal0 + jan1_offset) / 7 + 1) as u32
}

/// First day of the month containing `date`
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`
#[must_use]
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let start = month_start(date);
    start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(date)
}

/// Display label for the month containing `date`, e.g. "March 2025"
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
