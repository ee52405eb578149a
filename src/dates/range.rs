use chrono::{Datelike, Duration, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::bucket::{date_start_millis, local_date, start_of_day, EpochMillis, DAY_MS};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RangeFilter {
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
    Custom,
}

/// A concrete timestamp interval resolved from a symbolic filter. Derived,
/// never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub filter: RangeFilter,
    pub start: EpochMillis,
    pub end: EpochMillis,
}

impl DateRange {
    /// Resolves a symbolic filter against `now`. Weeks start on Monday (ISO).
    /// `Custom` takes the caller's bounds as given, without validation.
    pub fn resolve(
        filter: RangeFilter,
        custom_start: Option<EpochMillis>,
        custom_end: Option<EpochMillis>,
        now: EpochMillis,
        tz: FixedOffset,
    ) -> Self {
        match filter {
            RangeFilter::Today => {
                let start = start_of_day(now, tz);
                Self {
                    filter,
                    start,
                    end: start + DAY_MS,
                }
            }
            RangeFilter::ThisWeek => {
                let date = local_date(now, tz);
                let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
                Self {
                    filter,
                    start: date_start_millis(monday, tz),
                    end: date_start_millis(monday + Duration::days(7), tz),
                }
            }
            RangeFilter::ThisMonth => {
                let date = local_date(now, tz);
                let first = date.with_day(1).unwrap_or(date);
                Self {
                    filter,
                    start: date_start_millis(first, tz),
                    end: date_start_millis(first_of_next_month(first), tz),
                }
            }
            RangeFilter::ThisYear => {
                let date = local_date(now, tz);
                let first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
                let next = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap_or(first);
                Self {
                    filter,
                    start: date_start_millis(first, tz),
                    end: date_start_millis(next, tz),
                }
            }
            RangeFilter::Custom => {
                let start = custom_start.unwrap_or(0);
                Self {
                    filter,
                    start,
                    end: custom_end.unwrap_or(start),
                }
            }
        }
    }

    /// Membership test. Preset ranges are half-open `[start, end)`; `Custom`
    /// is inclusive on both ends, preserved as a documented special case.
    pub fn contains(&self, ts: EpochMillis) -> bool {
        match self.filter {
            RangeFilter::Custom => ts >= self.start && ts <= self.end,
            _ => ts >= self.start && ts < self.end,
        }
    }
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
