use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};

/// Raw timestamp in epoch milliseconds.
pub type EpochMillis = i64;

/// Epoch milliseconds truncated to local midnight; the aggregation key for
/// every calendar-day rollup.
pub type DayBucket = i64;

pub const DAY_MS: i64 = 86_400_000;

fn offset_ms(tz: FixedOffset) -> i64 {
    tz.local_minus_utc() as i64 * 1000
}

/// Truncates a timestamp to the start of its local day. Pure integer math
/// over the fixed offset, total for any input.
pub fn start_of_day(ts: EpochMillis, tz: FixedOffset) -> DayBucket {
    let offset = offset_ms(tz);
    (ts + offset).div_euclid(DAY_MS) * DAY_MS - offset
}

/// Start of the local day `n` days before `now`.
pub fn day_offset(now: EpochMillis, n: i64, tz: FixedOffset) -> DayBucket {
    start_of_day(now - n * DAY_MS, tz)
}

pub fn is_same_day(a: EpochMillis, b: EpochMillis, tz: FixedOffset) -> bool {
    start_of_day(a, tz) == start_of_day(b, tz)
}

/// (year, month) of the timestamp's local calendar date.
pub fn month_key(ts: EpochMillis, tz: FixedOffset) -> (i32, u32) {
    let date = local_date(ts, tz);
    (date.year(), date.month())
}

/// The local calendar date a timestamp falls on.
pub fn local_date(ts: EpochMillis, tz: FixedOffset) -> NaiveDate {
    DateTime::from_timestamp_millis(ts)
        .map(|dt| dt.with_timezone(&tz).date_naive())
        .unwrap_or_default()
}

/// Epoch millis of local midnight for a calendar date.
pub fn date_start_millis(date: NaiveDate, tz: FixedOffset) -> EpochMillis {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis() - offset_ms(tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn kolkata() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
    }

    #[test]
    fn start_of_day_truncates_to_midnight() {
        // 2024-03-15T13:45:00Z
        let ts = 1_710_510_300_000;
        let bucket = start_of_day(ts, utc());
        assert_eq!(bucket % DAY_MS, 0);
        assert!(bucket <= ts && ts < bucket + DAY_MS);
    }

    #[test]
    fn start_of_day_is_idempotent() {
        let ts = 1_710_510_300_000;
        let bucket = start_of_day(ts, kolkata());
        assert_eq!(start_of_day(bucket, kolkata()), bucket);
    }

    #[test]
    fn offset_shifts_bucket_boundaries() {
        // 2024-03-15T20:00:00Z is already 2024-03-16 in Kolkata.
        let ts = 1_710_532_800_000;
        assert_eq!(local_date(ts, utc()).day(), 15);
        assert_eq!(local_date(ts, kolkata()).day(), 16);
        assert!(!is_same_day(ts, start_of_day(ts, utc()), kolkata()));
    }

    #[test]
    fn day_offset_walks_backward() {
        let ts = 1_710_510_300_000;
        let today = start_of_day(ts, utc());
        assert_eq!(day_offset(ts, 0, utc()), today);
        assert_eq!(day_offset(ts, 3, utc()), today - 3 * DAY_MS);
    }

    #[test]
    fn month_key_uses_local_calendar() {
        // 2024-01-31T22:00:00Z is February 1st at +05:30.
        let ts = 1_706_738_400_000;
        assert_eq!(month_key(ts, utc()), (2024, 1));
        assert_eq!(month_key(ts, kolkata()), (2024, 2));
    }

    #[test]
    fn pre_epoch_timestamps_round_down() {
        let ts = -1; // 1969-12-31T23:59:59.999Z
        let bucket = start_of_day(ts, utc());
        assert_eq!(bucket, -DAY_MS);
    }
}
