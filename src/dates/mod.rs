pub mod bucket;
pub mod range;

pub use bucket::{
    day_offset, is_same_day, local_date, month_key, start_of_day, DayBucket, EpochMillis, DAY_MS,
};
pub use range::{DateRange, RangeFilter};
