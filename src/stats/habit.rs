use std::collections::{BTreeMap, BTreeSet};

use chrono::FixedOffset;
use serde::Serialize;
use uuid::Uuid;

use crate::dates::{start_of_day, DayBucket, EpochMillis, DAY_MS};
use crate::domain::HabitEntry;

/// Fixed normalization window for `completion_rate`. Not a rolling count of
/// active days; kept exactly for compatibility with the shipped metric.
const COMPLETION_WINDOW_DAYS: f64 = 30.0;

/// Intensity assigned to a completed day that carries no mood.
const DEFAULT_INTENSITY: u32 = 2;

/// Immutable per-habit snapshot, recomputed on demand from the entry stream.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HabitStats {
    pub habit_id: Uuid,
    pub total_completions: u32,
    pub completion_rate: f64,
    /// The "streak" the original UI displayed: equal to `total_completions`,
    /// not a consecutive-day count. Kept as a distinct field so callers can
    /// choose which metric to show.
    pub legacy_streak: u32,
    /// Consecutive completed days ending today, walking backward until the
    /// first gap.
    pub current_streak: u32,
    /// Oldest to newest, ending at `now`'s day. Always length 7.
    pub last_seven_days: Vec<bool>,
    /// Day bucket to intensity: mood ordinal + 1 when a mood was recorded,
    /// otherwise a flat default. Incomplete days are absent.
    pub heatmap: BTreeMap<DayBucket, u32>,
}

pub fn compute_stats(
    habit_id: Uuid,
    entries: &[HabitEntry],
    now: EpochMillis,
    tz: FixedOffset,
) -> HabitStats {
    let today = start_of_day(now, tz);

    let mut total_completions = 0u32;
    let mut completed_days: BTreeSet<DayBucket> = BTreeSet::new();
    let mut heatmap: BTreeMap<DayBucket, u32> = BTreeMap::new();

    for entry in entries {
        if entry.habit_id != habit_id || entry.is_deleted || !entry.is_completed {
            continue;
        }
        total_completions += 1;
        let bucket = start_of_day(entry.date, tz);
        completed_days.insert(bucket);
        let intensity = entry
            .mood
            .map(|mood| mood.ordinal() + 1)
            .unwrap_or(DEFAULT_INTENSITY);
        heatmap.insert(bucket, intensity);
    }

    let mut current_streak = 0u32;
    let mut day = today;
    while completed_days.contains(&day) {
        current_streak += 1;
        day -= DAY_MS;
    }

    let last_seven_days = (0..7)
        .rev()
        .map(|back| completed_days.contains(&(today - back * DAY_MS)))
        .collect();

    HabitStats {
        habit_id,
        total_completions,
        completion_rate: total_completions as f64 / COMPLETION_WINDOW_DAYS,
        legacy_streak: total_completions,
        current_streak,
        last_seven_days,
        heatmap,
    }
}
