use chrono::FixedOffset;
use uuid::Uuid;

use crate::dates::{start_of_day, EpochMillis};
use crate::domain::{HabitEntry, Mood};
use crate::errors::Result;
use crate::stats::{self, HabitStats};
use crate::store::EventStore;

/// Result of a check-in toggle for one (habit, day).
#[derive(Debug, Clone)]
pub enum ToggleOutcome {
    Created(HabitEntry),
    Removed(Uuid),
}

pub struct HabitService;

impl HabitService {
    /// Two-state toggle per (habit, day): a completed entry exists → hard
    /// remove it; none exists → create a completed entry with the given
    /// value/mood. Existence implies completed, so there is no reachable
    /// "present but incomplete" state on this path.
    pub fn toggle_entry<S: EventStore>(
        store: &mut S,
        habit_id: Uuid,
        date: EpochMillis,
        value: f64,
        mood: Option<Mood>,
        tz: FixedOffset,
    ) -> Result<ToggleOutcome> {
        let bucket = start_of_day(date, tz);
        let entries = store.habit_entries(Some(habit_id))?;
        let existing = entries
            .iter()
            .find(|e| !e.is_deleted && start_of_day(e.date, tz) == bucket);

        match existing {
            Some(entry) => {
                store.remove_habit_entry(entry.id)?;
                tracing::info!(%habit_id, bucket, "check-in removed");
                Ok(ToggleOutcome::Removed(entry.id))
            }
            None => {
                let entry = HabitEntry::completed(habit_id, bucket, value, mood);
                store.put_habit_entry(entry.clone())?;
                tracing::info!(%habit_id, bucket, "check-in recorded");
                Ok(ToggleOutcome::Created(entry))
            }
        }
    }

    /// Loads the habit's entries and computes a fresh stats snapshot.
    pub fn stats_for<S: EventStore>(
        store: &S,
        habit_id: Uuid,
        now: EpochMillis,
        tz: FixedOffset,
    ) -> Result<HabitStats> {
        let entries = store.habit_entries(Some(habit_id))?;
        Ok(stats::compute_stats(habit_id, &entries, now, tz))
    }
}
