use std::collections::BTreeMap;

use chrono::FixedOffset;

use crate::dates::{start_of_day, DayBucket};
use crate::domain::{HabitEntry, Milestone, TaskRecord};

/// Merges completion events across habits, tasks, and milestones into one
/// day-bucket → count map. Counts are raw; any color bucketing is the
/// presentation layer's job.
pub fn compute_heatmap(
    habit_entries: &[HabitEntry],
    tasks: &[TaskRecord],
    milestones: &[Milestone],
    tz: FixedOffset,
) -> BTreeMap<DayBucket, u32> {
    let mut heatmap: BTreeMap<DayBucket, u32> = BTreeMap::new();

    for entry in habit_entries {
        if entry.is_deleted || !entry.is_completed {
            continue;
        }
        *heatmap.entry(start_of_day(entry.date, tz)).or_insert(0) += 1;
    }
    for task in tasks {
        if task.is_deleted || !task.is_completed {
            continue;
        }
        if let Some(at) = task.completed_at {
            *heatmap.entry(start_of_day(at, tz)).or_insert(0) += 1;
        }
    }
    for milestone in milestones {
        if milestone.is_deleted || !milestone.is_completed {
            continue;
        }
        if let Some(at) = milestone.completed_at {
            *heatmap.entry(start_of_day(at, tz)).or_insert(0) += 1;
        }
    }

    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::{EpochMillis, DAY_MS};
    use uuid::Uuid;

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    // 2024-03-15T13:45:00Z
    const NOW: EpochMillis = 1_710_510_300_000;

    #[test]
    fn merges_sources_into_shared_buckets() {
        let entry = HabitEntry::completed(Uuid::new_v4(), NOW, 1.0, None);
        let mut task = TaskRecord::new("file taxes");
        task.complete(NOW);
        let mut milestone = Milestone::new(Uuid::new_v4(), "first 5k");
        milestone.complete(NOW - DAY_MS);

        let heatmap = compute_heatmap(&[entry], &[task], &[milestone], tz());
        let today = start_of_day(NOW, tz());
        assert_eq!(heatmap.get(&today), Some(&2));
        assert_eq!(heatmap.get(&(today - DAY_MS)), Some(&1));
    }

    #[test]
    fn counts_are_not_capped() {
        let habit_id = Uuid::new_v4();
        let entries: Vec<_> = (0..50)
            .map(|_| HabitEntry::completed(habit_id, NOW, 1.0, None))
            .collect();
        let heatmap = compute_heatmap(&entries, &[], &[], tz());
        assert_eq!(heatmap.get(&start_of_day(NOW, tz())), Some(&50));
    }

    #[test]
    fn pending_and_deleted_items_do_not_count() {
        let pending = TaskRecord::new("not yet");
        let mut deleted = TaskRecord::new("gone");
        deleted.complete(NOW);
        deleted.is_deleted = true;
        let mut uncompleted_entry = HabitEntry::completed(Uuid::new_v4(), NOW, 1.0, None);
        uncompleted_entry.is_completed = false;

        let heatmap = compute_heatmap(&[uncompleted_entry], &[pending, deleted], &[], tz());
        assert!(heatmap.is_empty());
    }
}
