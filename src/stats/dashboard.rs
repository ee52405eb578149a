use std::collections::BTreeMap;

use chrono::FixedOffset;
use serde::Serialize;

use super::heatmap::compute_heatmap;
use crate::dates::{is_same_day, DayBucket, EpochMillis};
use crate::domain::{Habit, HabitEntry, Milestone, TaskRecord};

/// Cross-feature summary the home screen binds to.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub active_habits: u32,
    pub habits_completed_today: u32,
    pub tasks_completed: u32,
    pub tasks_pending: u32,
    pub activity: BTreeMap<DayBucket, u32>,
}

pub fn compute_dashboard(
    habits: &[Habit],
    entries: &[HabitEntry],
    tasks: &[TaskRecord],
    milestones: &[Milestone],
    now: EpochMillis,
    tz: FixedOffset,
) -> DashboardStats {
    let active_habits = habits.iter().filter(|h| !h.is_deleted).count() as u32;

    let habits_completed_today = habits
        .iter()
        .filter(|habit| !habit.is_deleted)
        .filter(|habit| {
            entries.iter().any(|e| {
                e.habit_id == habit.id
                    && !e.is_deleted
                    && e.is_completed
                    && is_same_day(e.date, now, tz)
            })
        })
        .count() as u32;

    let live_tasks: Vec<&TaskRecord> = tasks.iter().filter(|t| !t.is_deleted).collect();
    let tasks_completed = live_tasks.iter().filter(|t| t.is_completed).count() as u32;
    let tasks_pending = live_tasks.len() as u32 - tasks_completed;

    DashboardStats {
        active_habits,
        habits_completed_today,
        tasks_completed,
        tasks_pending,
        activity: compute_heatmap(entries, tasks, milestones, tz),
    }
}
