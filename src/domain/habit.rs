use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::EpochMillis;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub title: String,
    pub kind: HabitKind,
    #[serde(default)]
    pub target_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<Uuid>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Habit {
    pub fn new(title: impl Into<String>, kind: HabitKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            target_value: 1.0,
            time_of_day: None,
            goal_id: None,
            is_deleted: false,
        }
    }

    pub fn with_target(mut self, target_value: f64) -> Self {
        self.target_value = target_value;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HabitKind {
    YesNo,
    Quantitative,
    Timer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    AnyTime,
}

/// Mood recorded alongside a check-in. Ordinals are stable and feed the
/// heatmap intensity scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Mood {
    Terrible,
    Bad,
    Neutral,
    Good,
    Great,
}

impl Mood {
    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

/// One day's record for one habit. The toggle write path guarantees at most
/// one non-deleted entry per (habit_id, day) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitEntry {
    pub id: Uuid,
    pub habit_id: Uuid,
    pub date: EpochMillis,
    pub is_completed: bool,
    #[serde(default)]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl HabitEntry {
    /// A completed check-in. Entries reachable through the toggle path are
    /// always completed; "incomplete but present" does not exist there.
    pub fn completed(habit_id: Uuid, date: EpochMillis, value: f64, mood: Option<Mood>) -> Self {
        Self {
            id: Uuid::new_v4(),
            habit_id,
            date,
            is_completed: true,
            value,
            mood,
            is_deleted: false,
        }
    }
}
