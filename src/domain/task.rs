use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::EpochMillis;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<EpochMillis>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl TaskRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
            completed_at: None,
            is_deleted: false,
        }
    }

    pub fn complete(&mut self, at: EpochMillis) {
        self.is_completed = true;
        self.completed_at = Some(at);
    }
}

/// A checkpoint under a goal; contributes to the global activity heatmap
/// once completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<EpochMillis>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Milestone {
    pub fn new(goal_id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            goal_id,
            title: title.into(),
            is_completed: false,
            completed_at: None,
            is_deleted: false,
        }
    }

    pub fn complete(&mut self, at: EpochMillis) {
        self.is_completed = true;
        self.completed_at = Some(at);
    }
}
