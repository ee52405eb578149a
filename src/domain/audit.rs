use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::EpochMillis;

/// Append-only record of notable mutations, kept alongside the entity streams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub action: AuditAction,
    pub entity_type: AuditEntity,
    pub description: String,
    pub at: EpochMillis,
}

impl AuditLogEntry {
    pub fn new(
        action: AuditAction,
        entity_type: AuditEntity,
        description: impl Into<String>,
        at: EpochMillis,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            entity_type,
            description: description.into(),
            at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuditAction {
    Created,
    Updated,
    Deleted,
    Settled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuditEntity {
    Habit,
    Transaction,
    Budget,
    Task,
}
