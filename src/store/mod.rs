pub mod json_backend;

use uuid::Uuid;

use crate::domain::{
    AuditLogEntry, Budget, Habit, HabitEntry, Milestone, TaskRecord, Transaction,
};
use crate::errors::Result;

/// Abstraction over the entity streams backing the aggregation engine.
///
/// Reads return owned snapshots; callers never hold references into store
/// internals, so the aggregators can run against a snapshot while the store
/// mutates underneath. Soft deletion goes through the `mark_*_deleted`
/// methods only — callers never see which physical strategy a backend uses.
pub trait EventStore: Send + Sync {
    fn habits(&self) -> Result<Vec<Habit>>;
    /// Entries for one habit, or all entries when `habit_id` is `None`.
    fn habit_entries(&self, habit_id: Option<Uuid>) -> Result<Vec<HabitEntry>>;
    fn transactions(&self) -> Result<Vec<Transaction>>;
    fn budgets(&self) -> Result<Vec<Budget>>;
    fn tasks(&self) -> Result<Vec<TaskRecord>>;
    fn milestones(&self) -> Result<Vec<Milestone>>;
    fn audit_log(&self) -> Result<Vec<AuditLogEntry>>;

    fn put_habit(&mut self, habit: Habit) -> Result<()>;
    fn put_habit_entry(&mut self, entry: HabitEntry) -> Result<()>;
    /// Hard removal; used by the check-in toggle, which never soft-deletes.
    fn remove_habit_entry(&mut self, id: Uuid) -> Result<()>;
    fn put_transaction(&mut self, transaction: Transaction) -> Result<()>;
    fn put_budget(&mut self, budget: Budget) -> Result<()>;
    fn put_task(&mut self, task: TaskRecord) -> Result<()>;
    fn put_milestone(&mut self, milestone: Milestone) -> Result<()>;

    fn mark_habit_deleted(&mut self, id: Uuid) -> Result<()>;
    fn mark_transaction_deleted(&mut self, id: Uuid) -> Result<()>;
    fn mark_budget_deleted(&mut self, id: Uuid) -> Result<()>;
    fn mark_task_deleted(&mut self, id: Uuid) -> Result<()>;

    fn append_audit(&mut self, entry: AuditLogEntry) -> Result<()>;
}

pub use json_backend::JsonStore;
