pub mod audit;
pub mod budget;
pub mod habit;
pub mod task;
pub mod transaction;

pub use audit::{AuditAction, AuditEntity, AuditLogEntry};
pub use budget::{Budget, BudgetPeriod};
pub use habit::{Habit, HabitEntry, HabitKind, Mood, TimeOfDay};
pub use task::{Milestone, TaskRecord};
pub use transaction::{Category, RecurringPeriod, Transaction, TransactionKind};
