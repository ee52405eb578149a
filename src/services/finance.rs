use chrono::FixedOffset;
use uuid::Uuid;

use crate::dates::EpochMillis;
use crate::domain::{AuditAction, AuditEntity, AuditLogEntry, Transaction};
use crate::errors::{Result, TrackerError};
use crate::stats::{self, FinanceStats};
use crate::store::EventStore;

pub struct FinanceService;

impl FinanceService {
    /// Marks a BORROWED/LENT transaction settled and records an audit entry.
    /// The only mutating finance operation; everything else is a pure read.
    pub fn settle_debt<S: EventStore>(
        store: &mut S,
        id: Uuid,
        now: EpochMillis,
    ) -> Result<Transaction> {
        let mut transaction = store
            .transactions()?
            .into_iter()
            .find(|t| t.id == id && !t.is_deleted)
            .ok_or_else(|| TrackerError::NotFound(format!("transaction {}", id)))?;

        transaction.settle();
        store.put_transaction(transaction.clone())?;

        let who = transaction.person_name.as_deref().unwrap_or("unknown");
        store.append_audit(AuditLogEntry::new(
            AuditAction::Settled,
            AuditEntity::Transaction,
            format!("Settled {:.2} with {}", transaction.amount, who),
            now,
        ))?;
        tracing::info!(%id, "debt settled");
        Ok(transaction)
    }

    /// Loads transactions and budgets and computes a fresh finance snapshot.
    pub fn stats<S: EventStore>(
        store: &S,
        now: EpochMillis,
        tz: FixedOffset,
    ) -> Result<FinanceStats> {
        let transactions = store.transactions()?;
        let budgets = store.budgets()?;
        Ok(stats::compute_finance_stats(&transactions, &budgets, now, tz))
    }
}
