use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::EpochMillis;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
    pub date: EpochMillis,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_period: Option<RecurringPeriod>,
    #[serde(default)]
    pub is_settled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Transaction {
    pub fn new(amount: f64, kind: TransactionKind, category: Category, date: EpochMillis) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            kind,
            category,
            date,
            is_recurring: false,
            recurring_period: None,
            is_settled: false,
            person_name: None,
            note: None,
            is_deleted: false,
        }
    }

    pub fn with_recurring(mut self, period: RecurringPeriod) -> Self {
        self.is_recurring = true;
        self.recurring_period = Some(period);
        self
    }

    pub fn with_person(mut self, name: impl Into<String>) -> Self {
        self.person_name = Some(name.into());
        self
    }

    pub fn settle(&mut self) {
        self.is_settled = true;
    }

    /// Open BORROWED/LENT amounts count toward the running balance until settled.
    pub fn is_open_debt(&self) -> bool {
        matches!(
            self.kind,
            TransactionKind::Borrowed | TransactionKind::Lent
        ) && !self.is_settled
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
    Borrowed,
    Lent,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Category {
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Education,
    Salary,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecurringPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}
