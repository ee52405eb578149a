use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::transaction::Category;

/// A spending guardrail, either scoped to one category or overall
/// (`category == None`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub limit_amount: f64,
    /// Denormalized running total maintained by the write path. The read path
    /// recomputes spend from transactions and ignores this field.
    #[serde(default)]
    pub spent_amount: f64,
    pub period: BudgetPeriod,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Budget {
    pub fn new(category: Option<Category>, limit_amount: f64, period: BudgetPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            limit_amount,
            spent_amount: 0.0,
            period,
            is_deleted: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}
