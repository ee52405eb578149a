use std::collections::BTreeMap;

use chrono::FixedOffset;
use serde::Serialize;
use uuid::Uuid;

use crate::dates::{day_offset, start_of_day, DateRange, DayBucket, EpochMillis, RangeFilter};
use crate::domain::{Budget, BudgetPeriod, Category, Transaction, TransactionKind};

/// Trailing window for the daily spend and income-vs-expense trends.
const TREND_WINDOW_DAYS: i64 = 30;

const RECENT_TAKE: usize = 10;

const APPROACHING_THRESHOLD: f64 = 0.8;

/// Per-day income/expense subtotals for the trend chart.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct DayFlow {
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BudgetHealth {
    OnTrack,
    Approaching,
    Exceeded,
}

impl BudgetHealth {
    fn classify(ratio: f64) -> Self {
        if ratio > 1.0 {
            BudgetHealth::Exceeded
        } else if ratio > APPROACHING_THRESHOLD {
            BudgetHealth::Approaching
        } else {
            BudgetHealth::OnTrack
        }
    }
}

/// Spend against one budget for its current period cycle. `spent` is
/// recomputed from matching expense transactions; the stored running total
/// on the budget record is ignored here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetProgress {
    pub budget_id: Uuid,
    pub category: Option<Category>,
    pub limit_amount: f64,
    pub spent: f64,
    pub ratio: f64,
    /// `ratio` clamped to 1.0 for gauge rendering; classification uses the
    /// raw ratio.
    pub display_ratio: f64,
    pub health: BudgetHealth,
}

/// Immutable finance snapshot, recomputed on demand from the transaction and
/// budget streams.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FinanceStats {
    pub total_income: f64,
    pub total_expense: f64,
    /// Open (unsettled) borrowed amounts only.
    pub total_borrowed: f64,
    /// Open (unsettled) lent amounts only.
    pub total_lent: f64,
    /// income − expense + borrowed − lent. Borrowed money increases the
    /// available balance, lent money decreases it.
    pub current_balance: f64,
    pub category_spending: BTreeMap<Category, f64>,
    pub daily_spending: BTreeMap<DayBucket, f64>,
    pub income_vs_expense: BTreeMap<DayBucket, DayFlow>,
    /// Every recurring transaction, with no date filtering.
    pub upcoming_recurring: Vec<Transaction>,
    /// Newest first by date, capped at ten.
    pub recent_transactions: Vec<Transaction>,
    pub budgets: Vec<BudgetProgress>,
}

pub fn compute_finance_stats(
    transactions: &[Transaction],
    budgets: &[Budget],
    now: EpochMillis,
    tz: FixedOffset,
) -> FinanceStats {
    let live: Vec<&Transaction> = transactions.iter().filter(|t| !t.is_deleted).collect();

    let mut total_income = 0.0;
    let mut total_expense = 0.0;
    let mut total_borrowed = 0.0;
    let mut total_lent = 0.0;
    let mut category_spending: BTreeMap<Category, f64> = BTreeMap::new();
    let mut daily_spending: BTreeMap<DayBucket, f64> = BTreeMap::new();
    let mut income_vs_expense: BTreeMap<DayBucket, DayFlow> = BTreeMap::new();

    let today = start_of_day(now, tz);
    let window_start = day_offset(now, TREND_WINDOW_DAYS, tz);

    for txn in &live {
        match txn.kind {
            TransactionKind::Income => total_income += txn.amount,
            TransactionKind::Expense => {
                total_expense += txn.amount;
                *category_spending.entry(txn.category).or_insert(0.0) += txn.amount;
            }
            TransactionKind::Borrowed if !txn.is_settled => total_borrowed += txn.amount,
            TransactionKind::Lent if !txn.is_settled => total_lent += txn.amount,
            _ => {}
        }

        let bucket = start_of_day(txn.date, tz);
        if bucket >= window_start && bucket <= today {
            match txn.kind {
                TransactionKind::Expense => {
                    *daily_spending.entry(bucket).or_insert(0.0) += txn.amount;
                    income_vs_expense.entry(bucket).or_default().expense += txn.amount;
                }
                TransactionKind::Income => {
                    income_vs_expense.entry(bucket).or_default().income += txn.amount;
                }
                _ => {}
            }
        }
    }

    let upcoming_recurring = live
        .iter()
        .filter(|t| t.is_recurring)
        .map(|t| (*t).clone())
        .collect();

    let mut recent: Vec<Transaction> = live.iter().map(|t| (*t).clone()).collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_TAKE);

    let budget_rollups = budgets
        .iter()
        .filter(|b| !b.is_deleted)
        .map(|budget| budget_progress(budget, &live, now, tz))
        .collect();

    FinanceStats {
        total_income,
        total_expense,
        total_borrowed,
        total_lent,
        current_balance: total_income - total_expense + total_borrowed - total_lent,
        category_spending,
        daily_spending,
        income_vs_expense,
        upcoming_recurring,
        recent_transactions: recent,
        budgets: budget_rollups,
    }
}

fn budget_progress(
    budget: &Budget,
    transactions: &[&Transaction],
    now: EpochMillis,
    tz: FixedOffset,
) -> BudgetProgress {
    let cycle = cycle_range(budget.period, now, tz);
    let spent: f64 = transactions
        .iter()
        .filter(|t| {
            t.kind == TransactionKind::Expense
                && cycle.contains(t.date)
                && budget.category.map(|c| c == t.category).unwrap_or(true)
        })
        .map(|t| t.amount)
        .sum();

    let ratio = if budget.limit_amount.abs() < f64::EPSILON {
        0.0
    } else {
        spent / budget.limit_amount
    };

    BudgetProgress {
        budget_id: budget.id,
        category: budget.category,
        limit_amount: budget.limit_amount,
        spent,
        ratio,
        display_ratio: ratio.min(1.0),
        health: BudgetHealth::classify(ratio),
    }
}

fn cycle_range(period: BudgetPeriod, now: EpochMillis, tz: FixedOffset) -> DateRange {
    let filter = match period {
        BudgetPeriod::Weekly => RangeFilter::ThisWeek,
        BudgetPeriod::Monthly => RangeFilter::ThisMonth,
        BudgetPeriod::Yearly => RangeFilter::ThisYear,
    };
    DateRange::resolve(filter, None, None, now, tz)
}
