pub mod dashboard;
pub mod finance;
pub mod habit;
pub mod heatmap;

pub use dashboard::{compute_dashboard, DashboardStats};
pub use finance::{compute_finance_stats, BudgetHealth, BudgetProgress, DayFlow, FinanceStats};
pub use habit::{compute_stats, HabitStats};
pub use heatmap::compute_heatmap;
