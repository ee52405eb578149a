pub mod dashboard;
pub mod finance;
pub mod habits;

pub use dashboard::DashboardService;
pub use finance::FinanceService;
pub use habits::{HabitService, ToggleOutcome};
