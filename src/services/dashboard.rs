use chrono::FixedOffset;

use crate::dates::EpochMillis;
use crate::errors::Result;
use crate::stats::{self, DashboardStats};
use crate::store::EventStore;

pub struct DashboardService;

impl DashboardService {
    pub fn compute<S: EventStore>(
        store: &S,
        now: EpochMillis,
        tz: FixedOffset,
    ) -> Result<DashboardStats> {
        let habits = store.habits()?;
        let entries = store.habit_entries(None)?;
        let tasks = store.tasks()?;
        let milestones = store.milestones()?;
        Ok(stats::compute_dashboard(
            &habits,
            &entries,
            &tasks,
            &milestones,
            now,
            tz,
        ))
    }
}
