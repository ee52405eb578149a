use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::domain::{
    AuditLogEntry, Budget, Habit, HabitEntry, Milestone, TaskRecord, Transaction,
};
use crate::errors::{Result, TrackerError};
use crate::utils::{app_data_dir, ensure_dir};

use super::EventStore;

const HABITS_FILE: &str = "habits.json";
const ENTRIES_FILE: &str = "habit_entries.json";
const TRANSACTIONS_FILE: &str = "transactions.json";
const BUDGETS_FILE: &str = "budgets.json";
const TASKS_FILE: &str = "tasks.json";
const MILESTONES_FILE: &str = "milestones.json";
const AUDIT_FILE: &str = "audit_log.json";
const TMP_SUFFIX: &str = "tmp";

/// JSON-file-per-stream store. All streams are loaded into memory at open;
/// every mutation rewrites that stream's file atomically (temp file, then
/// rename), so a failed write leaves the previous file intact.
pub struct JsonStore {
    root: PathBuf,
    habits: Vec<Habit>,
    entries: Vec<HabitEntry>,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    tasks: Vec<TaskRecord>,
    milestones: Vec<Milestone>,
    audit: Vec<AuditLogEntry>,
}

impl JsonStore {
    /// Opens (or initializes) a store rooted at `root`, defaulting to the
    /// application data directory. Missing stream files read as empty.
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        tracing::debug!(root = %root.display(), "opening json store");
        Ok(Self {
            habits: load_stream(&root.join(HABITS_FILE))?,
            entries: load_stream(&root.join(ENTRIES_FILE))?,
            transactions: load_stream(&root.join(TRANSACTIONS_FILE))?,
            budgets: load_stream(&root.join(BUDGETS_FILE))?,
            tasks: load_stream(&root.join(TASKS_FILE))?,
            milestones: load_stream(&root.join(MILESTONES_FILE))?,
            audit: load_stream(&root.join(AUDIT_FILE))?,
            root,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn persist<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        save_stream(&self.root.join(file), items)
    }
}

impl EventStore for JsonStore {
    fn habits(&self) -> Result<Vec<Habit>> {
        Ok(self.habits.clone())
    }

    fn habit_entries(&self, habit_id: Option<Uuid>) -> Result<Vec<HabitEntry>> {
        Ok(match habit_id {
            Some(id) => self
                .entries
                .iter()
                .filter(|e| e.habit_id == id)
                .cloned()
                .collect(),
            None => self.entries.clone(),
        })
    }

    fn transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn budgets(&self) -> Result<Vec<Budget>> {
        Ok(self.budgets.clone())
    }

    fn tasks(&self) -> Result<Vec<TaskRecord>> {
        Ok(self.tasks.clone())
    }

    fn milestones(&self) -> Result<Vec<Milestone>> {
        Ok(self.milestones.clone())
    }

    fn audit_log(&self) -> Result<Vec<AuditLogEntry>> {
        Ok(self.audit.clone())
    }

    fn put_habit(&mut self, habit: Habit) -> Result<()> {
        upsert(&mut self.habits, habit, |h| h.id);
        self.persist(HABITS_FILE, &self.habits)
    }

    fn put_habit_entry(&mut self, entry: HabitEntry) -> Result<()> {
        upsert(&mut self.entries, entry, |e| e.id);
        self.persist(ENTRIES_FILE, &self.entries)
    }

    fn remove_habit_entry(&mut self, id: Uuid) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(TrackerError::NotFound(format!("habit entry {}", id)));
        }
        self.persist(ENTRIES_FILE, &self.entries)
    }

    fn put_transaction(&mut self, transaction: Transaction) -> Result<()> {
        upsert(&mut self.transactions, transaction, |t| t.id);
        self.persist(TRANSACTIONS_FILE, &self.transactions)
    }

    fn put_budget(&mut self, budget: Budget) -> Result<()> {
        upsert(&mut self.budgets, budget, |b| b.id);
        self.persist(BUDGETS_FILE, &self.budgets)
    }

    fn put_task(&mut self, task: TaskRecord) -> Result<()> {
        upsert(&mut self.tasks, task, |t| t.id);
        self.persist(TASKS_FILE, &self.tasks)
    }

    fn put_milestone(&mut self, milestone: Milestone) -> Result<()> {
        upsert(&mut self.milestones, milestone, |m| m.id);
        self.persist(MILESTONES_FILE, &self.milestones)
    }

    fn mark_habit_deleted(&mut self, id: Uuid) -> Result<()> {
        match self.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => habit.is_deleted = true,
            None => return Err(TrackerError::NotFound(format!("habit {}", id))),
        }
        self.persist(HABITS_FILE, &self.habits)
    }

    fn mark_transaction_deleted(&mut self, id: Uuid) -> Result<()> {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(txn) => txn.is_deleted = true,
            None => return Err(TrackerError::NotFound(format!("transaction {}", id))),
        }
        self.persist(TRANSACTIONS_FILE, &self.transactions)
    }

    fn mark_budget_deleted(&mut self, id: Uuid) -> Result<()> {
        match self.budgets.iter_mut().find(|b| b.id == id) {
            Some(budget) => budget.is_deleted = true,
            None => return Err(TrackerError::NotFound(format!("budget {}", id))),
        }
        self.persist(BUDGETS_FILE, &self.budgets)
    }

    fn mark_task_deleted(&mut self, id: Uuid) -> Result<()> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => task.is_deleted = true,
            None => return Err(TrackerError::NotFound(format!("task {}", id))),
        }
        self.persist(TASKS_FILE, &self.tasks)
    }

    fn append_audit(&mut self, entry: AuditLogEntry) -> Result<()> {
        self.audit.push(entry);
        self.persist(AUDIT_FILE, &self.audit)
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> Uuid) {
    let id = id_of(&item);
    match items.iter().position(|existing| id_of(existing) == id) {
        Some(idx) => items[idx] = item,
        None => items.push(item),
    }
}

fn load_stream<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn save_stream<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(items)?;
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, HabitKind, TransactionKind};
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::open(Some(temp.path().to_path_buf())).expect("json store");
        (store, temp)
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let (mut store, guard) = store_with_temp_dir();
        let habit = Habit::new("stretch", HabitKind::YesNo);
        let habit_id = habit.id;
        store.put_habit(habit).expect("save habit");
        let txn = Transaction::new(12.5, TransactionKind::Expense, Category::Food, 0);
        store.put_transaction(txn).expect("save transaction");

        let reopened = JsonStore::open(Some(guard.path().to_path_buf())).expect("reopen");
        assert_eq!(reopened.habits().unwrap().len(), 1);
        assert_eq!(reopened.habits().unwrap()[0].id, habit_id);
        assert_eq!(reopened.transactions().unwrap()[0].amount, 12.5);
    }

    #[test]
    fn missing_files_read_as_empty_streams() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.habits().unwrap().is_empty());
        assert!(store.transactions().unwrap().is_empty());
        assert!(store.audit_log().unwrap().is_empty());
    }

    #[test]
    fn put_replaces_existing_record_by_id() {
        let (mut store, _guard) = store_with_temp_dir();
        let mut habit = Habit::new("read", HabitKind::Quantitative);
        store.put_habit(habit.clone()).unwrap();
        habit.title = "read more".into();
        store.put_habit(habit).unwrap();
        let habits = store.habits().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].title, "read more");
    }

    #[test]
    fn mark_deleted_persists_the_flag() {
        let (mut store, guard) = store_with_temp_dir();
        let txn = Transaction::new(30.0, TransactionKind::Expense, Category::Other, 0);
        let id = txn.id;
        store.put_transaction(txn).unwrap();
        store.mark_transaction_deleted(id).unwrap();

        let reopened = JsonStore::open(Some(guard.path().to_path_buf())).unwrap();
        assert!(reopened.transactions().unwrap()[0].is_deleted);
    }

    #[test]
    fn mark_deleted_missing_id_errors() {
        let (mut store, _guard) = store_with_temp_dir();
        let err = store.mark_budget_deleted(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(_)));
    }

    #[test]
    fn remove_habit_entry_is_a_hard_delete() {
        let (mut store, guard) = store_with_temp_dir();
        let entry = HabitEntry::completed(Uuid::new_v4(), 0, 1.0, None);
        let id = entry.id;
        store.put_habit_entry(entry).unwrap();
        store.remove_habit_entry(id).unwrap();

        let reopened = JsonStore::open(Some(guard.path().to_path_buf())).unwrap();
        assert!(reopened.habit_entries(None).unwrap().is_empty());
    }

    #[test]
    fn habit_entries_filter_by_habit() {
        let (mut store, _guard) = store_with_temp_dir();
        let mine = Uuid::new_v4();
        store
            .put_habit_entry(HabitEntry::completed(mine, 0, 1.0, None))
            .unwrap();
        store
            .put_habit_entry(HabitEntry::completed(Uuid::new_v4(), 0, 1.0, None))
            .unwrap();
        assert_eq!(store.habit_entries(Some(mine)).unwrap().len(), 1);
        assert_eq!(store.habit_entries(None).unwrap().len(), 2);
    }
}
