//! JSON file storage for expenses.
//!
//! The backing file holds a single JSON array with every [`Expense`]. There is
//! no incremental access: each operation reads the whole array, works on the
//! in-memory list and, when something changed, writes the whole array back.
//!
//! Writes go to a sibling file named after the backing file plus `.tmp`
//! (`expenses.json.tmp`) which is then renamed over the backing file, so a
//! reader never observes a half-written array from this process.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{Expense, ExpensePatch, ResultEngine};

pub const DEFAULT_DATA_FILE: &str = "expenses.json";

#[derive(Clone, Debug)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Opens the store at `path`, creating an empty file if it is missing.
    pub fn open(path: impl Into<PathBuf>) -> ResultEngine<Self> {
        let store = Self { path: path.into() };
        store.ensure_store()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with an empty list. No-op if it exists.
    pub fn ensure_store(&self) -> ResultEngine<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        self.write_all(&[])?;
        tracing::info!("created expense file at {}", self.path.display());
        Ok(())
    }

    pub fn read_all(&self) -> ResultEngine<Vec<Expense>> {
        let content = fs::read_to_string(&self.path)?;
        let expenses: Vec<Expense> = serde_json::from_str(&content)?;
        tracing::debug!(
            "loaded {} expenses from {}",
            expenses.len(),
            self.path.display()
        );
        Ok(expenses)
    }

    /// Replaces the whole file with `expenses`.
    pub fn write_all(&self, expenses: &[Expense]) -> ResultEngine<()> {
        let payload = serde_json::to_string_pretty(expenses)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, payload)?;
        fs::rename(&temp_path, &self.path)?;
        tracing::debug!(
            "wrote {} expenses to {}",
            expenses.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// `max(id) + 1`, or `1` for an empty store. Ids are never reused while
    /// the highest one is still stored, but gaps are allowed.
    pub fn next_id(&self) -> ResultEngine<i64> {
        let expenses = self.read_all()?;
        Ok(expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1)
    }

    pub fn append(&self, expense: Expense) -> ResultEngine<()> {
        let mut expenses = self.read_all()?;
        expenses.push(expense);
        self.write_all(&expenses)
    }

    pub fn find(&self, id: i64) -> ResultEngine<Option<Expense>> {
        Ok(self.read_all()?.into_iter().find(|e| e.id == id))
    }

    /// Removes the expense with `id`. The file is only rewritten when a
    /// record was actually removed.
    pub fn delete(&self, id: i64) -> ResultEngine<bool> {
        let mut expenses = self.read_all()?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Ok(false);
        }
        self.write_all(&expenses)?;
        Ok(true)
    }

    /// Merges `patch` into the first expense with `id`.
    pub fn update(&self, id: i64, patch: &ExpensePatch) -> ResultEngine<bool> {
        let mut expenses = self.read_all()?;
        let Some(expense) = expenses.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        expense.apply(patch);
        self.write_all(&expenses)?;
        Ok(true)
    }
}
