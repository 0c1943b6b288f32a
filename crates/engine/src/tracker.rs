use std::{fs::File, path::Path};

use chrono::{Datelike, Local, NaiveDate};

use crate::{
    AddExpenseCmd, EngineError, Expense, ExpensePatch, ExpenseStore, MoneyCents, ResultEngine,
    UpdateExpenseCmd, report,
};

pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";

/// Total of the stored amounts, optionally restricted to one month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub month: Option<i64>,
    pub total: MoneyCents,
}

/// Validates user input and runs one operation against the [`ExpenseStore`].
#[derive(Debug)]
pub struct Tracker {
    store: ExpenseStore,
    today: fn() -> NaiveDate,
}

impl Tracker {
    pub fn new(store: ExpenseStore) -> Self {
        Self {
            store,
            today: local_today,
        }
    }

    /// Replace the clock used to date new expenses.
    #[must_use]
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Records a new expense dated today and returns it with its assigned id.
    pub fn add(&self, cmd: AddExpenseCmd) -> ResultEngine<Expense> {
        let amount = parse_amount(&cmd.amount)?;
        let mut expense = Expense::new(
            self.store.next_id()?,
            (self.today)(),
            cmd.description,
            amount,
        );
        expense.category = cmd.category;

        self.store.append(expense.clone())?;
        tracing::info!("added expense {} ({})", expense.id, expense.amount);
        Ok(expense)
    }

    pub fn list(&self) -> ResultEngine<Vec<Expense>> {
        self.store.read_all()
    }

    pub fn delete(&self, raw_id: &str) -> ResultEngine<()> {
        let id = parse_id(raw_id)?;
        if !self.store.delete(id)? {
            tracing::warn!("delete: expense {id} not found");
            return Err(EngineError::NotFound(id));
        }
        tracing::info!("deleted expense {id}");
        Ok(())
    }

    /// Overwrites only the fields supplied in `cmd`.
    pub fn update(&self, cmd: UpdateExpenseCmd) -> ResultEngine<()> {
        let id = parse_id(&cmd.id)?;
        let mut patch = ExpensePatch::new();
        if let Some(description) = cmd.description {
            patch = patch.description(description);
        }
        if let Some(raw) = cmd.amount.as_deref() {
            patch = patch.amount(parse_amount(raw)?);
        }
        if let Some(category) = cmd.category {
            patch = patch.category(category);
        }
        if patch.is_empty() {
            tracing::debug!("update {id}: no fields supplied");
        }

        if !self.store.update(id, &patch)? {
            tracing::warn!("update: expense {id} not found");
            return Err(EngineError::NotFound(id));
        }
        tracing::info!("updated expense {id}");
        Ok(())
    }

    /// Sums every amount, or only those dated in `month` when given.
    ///
    /// The month is only checked to be an integer: `13` is accepted and
    /// simply matches nothing.
    pub fn summary(&self, month: Option<&str>) -> ResultEngine<Summary> {
        let month = month.map(parse_month).transpose()?;
        let expenses = self.store.read_all()?;
        let total = MoneyCents::checked_sum(
            expenses
                .iter()
                .filter(|e| month.is_none_or(|m| i64::from(e.date.month()) == m))
                .map(|e| e.amount),
        )
        .ok_or(EngineError::TotalOverflow)?;
        Ok(Summary { month, total })
    }

    /// Writes every expense to `path` as CSV and returns how many rows were
    /// written.
    pub fn export_csv(&self, path: &Path) -> ResultEngine<usize> {
        let expenses = self.store.read_all()?;
        let file = File::create(path)?;
        report::write_csv(file, &expenses)?;
        tracing::info!("exported {} expenses to {}", expenses.len(), path.display());
        Ok(expenses.len())
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_id(raw: &str) -> ResultEngine<i64> {
    raw.trim()
        .parse()
        .map_err(|_| EngineError::InvalidId(raw.to_string()))
}

fn parse_amount(raw: &str) -> ResultEngine<MoneyCents> {
    let amount: MoneyCents = raw.parse()?;
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(format!(
            "amount must be > 0, got {amount}"
        )));
    }
    Ok(amount)
}

fn parse_month(raw: &str) -> ResultEngine<i64> {
    raw.trim()
        .parse()
        .map_err(|_| EngineError::InvalidMonth(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert_eq!(
            parse_id("1.5").unwrap_err(),
            EngineError::InvalidId("1.5".to_string())
        );
        assert!(parse_id("abc").is_err());
    }

    #[test]
    fn parse_amount_requires_strictly_positive() {
        assert_eq!(parse_amount("3.50").unwrap(), MoneyCents::new(350));
        assert!(matches!(
            parse_amount("0"),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("-4"),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(matches!(
            parse_amount("ten"),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_month_only_checks_integer() {
        assert_eq!(parse_month("3").unwrap(), 3);
        assert_eq!(parse_month("13").unwrap(), 13);
        assert!(matches!(
            parse_month("March"),
            Err(EngineError::InvalidMonth(_))
        ));
    }
}
