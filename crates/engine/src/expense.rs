//! Expense records and partial updates.
//!
//! An [`Expense`] is one entry of the backing file. The JSON keys are exactly
//! `id`, `date`, `description`, `amount` and `category`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MoneyCents;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// Calendar date, stored as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub description: String,
    pub amount: MoneyCents,
    #[serde(default)]
    pub category: Option<String>,
}

impl Expense {
    #[must_use]
    pub fn new(
        id: i64,
        date: NaiveDate,
        description: impl Into<String>,
        amount: MoneyCents,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
            category: None,
        }
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &ExpensePatch) {
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
    }
}

/// Fields to overwrite on an existing expense. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpensePatch {
    pub description: Option<String>,
    pub amount: Option<MoneyCents>,
    pub category: Option<String>,
}

impl ExpensePatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: MoneyCents) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns `true` when no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coffee() -> Expense {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        Expense::new(1, date, "Coffee", MoneyCents::new(350)).category("Food")
    }

    #[test]
    fn apply_only_overwrites_supplied_fields() {
        let mut expense = coffee();
        expense.apply(&ExpensePatch::new().amount(MoneyCents::new(400)));

        assert_eq!(expense.amount, MoneyCents::new(400));
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.category.as_deref(), Some("Food"));
        assert_eq!(expense.id, 1);
    }

    #[test]
    fn serializes_with_file_keys() {
        let json = serde_json::to_value(coffee()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "date": "2024-03-09",
                "description": "Coffee",
                "amount": 3.5,
                "category": "Food",
            })
        );
    }

    #[test]
    fn missing_or_null_category_loads_as_none() {
        let null: Expense = serde_json::from_str(
            r#"{"id": 2, "date": "2024-01-02", "description": "Book", "amount": 12.0, "category": null}"#,
        )
        .unwrap();
        let missing: Expense = serde_json::from_str(
            r#"{"id": 2, "date": "2024-01-02", "description": "Book", "amount": 12}"#,
        )
        .unwrap();

        assert_eq!(null.category, None);
        assert_eq!(null, missing);
        assert_eq!(null.amount, MoneyCents::new(1200));
    }
}
