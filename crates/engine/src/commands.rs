//! Command structs for tracker operations.
//!
//! These types carry the raw user input of the write operations (add/update)
//! so the tracker can validate every field in one place.

/// Record a new expense.
#[derive(Clone, Debug)]
pub struct AddExpenseCmd {
    pub description: String,
    /// Decimal amount as typed by the user, validated by the tracker.
    pub amount: String,
    pub category: Option<String>,
}

impl AddExpenseCmd {
    #[must_use]
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: None,
        }
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Overwrite some fields of an existing expense.
#[derive(Clone, Debug)]
pub struct UpdateExpenseCmd {
    pub id: String,
    pub description: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
}

impl UpdateExpenseCmd {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            amount: None,
            category: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
