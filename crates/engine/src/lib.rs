//! Expense tracking engine.
//!
//! [`ExpenseStore`] owns the JSON backing file and exposes whole-collection
//! read-modify-write primitives. [`Tracker`] validates raw user input on top
//! of it, and [`report`] renders the results for the terminal or as CSV.

pub use commands::{AddExpenseCmd, UpdateExpenseCmd};
pub use error::EngineError;
pub use expense::{Expense, ExpensePatch};
pub use money::MoneyCents;
pub use store::{DEFAULT_DATA_FILE, ExpenseStore};
pub use tracker::{DEFAULT_EXPORT_FILE, Summary, Tracker};

mod commands;
mod error;
mod expense;
mod money;
pub mod report;
mod store;
mod tracker;

type ResultEngine<T> = Result<T, EngineError>;
