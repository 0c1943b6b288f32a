//! Text renderings of expenses: the listing table, the summary line and the
//! CSV export.

use std::io;

use serde::Serialize;

use crate::{Expense, ResultEngine, Summary};

const CSV_HEADER: [&str; 5] = ["ID", "Date", "Description", "Amount", "Category"];
const MISSING_CATEGORY: &str = "N/A";

/// Renders the listing table, or the empty-store message.
pub fn format_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut out = String::from("ID  Date       Description  Amount  Category");
    for expense in expenses {
        let amount = format!("${}", expense.amount);
        out.push('\n');
        out.push_str(&format!(
            "{:<4} {}  {:<12} {:<7} {}",
            expense.id,
            expense.date,
            expense.description,
            amount,
            expense.category.as_deref().unwrap_or(MISSING_CATEGORY)
        ));
    }
    out
}

pub fn format_summary(summary: &Summary) -> String {
    match summary.month {
        Some(month) => format!("Total expenses for month {month}: ${}", summary.total),
        None => format!("Total expenses: ${}", summary.total),
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: i64,
    date: String,
    description: &'a str,
    amount: String,
    category: Option<&'a str>,
}

/// Writes the header and one row per expense. An absent category is an
/// empty field.
pub fn write_csv<W: io::Write>(writer: W, expenses: &[Expense]) -> ResultEngine<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for expense in expenses {
        writer.serialize(CsvRow {
            id: expense.id,
            date: expense.date.to_string(),
            description: &expense.description,
            amount: expense.amount.to_string(),
            category: expense.category.as_deref(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
