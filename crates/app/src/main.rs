use std::path::Path;

use clap::{Parser, ValueEnum};
use engine::{AddExpenseCmd, EngineError, ExpenseStore, Tracker, UpdateExpenseCmd, report};
use settings::Settings;

mod error;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "expense_tracker", about = "Expense Tracker CLI")]
struct Cli {
    command: Command,

    /// Expense ID for delete/update.
    #[arg(long, allow_hyphen_values = true)]
    id: Option<String>,
    /// Expense description.
    #[arg(long)]
    description: Option<String>,
    /// Expense amount.
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,
    /// Expense category.
    #[arg(long)]
    category: Option<String>,
    /// Month for summary (1-12).
    #[arg(long, allow_hyphen_values = true)]
    month: Option<String>,
    /// Export filename.
    #[arg(long)]
    file: Option<String>,

    /// Optional settings file (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the JSON file holding the expenses.
    #[arg(long)]
    data_file: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Command {
    Add,
    List,
    Delete,
    Update,
    Summary,
    Export,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> error::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.config.as_deref())?.with_data_file(cli.data_file.clone());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(format!(
            "expense_tracker={level},engine={level}",
            level = settings.level
        ))
        .init();
    tracing::debug!("using expense file {}", settings.data_file);

    let store = ExpenseStore::open(&settings.data_file)?;
    let tracker = Tracker::new(store);

    match execute(&cli, &tracker, &settings) {
        Ok(output) => println!("{output}"),
        Err(err) if err.is_user_error() => println!("{}", user_message(&err)),
        Err(err) => {
            tracing::error!("{:?} failed: {err}", cli.command);
            return Err(err.into());
        }
    }
    Ok(())
}

/// Runs the parsed command and returns the text to print.
///
/// Missing required flags are reported without touching the tracker.
fn execute(cli: &Cli, tracker: &Tracker, settings: &Settings) -> Result<String, EngineError> {
    match cli.command {
        Command::Add => {
            let description = cli.description.as_deref().filter(|d| !d.is_empty());
            let (Some(description), Some(amount)) = (description, cli.amount.as_deref()) else {
                return Ok(
                    "Error: Description and amount are required for adding an expense".to_string(),
                );
            };
            let mut cmd = AddExpenseCmd::new(description, amount);
            if let Some(category) = &cli.category {
                cmd = cmd.category(category);
            }
            let expense = tracker.add(cmd)?;
            Ok(format!("Expense added successfully (ID: {})", expense.id))
        }
        Command::List => Ok(report::format_table(&tracker.list()?)),
        Command::Delete => {
            let Some(id) = cli.id.as_deref() else {
                return Ok("Error: Expense ID is required for deletion".to_string());
            };
            tracker.delete(id)?;
            Ok("Expense deleted successfully".to_string())
        }
        Command::Update => {
            let Some(id) = cli.id.as_deref() else {
                return Ok("Error: Expense ID is required for update".to_string());
            };
            let mut cmd = UpdateExpenseCmd::new(id);
            cmd.description.clone_from(&cli.description);
            cmd.amount.clone_from(&cli.amount);
            cmd.category.clone_from(&cli.category);
            tracker.update(cmd)?;
            Ok("Expense updated successfully".to_string())
        }
        Command::Summary => Ok(report::format_summary(
            &tracker.summary(cli.month.as_deref())?,
        )),
        Command::Export => {
            let file = cli.file.as_deref().unwrap_or(&settings.export_file);
            tracker.export_csv(Path::new(file))?;
            Ok(format!("Expenses exported to {file}"))
        }
    }
}

fn user_message(err: &EngineError) -> String {
    match err {
        EngineError::InvalidAmount(_) | EngineError::TotalOverflow => format!("Error: {err}"),
        _ => err.to_string(),
    }
}
