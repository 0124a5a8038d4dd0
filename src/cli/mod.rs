mod shell;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{BudgetService, ExpenseOutcome, IncomeExpenseReport};
use crate::domain::{format_amount, format_currency, Transaction, DATE_FORMAT};
use crate::storage::DEFAULT_DATA_FILE;

pub use shell::Shell;

/// Budget Tracker - Personal income and expense tracking
#[derive(Parser)]
#[command(name = "budget-tracker")]
#[command(about = "Track income and expenses across fixed budget categories")]
#[command(version)]
pub struct Cli {
    /// Budget data file path
    #[arg(short, long, env = "BUDGET_TRACKER_FILE", default_value = DEFAULT_DATA_FILE)]
    pub file: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add income and save
    Income {
        /// Amount (e.g., "1000" or "1000.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add an expense and save
    Expense {
        /// Category: income, housing, food, transportation, utilities, entertainment, other
        category: String,

        /// Amount (e.g., "50" or "49.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Display the current balance of every category
    Summary,

    /// List recorded transactions
    History {
        /// Show only the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Income vs expense totals with a per-category breakdown
    Report {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Export data to CSV or JSON
    Export {
        /// What to export: history, full
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json (default: csv for history, json for full)
        #[arg(short = 'F', long)]
        format: Option<String>,
    },

    /// Start an interactive session
    Shell,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Income { amount } => {
                let mut service = open_service(&self.file)?;
                let amount = service
                    .add_income(&amount)
                    .context("Invalid input. Please enter a valid numerical value")?;
                service.save()?;
                println!("Income of {} added successfully.", format_currency(amount));
            }

            Commands::Expense { category, amount } => {
                let mut service = open_service(&self.file)?;
                let outcome = service
                    .add_expense(&category, &amount)
                    .context("Invalid input. Please enter a valid numerical value")?;

                match outcome {
                    ExpenseOutcome::Recorded { category, amount } => {
                        service.save()?;
                        println!(
                            "Expense of {} in {} added successfully.",
                            format_currency(amount),
                            category.display_name()
                        );
                    }
                    ExpenseOutcome::UnknownCategory(name) => {
                        eprintln!(
                            "Unknown category '{}'; nothing was recorded. Valid categories: {}.",
                            name,
                            shell::category_list()
                        );
                    }
                }
            }

            Commands::Summary => {
                let service = open_service(&self.file)?;
                println!("{}", service.summary());
            }

            Commands::History { limit } => {
                let service = open_service(&self.file)?;
                let mut out = io::stdout().lock();
                write_history(&mut out, service.transactions(limit))?;
            }

            Commands::Report { format } => {
                let service = open_service(&self.file)?;
                let report = service.report();
                match format.as_str() {
                    "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                    "table" => write_report(&mut io::stdout().lock(), &report)?,
                    other => anyhow::bail!("Invalid format '{}'. Valid: table, json", other),
                }
            }

            Commands::Export {
                export_type,
                output,
                format,
            } => {
                let service = open_service(&self.file)?;
                run_export_command(
                    &service,
                    &export_type,
                    output.as_deref(),
                    format.as_deref(),
                )?;
            }

            Commands::Shell => {
                let mut service = open_service(&self.file)?;
                let stdin = io::stdin().lock();
                let stdout = io::stdout().lock();
                Shell::new(&mut service, stdin, stdout).run()?;
            }
        }

        Ok(())
    }
}

fn open_service(file: &str) -> Result<BudgetService> {
    BudgetService::open(file).with_context(|| format!("Failed to open budget data: {}", file))
}

fn run_export_command(
    service: &BudgetService,
    export_type: &str,
    output: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    use crate::io::Exporter;
    use std::fs::File;

    let exporter = Exporter::new(service.ledger());

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(io::stdout()),
    };

    let count = match (export_type, format) {
        ("history", None | Some("csv")) => exporter.export_history_csv(writer)?,
        ("history", Some("json")) => exporter.export_history_json(writer)?,
        ("full", None | Some("json")) => exporter.export_full_json(writer)?,
        ("history" | "full", Some(other)) => {
            anyhow::bail!(
                "Format '{}' is not supported for '{}' export",
                other,
                export_type
            );
        }
        _ => {
            anyhow::bail!(
                "Invalid export type '{}'. Valid types: history, full",
                export_type
            );
        }
    };

    if output.is_some() {
        eprintln!("Exported {} transactions", count);
    }
    Ok(())
}

/// Print transactions as a table, oldest first.
pub(crate) fn write_history<W: Write>(out: &mut W, transactions: &[Transaction]) -> io::Result<()> {
    if transactions.is_empty() {
        return writeln!(out, "No transactions recorded.");
    }

    writeln!(
        out,
        "{:<20} {:<8} {:<15} {:>12}",
        "DATE", "TYPE", "CATEGORY", "AMOUNT"
    )?;
    writeln!(out, "{}", "-".repeat(58))?;
    for tx in transactions {
        writeln!(
            out,
            "{:<20} {:<8} {:<15} {:>12}",
            tx.date().format(DATE_FORMAT).to_string(),
            tx.kind().as_str(),
            tx.category().map(|c| c.as_str()).unwrap_or("-"),
            format_amount(tx.amount())
        )?;
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, report: &IncomeExpenseReport) -> io::Result<()> {
    writeln!(out, "Income vs Expense")?;
    writeln!(out, "Transactions: {}", report.transaction_count)?;
    writeln!(out)?;
    writeln!(out, "{:<20} {:>12}", "Total Income", format_amount(report.total_income))?;
    writeln!(out, "{:<20} {:>12}", "Total Expense", format_amount(report.total_expense))?;
    writeln!(out, "{}", "=".repeat(33))?;
    writeln!(out, "{:<20} {:>12}", "Net", format_amount(report.net))?;

    if !report.expense_categories.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "{:<15} {:>12} {:>6} {:>7}",
            "CATEGORY", "TOTAL", "COUNT", "%"
        )?;
        writeln!(out, "{}", "-".repeat(43))?;
        for summary in &report.expense_categories {
            writeln!(
                out,
                "{:<15} {:>12} {:>6} {:>6.1}%",
                summary.category.display_name(),
                format_amount(summary.total),
                summary.count,
                summary.percentage
            )?;
        }
    }
    Ok(())
}
