use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::application::{AppError, BudgetService, ExpenseOutcome};
use crate::domain::{format_currency, Category};
use crate::storage::LoadOutcome;

use super::write_history;

const INVALID_AMOUNT: &str = "Invalid input. Please enter a valid numerical value.";

const HELP: &str = "\
Commands:
  income <amount>               Add income
  expense <category> <amount>   Add an expense
  summary                       Display the current budget
  history                       List recorded transactions
  save                          Save data to the data file
  load                          Load data from the data file
  help                          Show this help
  exit                          Leave without saving";

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented interactive session over a budget service.
///
/// Every action prints a one-line confirmation or error; storage failures
/// are reported and the session keeps going. Leaving never saves.
pub struct Shell<'a, R, W> {
    service: &'a mut BudgetService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(service: &'a mut BudgetService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Read and execute commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Budget Tracker!")?;
        writeln!(
            self.output,
            "Data file: {}",
            self.service.repository().path().display()
        )?;
        writeln!(self.output, "Type 'help' for a list of commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            if let Flow::Exit = self.execute(line.trim())? {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    fn execute(&mut self, line: &str) -> Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Flow::Continue);
        };
        let verb = word.to_lowercase();
        let args: Vec<&str> = words.collect();
        debug!(%verb, ?args, "shell command");

        match (verb.as_str(), args.as_slice()) {
            ("income", [amount]) => self.add_income(amount)?,
            ("expense", [category, amount]) => self.add_expense(category, amount)?,
            ("summary" | "display", []) => {
                writeln!(self.output, "Current Budget")?;
                writeln!(self.output, "{}", self.service.summary())?;
            }
            ("history", []) => write_history(&mut self.output, self.service.transactions(None))?,
            ("save", []) => match self.service.save() {
                Ok(()) => writeln!(self.output, "Data saved successfully.")?,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            },
            ("load", []) => match self.service.load() {
                Ok(LoadOutcome::Loaded) => writeln!(self.output, "Data loaded successfully.")?,
                Ok(LoadOutcome::NotFound) => writeln!(
                    self.output,
                    "No saved data found at {}.",
                    self.service.repository().path().display()
                )?,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            },
            ("help", []) => writeln!(self.output, "{}", HELP)?,
            ("exit" | "quit", []) => return Ok(Flow::Exit),
            ("income", _) => writeln!(self.output, "Usage: income <amount>")?,
            ("expense", _) => writeln!(self.output, "Usage: expense <category> <amount>")?,
            _ => writeln!(
                self.output,
                "Unknown command '{}'. Type 'help' for a list of commands.",
                word
            )?,
        }

        Ok(Flow::Continue)
    }

    fn add_income(&mut self, amount: &str) -> Result<()> {
        match self.service.add_income(amount) {
            Ok(amount) => writeln!(
                self.output,
                "Income of {} added successfully.",
                format_currency(amount)
            )?,
            Err(AppError::InvalidAmount(_)) => writeln!(self.output, "{}", INVALID_AMOUNT)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn add_expense(&mut self, category: &str, amount: &str) -> Result<()> {
        match self.service.add_expense(category, amount) {
            Ok(ExpenseOutcome::Recorded { category, amount }) => writeln!(
                self.output,
                "Expense of {} in {} added successfully.",
                format_currency(amount),
                category.display_name()
            )?,
            Ok(ExpenseOutcome::UnknownCategory(name)) => writeln!(
                self.output,
                "Unknown category '{}'; nothing was recorded. Valid categories: {}.",
                name,
                category_list()
            )?,
            Err(AppError::InvalidAmount(_)) => writeln!(self.output, "{}", INVALID_AMOUNT)?,
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}

pub(crate) fn category_list() -> String {
    Category::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
