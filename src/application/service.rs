use std::path::PathBuf;

use crate::domain::{parse_amount, Amount, Category, Ledger, Transaction};
use crate::storage::{LoadOutcome, Repository};

use super::{AppError, IncomeExpenseReport};

/// Result of an add-expense request.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseOutcome {
    Recorded { category: Category, amount: Amount },
    /// The category is not one of the fixed set; nothing was recorded.
    UnknownCategory(String),
}

/// Application service over one ledger and the file it is persisted to.
/// This is the interface every front end (CLI, interactive shell) drives.
pub struct BudgetService {
    ledger: Ledger,
    repo: Repository,
}

impl BudgetService {
    /// Service with an empty ledger. Nothing is read from disk.
    pub fn new(repo: Repository) -> Self {
        Self {
            ledger: Ledger::new(),
            repo,
        }
    }

    /// Service with the ledger loaded from `path`, or empty if the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let mut service = Self::new(Repository::new(path));
        service.load()?;
        Ok(service)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Parse `amount` and record it as income. Invalid input leaves the
    /// ledger unchanged.
    pub fn add_income(&mut self, amount: &str) -> Result<Amount, AppError> {
        let amount = parse_amount(amount)?;
        self.ledger.record_income(amount);
        Ok(amount)
    }

    /// Parse `amount` and record it against `category`. An unknown category
    /// is not an error: it is reported back and nothing changes.
    pub fn add_expense(&mut self, category: &str, amount: &str) -> Result<ExpenseOutcome, AppError> {
        let amount = parse_amount(amount)?;
        let recorded = self
            .ledger
            .record_expense(category, amount)
            .and_then(Transaction::category);

        Ok(match recorded {
            Some(category) => ExpenseOutcome::Recorded { category, amount },
            None => ExpenseOutcome::UnknownCategory(category.to_string()),
        })
    }

    pub fn summary(&self) -> String {
        self.ledger.format_summary()
    }

    /// The last `limit` transactions in chronological order, or all of them.
    pub fn transactions(&self, limit: Option<usize>) -> &[Transaction] {
        let all = self.ledger.transactions();
        match limit {
            Some(limit) if limit < all.len() => &all[all.len() - limit..],
            _ => all,
        }
    }

    pub fn report(&self) -> IncomeExpenseReport {
        IncomeExpenseReport::from_transactions(self.ledger.transactions())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.repo.save(&self.ledger)?;
        Ok(())
    }

    pub fn load(&mut self) -> Result<LoadOutcome, AppError> {
        Ok(self.repo.load_into(&mut self.ledger)?)
    }
}
