use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{format_currency, now, Amount, Category, Transaction};

/// Running balance per category. Always holds exactly the seven fixed keys;
/// a key missing from a persisted snapshot reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balances {
    pub income: Amount,
    pub housing: Amount,
    pub food: Amount,
    pub transportation: Amount,
    pub utilities: Amount,
    pub entertainment: Amount,
    pub other: Amount,
}

impl Balances {
    pub fn get(&self, category: Category) -> Amount {
        match category {
            Category::Income => self.income,
            Category::Housing => self.housing,
            Category::Food => self.food,
            Category::Transportation => self.transportation,
            Category::Utilities => self.utilities,
            Category::Entertainment => self.entertainment,
            Category::Other => self.other,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut Amount {
        match category {
            Category::Income => &mut self.income,
            Category::Housing => &mut self.housing,
            Category::Food => &mut self.food,
            Category::Transportation => &mut self.transportation,
            Category::Utilities => &mut self.utilities,
            Category::Entertainment => &mut self.entertainment,
            Category::Other => &mut self.other,
        }
    }

    /// Iterate `(category, balance)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Amount)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// In-memory budget: per-category balances plus the append-only history
/// of every income and expense recorded since the last load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    balances: Balances,
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balances(&self) -> &Balances {
        &self.balances
    }

    pub fn balance(&self, category: Category) -> Amount {
        self.balances.get(category)
    }

    /// History in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Record income stamped with the current local time.
    pub fn record_income(&mut self, amount: Amount) -> &Transaction {
        self.record_income_at(amount, now())
    }

    pub fn record_income_at(&mut self, amount: Amount, date: NaiveDateTime) -> &Transaction {
        self.balances.income += amount;
        debug!(amount, "recorded income");
        self.push(Transaction::income(amount, date))
    }

    /// Record an expense against a category given by name, stamped with the
    /// current local time.
    ///
    /// The name is matched case-insensitively. A name outside the fixed set
    /// changes nothing and returns `None`; it is not an error.
    pub fn record_expense(&mut self, category: &str, amount: Amount) -> Option<&Transaction> {
        self.record_expense_at(category, amount, now())
    }

    pub fn record_expense_at(
        &mut self,
        category: &str,
        amount: Amount,
        date: NaiveDateTime,
    ) -> Option<&Transaction> {
        match Category::parse(category) {
            Some(category) => Some(self.record_expense_in(category, amount, date)),
            None => {
                warn!(category, amount, "ignoring expense for unknown category");
                None
            }
        }
    }

    /// Record an expense against an already resolved category.
    pub fn record_expense_in(
        &mut self,
        category: Category,
        amount: Amount,
        date: NaiveDateTime,
    ) -> &Transaction {
        *self.balances.get_mut(category) -= amount;
        debug!(%category, amount, "recorded expense");
        self.push(Transaction::expense(category, amount, date))
    }

    /// Human-readable listing of every category, one per line, in
    /// declaration order, e.g. "Food: $-50.00".
    pub fn format_summary(&self) -> String {
        self.balances
            .iter()
            .map(|(category, amount)| {
                format!("{}: {}", category.display_name(), format_currency(amount))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the whole state with a loaded snapshot. Missing balances keep
    /// the current ones; a missing history becomes empty.
    pub(crate) fn restore(&mut self, balances: Option<Balances>, transactions: Vec<Transaction>) {
        if let Some(balances) = balances {
            self.balances = balances;
        }
        self.transactions = transactions;
    }

    fn push(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }
}
