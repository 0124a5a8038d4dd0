use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Category, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: Amount,
    pub count: usize,
    pub percentage: f64,
}

/// Totals computed from the transaction history rather than the running
/// balances, so they stay meaningful after balances were loaded from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpenseReport {
    pub transaction_count: usize,
    pub total_income: Amount,
    pub total_expense: Amount,
    pub net: Amount,
    /// Only categories with at least one expense, in declaration order.
    pub expense_categories: Vec<CategorySummary>,
}

impl IncomeExpenseReport {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_income = 0.0;
        let mut totals = [0.0; Category::ALL.len()];
        let mut counts = [0usize; Category::ALL.len()];

        for transaction in transactions {
            match transaction {
                Transaction::Income { amount, .. } => total_income += amount,
                Transaction::Expense {
                    category, amount, ..
                } => {
                    totals[category.index()] += amount;
                    counts[category.index()] += 1;
                }
            }
        }

        let total_expense: Amount = totals.iter().sum();
        let expense_categories = Category::ALL
            .into_iter()
            .filter(|c| counts[c.index()] > 0)
            .map(|category| {
                let total = totals[category.index()];
                let percentage = if total_expense != 0.0 {
                    total / total_expense * 100.0
                } else {
                    0.0
                };
                CategorySummary {
                    category,
                    total,
                    count: counts[category.index()],
                    percentage,
                }
            })
            .collect();

        Self {
            transaction_count: transactions.len(),
            total_income,
            total_expense,
            net: total_income - total_expense,
            expense_categories,
        }
    }
}
