use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::{Amount, Category};

/// Timestamp format used in the persisted history, e.g. "2024-01-15 09:30:00".
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time truncated to whole seconds, the precision the
/// history is stored with.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry of the transaction history. Entries are never edited once
/// appended to a ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Transaction {
    Income {
        amount: Amount,
        #[serde(with = "date_format")]
        date: NaiveDateTime,
    },
    Expense {
        category: Category,
        amount: Amount,
        #[serde(with = "date_format")]
        date: NaiveDateTime,
    },
}

impl Transaction {
    pub fn income(amount: Amount, date: NaiveDateTime) -> Self {
        Transaction::Income {
            amount,
            date: date.trunc_subsecs(0),
        }
    }

    pub fn expense(category: Category, amount: Amount, date: NaiveDateTime) -> Self {
        Transaction::Expense {
            category,
            amount,
            date: date.trunc_subsecs(0),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Income { .. } => TransactionKind::Income,
            Transaction::Expense { .. } => TransactionKind::Expense,
        }
    }

    /// Expense category; `None` for income.
    pub fn category(&self) -> Option<Category> {
        match self {
            Transaction::Income { .. } => None,
            Transaction::Expense { category, .. } => Some(*category),
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            Transaction::Income { amount, .. } | Transaction::Expense { amount, .. } => *amount,
        }
    }

    pub fn date(&self) -> NaiveDateTime {
        match self {
            Transaction::Income { date, .. } | Transaction::Expense { date, .. } => *date,
        }
    }
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
