use anyhow::Result;
use std::io::Write;

use crate::domain::{format_amount, Ledger, DATE_FORMAT};
use crate::storage::SnapshotRef;

/// Exporter for writing ledger data to CSV or JSON.
pub struct Exporter<'a> {
    ledger: &'a Ledger,
}

impl<'a> Exporter<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Export the transaction history to CSV. Returns the number of rows.
    pub fn export_history_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["type", "category", "amount", "date"])?;

        let mut count = 0;
        for tx in self.ledger.transactions() {
            let amount = format_amount(tx.amount());
            let date = tx.date().format(DATE_FORMAT).to_string();
            csv_writer.write_record([
                tx.kind().as_str(),
                tx.category().map(|c| c.as_str()).unwrap_or_default(),
                amount.as_str(),
                date.as_str(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the transaction history as a JSON array. Returns the number of entries.
    pub fn export_history_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let transactions = self.ledger.transactions();
        serde_json::to_writer_pretty(&mut writer, transactions)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(transactions.len())
    }

    /// Export the full snapshot, the same document the data file holds.
    pub fn export_full_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        serde_json::to_writer_pretty(&mut writer, &SnapshotRef::of(self.ledger))?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(self.ledger.transactions().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        let date = NaiveDate::from_ymd_opt(2024, 2, 10)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        ledger.record_income_at(1000.0, date);
        ledger.record_expense_at("Food", 12.5, date);
        ledger
    }

    #[test]
    fn test_history_csv() {
        let ledger = ledger();
        let mut out = Vec::new();
        let count = Exporter::new(&ledger).export_history_csv(&mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "type,category,amount,date\n\
             income,,1000.00,2024-02-10 08:05:00\n\
             expense,food,12.50,2024-02-10 08:05:00\n"
        );
    }

    #[test]
    fn test_full_json_matches_data_file_layout() {
        let ledger = ledger();
        let mut out = Vec::new();
        Exporter::new(&ledger).export_full_json(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["budget"]["food"], -12.5);
        assert_eq!(value["transaction_history"][1]["category"], "food");
    }

    #[test]
    fn test_history_json() {
        let ledger = ledger();
        let mut out = Vec::new();
        let count = Exporter::new(&ledger).export_history_json(&mut out).unwrap();

        assert_eq!(count, 2);
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
