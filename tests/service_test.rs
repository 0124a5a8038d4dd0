mod common;

use std::fs;

use anyhow::Result;
use budget_tracker::application::{AppError, BudgetService, ExpenseOutcome};
use budget_tracker::domain::Category;
use budget_tracker::storage::LoadOutcome;
use common::{data_path, test_service};

#[test]
fn test_add_income_parses_amount() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    assert_eq!(service.add_income(" 1000.50 ")?, 1000.5);
    assert_eq!(service.ledger().balance(Category::Income), 1000.5);

    Ok(())
}

#[test]
fn test_invalid_amount_does_not_mutate() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    service.add_income("10")?;

    for bad in ["", "abc", "12,50", "inf", "nan"] {
        assert!(matches!(
            service.add_income(bad),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            service.add_expense("food", bad),
            Err(AppError::InvalidAmount(_))
        ));
    }

    assert_eq!(service.ledger().transactions().len(), 1);
    assert_eq!(service.ledger().balance(Category::Food), 0.0);

    Ok(())
}

#[test]
fn test_add_expense_outcomes() -> Result<()> {
    let (mut service, _temp) = test_service()?;

    assert_eq!(
        service.add_expense("Entertainment", "25")?,
        ExpenseOutcome::Recorded {
            category: Category::Entertainment,
            amount: 25.0
        }
    );
    assert_eq!(
        service.add_expense("rent", "200")?,
        ExpenseOutcome::UnknownCategory("rent".to_string())
    );
    assert_eq!(service.ledger().transactions().len(), 1);

    Ok(())
}

#[test]
fn test_amount_is_validated_before_category() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    assert!(matches!(
        service.add_expense("rent", "lots"),
        Err(AppError::InvalidAmount(_))
    ));
    Ok(())
}

#[test]
fn test_open_loads_existing_file() -> Result<()> {
    let (mut service, temp) = test_service()?;
    service.add_income("500")?;
    service.add_expense("food", "20")?;
    service.save()?;

    let reopened = BudgetService::open(data_path(&temp))?;
    assert_eq!(reopened.ledger(), service.ledger());

    Ok(())
}

#[test]
fn test_open_without_file_starts_empty() -> Result<()> {
    let (_, temp) = test_service()?;
    let service = BudgetService::open(data_path(&temp))?;

    assert!(service.ledger().transactions().is_empty());
    assert!(!service.repository().exists());

    Ok(())
}

#[test]
fn test_open_malformed_file_fails() -> Result<()> {
    let (_, temp) = test_service()?;
    fs::write(data_path(&temp), "42")?;

    assert!(matches!(
        BudgetService::open(data_path(&temp)),
        Err(AppError::Storage(_))
    ));

    Ok(())
}

#[test]
fn test_load_discards_unsaved_changes() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    service.add_income("100")?;
    service.save()?;
    service.add_income("50")?;

    assert_eq!(service.load()?, LoadOutcome::Loaded);
    assert_eq!(service.ledger().balance(Category::Income), 100.0);

    Ok(())
}

#[test]
fn test_transactions_limit_returns_most_recent() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    for amount in ["1", "2", "3"] {
        service.add_income(amount)?;
    }

    let recent: Vec<f64> = service
        .transactions(Some(2))
        .iter()
        .map(|t| t.amount())
        .collect();
    assert_eq!(recent, vec![2.0, 3.0]);
    assert_eq!(service.transactions(Some(10)).len(), 3);
    assert_eq!(service.transactions(None).len(), 3);

    Ok(())
}

#[test]
fn test_report_totals() -> Result<()> {
    let (mut service, _temp) = test_service()?;
    service.add_income("1000")?;
    service.add_expense("housing", "600")?;
    service.add_expense("food", "150")?;
    service.add_expense("rent", "999")?;

    let report = service.report();
    assert_eq!(report.transaction_count, 3);
    assert_eq!(report.total_income, 1000.0);
    assert_eq!(report.total_expense, 750.0);
    assert_eq!(report.net, 250.0);
    assert_eq!(report.expense_categories.len(), 2);
    assert_eq!(report.expense_categories[0].category, Category::Housing);

    Ok(())
}
