use super::{QifTransaction, SubTransaction, TransactionType};

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;

use crate::types::Monetary;

#[test]
fn test_transaction_type_names_match_variants() {
    assert_eq!(TransactionType::Checking.name(), "Checking");
    assert_eq!(TransactionType::CreditCard.name(), "CreditCard");
    assert_eq!(TransactionType::Liability.to_string(), "Liability");
}

#[test]
fn test_new_transaction_has_empty_text_fields_and_no_splits() -> Result<()> {
    let date = NaiveDate::from_ymd_opt(2021, 1, 1).ok_or_else(|| anyhow::anyhow!("invalid date"))?;
    let transaction = QifTransaction::new(TransactionType::Cash, date, Monetary::from_str("5.00")?);

    assert!(transaction.payee.is_empty());
    assert!(transaction.category.is_empty());
    assert!(transaction.memo.is_empty());
    assert!(!transaction.is_split());

    Ok(())
}

#[test]
fn test_builder_preserves_split_order() -> Result<()> {
    let date = NaiveDate::from_ymd_opt(2021, 1, 1).ok_or_else(|| anyhow::anyhow!("invalid date"))?;
    let transaction = QifTransaction::new(TransactionType::Checking, date, Monetary::from_str("30.00")?)
        .with_payee("Grocer")
        .with_category("Food")
        .with_memo("Weekly")
        .with_split(SubTransaction::new("Fruit", "apples", Monetary::from_str("10.00")?))
        .with_split(SubTransaction::new("Bread", "rye", Monetary::from_str("20.00")?));

    assert!(transaction.is_split());
    assert_eq!(transaction.payee, "Grocer");
    assert_eq!(transaction.memo, "Weekly");

    let categories: Vec<&str> = transaction.sub_transactions.iter().map(|split| split.category.as_str()).collect();

    assert_eq!(categories, vec!["Fruit", "Bread"]);

    Ok(())
}
