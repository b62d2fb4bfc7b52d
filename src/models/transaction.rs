use chrono::NaiveDate;

use crate::models::TransactionType;
use crate::types::Monetary;

/// A single ledger entry to be written as one QIF record.
///
/// When `sub_transactions` is non-empty the entry is a split. Nothing checks that the
/// split amounts add up to `amount`; that is left to whoever builds the record.
#[derive(Debug, Clone, PartialEq)]
pub struct QifTransaction {
    /// Account-type label. Only the first transaction of a batch decides the file header.
    pub transaction_type: TransactionType,
    pub date: NaiveDate,
    pub amount: Monetary,
    pub payee: String,
    /// Top-level category, also used as the prefix of every split category.
    pub category: String,
    pub memo: String,
    pub sub_transactions: Vec<SubTransaction>
}

/// One split line of a [`QifTransaction`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubTransaction {
    pub category: String,
    /// Written as the split memo (`E:`).
    pub extra: String,
    pub amount: Monetary
}

impl QifTransaction {
    /// Creates a transaction with empty text fields and no splits.
    pub fn new(transaction_type: TransactionType, date: NaiveDate, amount: Monetary) -> Self {
        Self {
            transaction_type,
            date,
            amount,
            payee: String::new(),
            category: String::new(),
            memo: String::new(),
            sub_transactions: Vec::new()
        }
    }

    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = payee.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_split(mut self, sub_transaction: SubTransaction) -> Self {
        self.sub_transactions.push(sub_transaction);
        self
    }

    pub fn is_split(&self) -> bool {
        !self.sub_transactions.is_empty()
    }
}

impl SubTransaction {
    pub fn new(category: impl Into<String>, extra: impl Into<String>, amount: Monetary) -> Self {
        Self {
            category: category.into(),
            extra: extra.into(),
            amount
        }
    }
}
