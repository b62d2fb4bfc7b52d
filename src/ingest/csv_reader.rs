use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, error};

use crate::ingest::IngestError;
use crate::models::{QifTransaction, SubTransaction, TransactionType};
use crate::types::Monetary;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RecordKind {
    Transaction,
    Split
}

/// One row of the input CSV. A `split` row belongs to the closest accepted `transaction` row above it.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    record: RecordKind,
    #[serde(rename = "type")]
    transaction_type: Option<TransactionType>,
    date: Option<NaiveDate>,
    amount: Monetary,
    payee: Option<String>,
    category: Option<String>,
    memo: Option<String>,
    extra: Option<String>
}

/// Reads a transactions CSV from disk.
///
/// # Errors
/// Returns `IngestError::Io` if the file cannot be opened. Malformed rows are logged and skipped.
pub fn read_transactions_from_path(path: impl AsRef<Path>) -> Result<Vec<QifTransaction>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source
    })?;

    Ok(read_transactions(BufReader::new(file)))
}

/// Reads transactions from headed CSV input, in row order.
pub fn read_transactions<R: Read>(reader: R) -> Vec<QifTransaction> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    let mut current: Option<QifTransaction> = None;

    for (index, result) in reader.deserialize::<CsvRecord>().enumerate() {
        //NOTE: Row numbers are 1-based and skip the header so they line up with what an editor shows
        let row = index + 2;

        let record = match result {
            Ok(record) => record,
            Err(error) => {
                error!("CSV deserialization error on row [{row}]: {error}");

                //NOTE: The rejected row may have been a transaction, so the splits that follow it must not attach to the previous one
                transactions.extend(current.take());
                continue;
            }
        };

        let kind = record.record;

        match kind {
            RecordKind::Transaction => {
                transactions.extend(current.take());
                current = into_transaction(record, row);
            }
            RecordKind::Split => match current.as_mut() {
                Some(parent) => parent.sub_transactions.push(into_split(record)),
                None => error!("Split on row [{row}] has no transaction to belong to, skipping")
            }
        }
    }

    transactions.extend(current);

    debug!("Read {} transactions from CSV", transactions.len());

    transactions
}

fn into_transaction(record: CsvRecord, row: usize) -> Option<QifTransaction> {
    let Some(transaction_type) = record.transaction_type else {
        error!("Transaction on row [{row}] has no type, skipping it and its splits");
        return None;
    };

    let Some(date) = record.date else {
        error!("Transaction on row [{row}] has no date, skipping it and its splits");
        return None;
    };

    Some(QifTransaction::new(transaction_type, date, record.amount)
        .with_payee(record.payee.unwrap_or_default())
        .with_category(record.category.unwrap_or_default())
        .with_memo(record.memo.unwrap_or_default()))
}

fn into_split(record: CsvRecord) -> SubTransaction {
    SubTransaction::new(
        record.category.unwrap_or_default(),
        record.extra.unwrap_or_default(),
        record.amount
    )
}
