mod csv_reader;
mod errors;

pub use csv_reader::{read_transactions, read_transactions_from_path};
pub use errors::IngestError;
