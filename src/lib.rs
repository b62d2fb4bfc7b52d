//! Writes financial transactions, including split transactions, as QIF text appended to a file.

pub mod filesystem;
pub mod ingest;
pub mod models;
pub mod types;
pub mod writer;

pub use filesystem::{FileSystem, LocalFileSystem, MemoryFileSystem};
pub use models::{QifTransaction, SubTransaction, TransactionType};
pub use types::Monetary;
pub use writer::{LineEnding, QifError, QifWriter, WriterOptions};
