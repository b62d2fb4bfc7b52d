use std::fmt::{self, Write};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::filesystem::FileSystem;
use crate::models::QifTransaction;
use crate::writer::{LineEnding, QifError, WriterOptions};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serializes transactions to QIF and appends them to a file through a [`FileSystem`].
pub struct QifWriter<F: FileSystem> {
    file_system: Arc<F>,
    options: WriterOptions
}

impl<F: FileSystem> QifWriter<F> {
    /// Creates a writer with `\n` line endings and the unterminated split category line.
    pub fn new(file_system: Arc<F>) -> Self {
        Self {
            file_system,
            options: WriterOptions::default()
        }
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.options.line_ending = line_ending;
        self
    }

    pub fn with_terminated_split_category(mut self, terminate: bool) -> Self {
        self.options.terminate_split_category = terminate;
        self
    }

    /// Appends the QIF rendering of `transactions` to `file_name`.
    ///
    /// The whole text is assembled in memory and handed to the file system in a single
    /// append, so either everything is written or nothing is.
    ///
    /// # Errors
    /// - `InvalidArgument` if `file_name` is blank.
    /// - `EmptyTransactions` if `transactions` is empty.
    /// - `Io` with the file system's error, unchanged.
    ///
    /// Argument errors are raised before any I/O is attempted.
    pub fn write_file(&self, file_name: &str, transactions: &[QifTransaction]) -> Result<(), QifError> {
        if file_name.trim().is_empty() {
            return Err(QifError::blank_file_name());
        }

        let contents = self.render(transactions)?;

        self.file_system.append_all_text(file_name, &contents)?;

        info!("Appended {} transactions ({} bytes) to [{file_name}]", transactions.len(), contents.len());

        Ok(())
    }

    /// Renders `transactions` to QIF text without writing it anywhere.
    pub fn render(&self, transactions: &[QifTransaction]) -> Result<String, QifError> {
        let Some(first) = transactions.first() else {
            return Err(QifError::EmptyTransactions);
        };

        let mut output = QifOutput::new(self.options.line_ending);

        //NOTE: The header only ever reflects the first transaction, later types are reported but not written
        output.line(format_args!("Type:{}", first.transaction_type))?;

        for (index, transaction) in transactions.iter().enumerate() {
            if transaction.transaction_type != first.transaction_type {
                warn!(
                    "Transaction [{index}] has type [{}] but the file header uses [{}]",
                    transaction.transaction_type, first.transaction_type
                );
            }

            self.render_transaction(&mut output, transaction)?;
        }

        debug!("Rendered {} transactions", transactions.len());

        Ok(output.into_string())
    }

    fn render_transaction(&self, output: &mut QifOutput, transaction: &QifTransaction) -> fmt::Result {
        output.line(format_args!("D:{}", transaction.date.format(DATE_FORMAT)))?;
        output.line(format_args!("T:{}", transaction.amount))?;
        output.line(format_args!("P:{}", transaction.payee))?;

        match transaction.sub_transactions.first() {
            None => output.line(format_args!("L:{}", transaction.category))?,
            Some(first_split) => {
                output.partial(format_args!("L:{}:{}", transaction.category, first_split.category))?;

                if self.options.terminate_split_category {
                    output.end_line()?;
                }

                for split in &transaction.sub_transactions {
                    output.line(format_args!("S:{}:{}", transaction.category, split.category))?;
                    output.line(format_args!("E:{}", split.extra))?;
                    output.line(format_args!("${}", split.amount))?;
                }
            }
        }

        output.line(format_args!("M:{}", transaction.memo))?;
        output.line(format_args!("^"))
    }
}

struct QifOutput {
    text: String,
    line_ending: &'static str
}

impl QifOutput {
    fn new(line_ending: LineEnding) -> Self {
        Self {
            text: String::new(),
            line_ending: line_ending.as_str()
        }
    }

    fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.text.write_fmt(args)?;
        self.end_line()
    }

    fn end_line(&mut self) -> fmt::Result {
        self.text.write_str(self.line_ending)
    }

    fn partial(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.text.write_fmt(args)
    }

    fn into_string(self) -> String {
        self.text
    }
}
