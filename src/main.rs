use std::io::stderr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use qif_writer::ingest::read_transactions_from_path;
use qif_writer::{LineEnding, LocalFileSystem, QifWriter};

/// Convert a transactions CSV into QIF and append it to a file.
#[derive(Debug, Parser)]
#[command(name = "qif-writer", version, about)]
struct Cli {
    /// Input CSV with `record,type,date,amount,payee,category,memo,extra` columns
    input: PathBuf,

    /// QIF file to append to, created if missing
    output: String,

    /// Minimum level of log events written to stderr
    #[arg(long, env = "QIF_WRITER_LOG", value_enum, ignore_case = true, default_value_t = LogLevel::Error)]
    log_level: LogLevel,

    /// Terminate lines with CRLF instead of LF
    #[arg(long)]
    crlf: bool,

    /// Put the category line of split transactions on its own line
    #[arg(long)]
    terminate_split_category: bool
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.into());

    let timer = Instant::now();
    let transactions = read_transactions_from_path(&cli.input)?;

    if transactions.is_empty() {
        bail!("No valid transactions found in [{}]", cli.input.display());
    }

    let line_ending = if cli.crlf { LineEnding::CrLf } else { LineEnding::Lf };
    let writer = QifWriter::new(Arc::new(LocalFileSystem::new()))
        .with_line_ending(line_ending)
        .with_terminated_split_category(cli.terminate_split_category);

    writer.write_file(&cli.output, &transactions)?;

    let duration = timer.elapsed();

    info!("Converted {} transactions in: {duration:?}", transactions.len());

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
