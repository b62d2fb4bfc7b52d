mod errors;
mod options;
mod qif_writer;

pub use errors::QifError;
pub use options::{LineEnding, WriterOptions};
pub use qif_writer::QifWriter;
