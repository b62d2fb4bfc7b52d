use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Error opening CSV at path [{path}]: {source}")]
    Io {
        path: String,
        source: io::Error
    }
}
