use std::fs::OpenOptions;
use std::io;
use std::io::Write;

use tracing::trace;

use crate::filesystem::FileSystem;

/// Appends to files on the local disk, creating them when absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn append_all_text(&self, path: &str, contents: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        file.write_all(contents.as_bytes())?;
        file.flush()?;

        trace!("Appended {} bytes to [{path}]", contents.len());

        Ok(())
    }
}
