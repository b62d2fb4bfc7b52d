mod local_file_system;
mod memory_file_system;
#[cfg(test)]
mod tests;

use std::io;

pub use local_file_system::LocalFileSystem;
pub use memory_file_system::MemoryFileSystem;

/// Sink that QIF text is appended to.
///
/// Only appending is required: nothing is ever read back, truncated or seeked. Creating a
/// missing resource, and every failure mode that comes with it, belongs to the implementation.
pub trait FileSystem: Send + Sync + 'static {
    fn append_all_text(&self, path: &str, contents: &str) -> io::Result<()>;
}
