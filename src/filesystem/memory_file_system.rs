use std::io;
use std::sync::Arc;

use dashmap::DashMap;

use crate::filesystem::FileSystem;

/// In-memory file system keyed by path, mostly useful for tests.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Arc<DashMap<String, String>>
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self {
            files: Arc::new(DashMap::new())
        }
    }

    pub fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn read_to_string(&self, path: &str) -> Option<String> {
        self.files.get(path).map(|contents| contents.value().clone())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSystem for MemoryFileSystem {
    fn append_all_text(&self, path: &str, contents: &str) -> io::Result<()> {
        self.files.entry(path.to_string()).or_default().push_str(contents);

        Ok(())
    }
}
