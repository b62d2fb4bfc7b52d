use super::{FileSystem, LocalFileSystem, MemoryFileSystem};
use anyhow::{anyhow, Result};
use std::fs;

#[test]
fn test_memory_file_system_creates_missing_files_on_append() -> Result<()> {
    let file_system = MemoryFileSystem::new();

    assert!(!file_system.exists("ledger.qif"));
    assert!(file_system.is_empty());

    file_system.append_all_text("ledger.qif", "Type:Cash\n")?;

    assert!(file_system.exists("ledger.qif"));
    assert_eq!(file_system.read_to_string("ledger.qif").as_deref(), Some("Type:Cash\n"));

    Ok(())
}

#[test]
fn test_memory_file_system_appends_without_overwriting() -> Result<()> {
    let file_system = MemoryFileSystem::new();
    file_system.append_all_text("ledger.qif", "first\n")?;
    file_system.append_all_text("ledger.qif", "second\n")?;

    let contents = file_system.read_to_string("ledger.qif").ok_or_else(|| anyhow!("ledger.qif missing"))?;

    assert_eq!(contents, "first\nsecond\n");

    Ok(())
}

#[test]
fn test_memory_file_system_keeps_paths_separate() -> Result<()> {
    let file_system = MemoryFileSystem::new();
    file_system.append_all_text("a.qif", "a")?;
    file_system.append_all_text("b.qif", "b")?;

    assert_eq!(file_system.len(), 2);
    assert_eq!(file_system.read_to_string("a.qif").as_deref(), Some("a"));
    assert_eq!(file_system.read_to_string("b.qif").as_deref(), Some("b"));
    assert!(file_system.read_to_string("c.qif").is_none());

    Ok(())
}

#[test]
fn test_local_file_system_appends_to_existing_content() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("ledger.qif");
    let path_str = path.to_str().ok_or_else(|| anyhow!("non utf-8 temp path"))?;

    fs::write(&path, "existing\n")?;

    let file_system = LocalFileSystem::new();
    file_system.append_all_text(path_str, "appended\n")?;

    assert_eq!(fs::read_to_string(&path)?, "existing\nappended\n");

    Ok(())
}

#[test]
fn test_local_file_system_creates_missing_file() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("new.qif");
    let path_str = path.to_str().ok_or_else(|| anyhow!("non utf-8 temp path"))?;

    LocalFileSystem::new().append_all_text(path_str, "Type:Checking\n")?;

    assert_eq!(fs::read_to_string(&path)?, "Type:Checking\n");

    Ok(())
}

#[test]
fn test_local_file_system_propagates_io_errors() -> Result<()> {
    let directory = tempfile::tempdir()?;
    let path = directory.path().join("missing").join("ledger.qif");
    let path_str = path.to_str().ok_or_else(|| anyhow!("non utf-8 temp path"))?;

    let result = LocalFileSystem::new().append_all_text(path_str, "Type:Checking\n");

    assert_eq!(result.map_err(|error| error.kind()), Err(std::io::ErrorKind::NotFound));

    Ok(())
}
