use super::ReadStrategy;
use crate::ports::outbound::TextStorage;
use crate::shared::error::StorageError;
use crate::shared::security;
use crate::shared::StorageResult;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemStorage adapter for reading and writing local text files
///
/// Keys are file paths. Relative keys resolve against the base directory
/// when one is configured, otherwise against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct FileSystemStorage {
    base_dir: Option<PathBuf>,
    read_strategy: ReadStrategy,
}

impl FileSystemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_read_strategy(mut self, read_strategy: ReadStrategy) -> Self {
        self.read_strategy = read_strategy;
        self
    }

    pub fn read_strategy(&self) -> ReadStrategy {
        self.read_strategy
    }

    /// Resolves a key to a filesystem path
    pub fn resolve(&self, key: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) => base.join(key),
            None => Path::new(key).to_path_buf(),
        }
    }

    /// Canonical form of a key's path; a missing file resolves through its parent
    fn canonical(&self, key: &str) -> PathBuf {
        let path = self.resolve(key);
        if let Ok(canonical) = path.canonicalize() {
            return canonical;
        }

        let parent = match path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        match (parent.canonicalize(), path.file_name()) {
            (Ok(dir), Some(name)) => dir.join(name),
            _ => path,
        }
    }
}

impl TextStorage for FileSystemStorage {
    fn read_text(&self, key: &str) -> StorageResult<String> {
        let path = self.resolve(key);
        security::validate_readable_file(&path, key)?;
        self.read_strategy.read(&path, key)
    }

    fn write_text(&self, key: &str, text: &str) -> StorageResult<()> {
        let path = self.resolve(key);
        security::validate_write_target(&path, key)?;
        fs::write(&path, text).map_err(|e| StorageError::from_io(key, &e))
    }

    fn same_resource(&self, first: &str, second: &str) -> bool {
        first == second || self.canonical(first) == self.canonical(second)
    }
}
