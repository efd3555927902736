use crate::shared::error::StorageError;
use crate::shared::StorageResult;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// How the filesystem adapter turns a file into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadStrategy {
    /// Read the whole file, then decode it as UTF-8
    #[default]
    Buffered,
    /// Open, stat, allocate a buffer of the reported size, read it fully,
    /// then decode it as UTF-8
    Staged,
}

impl ReadStrategy {
    /// Reads `path` as UTF-8 text using this strategy
    pub fn read(&self, path: &Path, key: &str) -> StorageResult<String> {
        match self {
            ReadStrategy::Buffered => read_buffered(path, key),
            ReadStrategy::Staged => read_staged(path, key),
        }
    }
}

impl std::str::FromStr for ReadStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buffered" => Ok(ReadStrategy::Buffered),
            "staged" => Ok(ReadStrategy::Staged),
            _ => Err(format!(
                "Invalid read strategy: {}. Please specify 'buffered' or 'staged'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReadStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadStrategy::Buffered => write!(f, "buffered"),
            ReadStrategy::Staged => write!(f, "staged"),
        }
    }
}

fn read_buffered(path: &Path, key: &str) -> StorageResult<String> {
    let bytes = fs::read(path).map_err(|e| StorageError::from_io(key, &e))?;
    decode_utf8(bytes, key)
}

/// Bytes appended to the file after the stat are not read.
fn read_staged(path: &Path, key: &str) -> StorageResult<String> {
    let mut file = File::open(path).map_err(|e| StorageError::from_io(key, &e))?;
    let stat = file.metadata().map_err(|e| StorageError::from_io(key, &e))?;

    let size = usize::try_from(stat.len()).map_err(|_| StorageError::Rejected {
        key: key.to_string(),
        details: format!("{} bytes do not fit in memory on this platform", stat.len()),
    })?;

    let mut buffer = vec![0; size];
    file.read_exact(&mut buffer)
        .map_err(|e| StorageError::from_io(key, &e))?;

    decode_utf8(buffer, key)
}

fn decode_utf8(bytes: Vec<u8>, key: &str) -> StorageResult<String> {
    String::from_utf8(bytes).map_err(|e| StorageError::InvalidEncoding {
        key: key.to_string(),
        details: e.utf8_error().to_string(),
    })
}
