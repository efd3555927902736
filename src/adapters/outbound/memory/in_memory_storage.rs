use crate::ports::outbound::TextStorage;
use crate::shared::error::StorageError;
use crate::shared::StorageResult;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemoryState {
    entries: HashMap<String, Vec<u8>>,
    read_only: HashSet<String>,
    unreadable: HashSet<String>,
    capacity: Option<usize>,
}

impl MemoryState {
    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len())
            .sum()
    }
}

/// InMemoryStorage adapter keeping text resources in a map
///
/// Safe to share between threads. Failure modes of a real backend can be
/// simulated: read-only keys, unreadable keys, raw non-UTF-8 bytes and a
/// total byte capacity.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    state: Mutex<MemoryState>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_bytes(key, text.into().into_bytes())
    }

    pub fn with_bytes(self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.lock().entries.insert(key.into(), bytes.into());
        self
    }

    /// Writes to `key` fail with `PermissionDenied`
    pub fn with_read_only(self, key: impl Into<String>) -> Self {
        self.lock().read_only.insert(key.into());
        self
    }

    /// Reads of `key` fail with `PermissionDenied`
    pub fn with_unreadable(self, key: impl Into<String>) -> Self {
        self.lock().unreadable.insert(key.into());
        self
    }

    /// Writes that would push the total stored size past `bytes` fail with `NoSpace`
    pub fn with_capacity(self, bytes: usize) -> Self {
        self.lock().capacity = Some(bytes);
        self
    }

    /// Returns the stored text of `key`, if present and valid UTF-8
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock()
            .entries
            .get(key)
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // Entries stay consistent even if a holder panicked
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TextStorage for InMemoryStorage {
    fn read_text(&self, key: &str) -> StorageResult<String> {
        let state = self.lock();

        if state.unreadable.contains(key) {
            return Err(StorageError::PermissionDenied {
                key: key.to_string(),
                details: "resource is not readable".to_string(),
            });
        }

        let bytes = state.entries.get(key).ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
            details: "no resource stored under this key".to_string(),
        })?;

        String::from_utf8(bytes.clone()).map_err(|e| StorageError::InvalidEncoding {
            key: key.to_string(),
            details: e.utf8_error().to_string(),
        })
    }

    fn write_text(&self, key: &str, text: &str) -> StorageResult<()> {
        let mut state = self.lock();

        if state.read_only.contains(key) {
            return Err(StorageError::PermissionDenied {
                key: key.to_string(),
                details: "resource is read-only".to_string(),
            });
        }

        if let Some(capacity) = state.capacity {
            let required = state.used_bytes_excluding(key) + text.len();
            if required > capacity {
                return Err(StorageError::NoSpace {
                    key: key.to_string(),
                    details: format!(
                        "{} bytes required but capacity is {} bytes",
                        required, capacity
                    ),
                });
            }
        }

        state
            .entries
            .insert(key.to_string(), text.as_bytes().to_vec());
        Ok(())
    }
}
