use std::sync::{Arc, Mutex};
use text_joiner::prelude::*;

/// Mock TextStorage wrapping an InMemoryStorage and recording every call
#[derive(Clone)]
pub struct MockTextStorage {
    pub inner: Arc<InMemoryStorage>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub write_failure: Option<StorageError>,
}

impl MockTextStorage {
    pub fn new(inner: InMemoryStorage) -> Self {
        Self {
            inner: Arc::new(inner),
            calls: Arc::new(Mutex::new(Vec::new())),
            write_failure: None,
        }
    }

    /// Every write fails with `error`
    pub fn with_write_failure(mut self, error: StorageError) -> Self {
        self.write_failure = Some(error);
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.get_calls()
            .iter()
            .filter(|c| c.starts_with("write_text"))
            .count()
    }
}

impl TextStorage for MockTextStorage {
    fn read_text(&self, key: &str) -> StorageResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("read_text {}", key));
        self.inner.read_text(key)
    }

    fn write_text(&self, key: &str, text: &str) -> StorageResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("write_text {}", key));
        if let Some(error) = &self.write_failure {
            return Err(error.clone());
        }
        self.inner.write_text(key, text)
    }
}
