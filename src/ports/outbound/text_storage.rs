use crate::shared::StorageResult;

/// TextStorage port - the storage provider capability
///
/// Resources are identified by a path-like string key and hold UTF-8 text.
/// Implementations decide what a key means (file path, map key, ...).
pub trait TextStorage {
    /// Reads the resource identified by `key` fully into memory as text
    ///
    /// # Errors
    /// - `NotFound` if no resource exists under `key`
    /// - `PermissionDenied` if the resource cannot be read
    /// - `InvalidEncoding` if the content is not valid UTF-8
    fn read_text(&self, key: &str) -> StorageResult<String>;

    /// Writes `text` to `key`, replacing any previous content
    ///
    /// Implementations are not required to be atomic.
    ///
    /// # Errors
    /// - `PermissionDenied` if the resource cannot be written
    /// - `NoSpace` if the backend is full
    /// - `Io` for any other backend failure
    fn write_text(&self, key: &str, text: &str) -> StorageResult<()>;

    /// Whether two keys name the same underlying resource
    ///
    /// The default compares keys literally. Backends where distinct keys can
    /// alias one resource (e.g. `./a.txt` and `a.txt`) should override it.
    fn same_resource(&self, first: &str, second: &str) -> bool {
        first == second
    }
}

impl<T: TextStorage + ?Sized> TextStorage for &T {
    fn read_text(&self, key: &str) -> StorageResult<String> {
        (**self).read_text(key)
    }

    fn write_text(&self, key: &str, text: &str) -> StorageResult<()> {
        (**self).write_text(key, text)
    }

    fn same_resource(&self, first: &str, second: &str) -> bool {
        (**self).same_resource(first, second)
    }
}
