/// Filesystem adapters for file I/O operations
mod file_storage;
mod read_strategy;

pub use file_storage::FileSystemStorage;
pub use read_strategy::ReadStrategy;
