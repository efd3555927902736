/// In-memory adapters, used by tests and embedding callers
mod in_memory_storage;

pub use in_memory_storage::InMemoryStorage;
