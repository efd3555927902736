/// Shared kernel - error types, result aliases and file security checks
pub mod error;
pub mod result;
pub mod security;

pub use result::{Result, StorageResult};
