//! text-joiner - join two text resources into a third
//!
//! Reads two named text resources, concatenates their contents with a
//! separator and a suffix, and writes the result to a third resource.
//! Every failure is returned as a value tagged with the pipeline stage it
//! came from (`read-first`, `read-second`, `compose`, `write`), and the
//! output is never written unless both reads succeeded.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`joining`): stages, failures and the pure compose step
//! - **Application Layer** (`application`): the join use case, DTOs and read models
//! - **Ports** (`ports`): interface definitions for storage, progress and formatting
//! - **Adapters** (`adapters`): filesystem and in-memory storage, console, formatters
//! - **Shared** (`shared`): common error types and security checks
//!
//! # Example
//!
//! ```
//! use text_joiner::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let storage = InMemoryStorage::new()
//!     .with_text("hello.txt", "Hello")
//!     .with_text("world.txt", "world");
//! let use_case = JoinFilesUseCase::new(storage, QuietProgressReporter::new());
//!
//! let request = JoinRequest::new("hello.txt", "world.txt", "hello-world.txt")?;
//! let response = use_case.join(request)?;
//!
//! assert_eq!(response.content, "Hello world!");
//! assert_eq!(use_case.storage().get("hello-world.txt").as_deref(), Some("Hello world!"));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod joining;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemStorage, ReadStrategy};
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, TextReportFormatter};
    pub use crate::adapters::outbound::memory::InMemoryStorage;
    pub use crate::application::dto::{JoinRequest, JoinResponse, OutputFormat};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{JoinReport, JoinStatus};
    pub use crate::application::use_cases::JoinFilesUseCase;
    pub use crate::joining::domain::{JoinFailure, JoinStage, ResourceKey, Separators};
    pub use crate::joining::services::TextComposer;
    pub use crate::ports::inbound::{FileJoinPort, JoinResult};
    pub use crate::ports::outbound::{ProgressReporter, ReportFormatter, TextStorage};
    pub use crate::shared::error::{ExitCode, JoinerError, StorageError};
    pub use crate::shared::{Result, StorageResult};
}
