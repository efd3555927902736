/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_text_storage;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_text_storage::MockTextStorage;
