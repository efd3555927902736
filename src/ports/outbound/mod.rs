/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (storage, console, output rendering).
pub mod progress_reporter;
pub mod report_formatter;
pub mod text_storage;

pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use text_storage::TextStorage;
