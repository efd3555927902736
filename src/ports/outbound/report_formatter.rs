use crate::application::read_models::JoinReport;
use crate::shared::Result;

/// ReportFormatter port for rendering the outcome of a join
pub trait ReportFormatter {
    /// Formats the report as a string ready to be printed
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &JoinReport) -> Result<String>;
}
