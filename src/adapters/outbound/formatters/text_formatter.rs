use crate::application::read_models::JoinReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextReportFormatter adapter rendering a human-readable report
///
/// On success the composed text is printed as-is after a status line,
/// so the output can be piped.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, report: &JoinReport) -> Result<String> {
        let mut output = String::new();

        if report.is_success() {
            writeln!(output, "Wrote {}:", report.output)?;
            if let Some(content) = &report.content {
                writeln!(output, "{}", content)?;
            }
            return Ok(output);
        }

        writeln!(output, "Failed to join into {}", report.output)?;
        if let Some(stage) = report.stage {
            writeln!(output, "Stage: {}", stage)?;
        }
        if let Some(error) = &report.error {
            writeln!(output, "Error: {}", error)?;
        }
        if let Some(cause) = &report.cause {
            writeln!(output, "Cause: {}", cause)?;
        }
        if let Some(composed) = &report.composed {
            writeln!(output, "Composed text (not written):")?;
            writeln!(output, "{}", composed)?;
        }
        Ok(output)
    }
}
