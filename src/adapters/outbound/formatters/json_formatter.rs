use crate::application::read_models::JoinReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonReportFormatter adapter rendering the report as pretty-printed JSON
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &JoinReport) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(report).context("Failed to serialize join report")?;
        json.push('\n');
        Ok(json)
    }
}
