use crate::joining::domain::JoinStage;
use crate::ports::inbound::JoinResult;
use chrono::Utc;
use serde::Serialize;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStatus {
    Success,
    Failure,
}

/// JoinReport - read model describing the outcome of one join
///
/// Formatters render this model; it carries everything a caller might want
/// to print, including the composed text of a failed write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    pub status: JoinStatus,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<JoinStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composed: Option<String>,
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

impl JoinReport {
    /// Builds a report for `result`, stamped with the current time
    pub fn from_result(result: &JoinResult, output_key: &str) -> Self {
        Self::from_result_at(result, output_key, Utc::now().to_rfc3339())
    }

    /// Builds a report with an explicit timestamp
    pub fn from_result_at(result: &JoinResult, output_key: &str, generated_at: String) -> Self {
        let mut report = Self {
            status: JoinStatus::Success,
            output: output_key.to_string(),
            content: None,
            stage: None,
            error: None,
            error_kind: None,
            cause: None,
            composed: None,
            generated_at,
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
        };

        match result {
            Ok(response) => {
                report.output = response.output_key.clone();
                report.content = Some(response.content.clone());
            }
            Err(failure) => {
                report.status = JoinStatus::Failure;
                report.stage = Some(failure.stage());
                report.error = Some(failure.to_string());
                report.error_kind = failure
                    .storage_error()
                    .map(|e| e.kind_name().to_string());
                report.cause = Some(failure.cause());
                report.composed = failure.composed().map(str::to_string);
            }
        }

        report
    }

    pub fn is_success(&self) -> bool {
        self.status == JoinStatus::Success
    }
}
