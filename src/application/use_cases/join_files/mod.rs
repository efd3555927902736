use crate::application::dto::{JoinRequest, JoinResponse};
use crate::joining::domain::{JoinFailure, JoinStage, Separators};
use crate::joining::services::TextComposer;
use crate::ports::inbound::{FileJoinPort, JoinResult};
use crate::ports::outbound::{ProgressReporter, TextStorage};
use crate::shared::Result;
use std::error::Error;

/// JoinFilesUseCase - reads two resources, joins them and writes a third
///
/// The pipeline runs strictly in order (read-first, read-second, compose,
/// write) and stops at the first failure. Only the write stage touches
/// storage state, so a failed read never produces an output.
///
/// # Type Parameters
/// * `S` - TextStorage implementation
/// * `PR` - ProgressReporter implementation
pub struct JoinFilesUseCase<S, PR> {
    storage: S,
    progress_reporter: PR,
}

impl<S, PR> JoinFilesUseCase<S, PR>
where
    S: TextStorage,
    PR: ProgressReporter,
{
    /// Creates a new JoinFilesUseCase with injected dependencies
    pub fn new(storage: S, progress_reporter: PR) -> Self {
        Self {
            storage,
            progress_reporter,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Executes the join and reports the outcome
    pub fn execute(&self, request: &JoinRequest) -> JoinResult {
        if self.overwrites_input(request) {
            self.progress_reporter.report(&format!(
                "⚠️  Warning: output {} is also an input and will be overwritten",
                request.output_key()
            ));
        }

        let result = self.run_pipeline(request);

        match &result {
            Ok(response) => self
                .progress_reporter
                .report_completion(&format!("✅ Output complete: {}", response.output_key)),
            Err(failure) => self.progress_reporter.report_error(&describe_failure(failure)),
        }

        result
    }

    /// Joins three keys with the default separators
    ///
    /// # Errors
    /// Returns a validation error for empty keys, or the [`JoinFailure`]
    /// of the pipeline.
    pub fn join_keys(&self, first: &str, second: &str, output: &str) -> Result<JoinResponse> {
        let request = JoinRequest::new(first, second, output)?;
        Ok(self.execute(&request)?)
    }

    /// Joins three keys with explicit separators
    pub fn join_keys_with(
        &self,
        first: &str,
        second: &str,
        output: &str,
        separators: Separators,
    ) -> Result<JoinResponse> {
        let request = JoinRequest::new(first, second, output)?.with_separators(separators);
        Ok(self.execute(&request)?)
    }

    /// True when the output names one of the inputs, as judged by the storage
    fn overwrites_input(&self, request: &JoinRequest) -> bool {
        let output = request.output_key();
        self.storage.same_resource(output, request.first_key())
            || self.storage.same_resource(output, request.second_key())
    }

    fn run_pipeline(&self, request: &JoinRequest) -> JoinResult {
        // Step 1: Read the first resource
        self.progress_reporter
            .report_stage(JoinStage::ReadFirst, request.first_key());
        let first = self
            .storage
            .read_text(request.first_key())
            .map_err(|cause| JoinFailure::read_first(request.first_key(), cause))?;

        // Step 2: Read the second resource
        self.progress_reporter
            .report_stage(JoinStage::ReadSecond, request.second_key());
        let second = self
            .storage
            .read_text(request.second_key())
            .map_err(|cause| JoinFailure::read_second(request.second_key(), cause))?;

        // Step 3: Compose
        self.progress_reporter
            .report_stage(JoinStage::Compose, request.output_key());
        let composed = TextComposer::compose(&first, &second, request.separators())?;

        // Step 4: Write
        self.progress_reporter
            .report_stage(JoinStage::Write, request.output_key());
        if let Err(cause) = self.storage.write_text(request.output_key(), &composed) {
            return Err(JoinFailure::Write {
                key: request.output_key().to_string(),
                composed,
                cause,
            });
        }

        Ok(JoinResponse::new(request.output_key().to_string(), composed))
    }
}

/// The failure followed by its chain of causes
fn describe_failure(failure: &JoinFailure) -> String {
    let mut message = format!("❌ {}", failure);
    let mut source = failure.source();
    while let Some(err) = source {
        message.push_str(&format!("\n\nCaused by: {}", err));
        source = err.source();
    }
    message
}

impl<S, PR> FileJoinPort for JoinFilesUseCase<S, PR>
where
    S: TextStorage,
    PR: ProgressReporter,
{
    fn join(&self, request: JoinRequest) -> JoinResult {
        self.execute(&request)
    }
}

#[cfg(test)]
mod tests;
