use crate::joining::domain::JoinStage;

/// ProgressReporter port for reporting progress during a join
///
/// This port abstracts user feedback (e.g., to stderr) so it never
/// interferes with the report written to stdout.
pub trait ProgressReporter {
    /// Reports a free-form progress or warning message
    fn report(&self, message: &str);

    /// Reports that `stage` is starting on the resource `key`
    fn report_stage(&self, stage: JoinStage, key: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of the join
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_stage(&self, stage: JoinStage, key: &str) {
        (**self).report_stage(stage, key)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
