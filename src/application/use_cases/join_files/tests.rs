use super::*;
use crate::shared::error::StorageError;
use crate::shared::StorageResult;
use std::cell::RefCell;
use std::collections::HashMap;

// Mock implementations for testing
#[derive(Default)]
struct MockStorage {
    entries: RefCell<HashMap<String, String>>,
    calls: RefCell<Vec<String>>,
    write_error: Option<StorageError>,
}

impl MockStorage {
    fn with_entries(entries: &[(&str, &str)]) -> Self {
        let storage = Self::default();
        for (key, value) in entries {
            storage
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
        storage
    }

    fn failing_writes(mut self, error: StorageError) -> Self {
        self.write_error = Some(error);
        self
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

/// Storage where `./key` and `key` name the same entry
struct DotSlashStorage(MockStorage);

impl TextStorage for DotSlashStorage {
    fn read_text(&self, key: &str) -> StorageResult<String> {
        self.0.read_text(key.trim_start_matches("./"))
    }

    fn write_text(&self, key: &str, text: &str) -> StorageResult<()> {
        self.0.write_text(key.trim_start_matches("./"), text)
    }

    fn same_resource(&self, first: &str, second: &str) -> bool {
        first.trim_start_matches("./") == second.trim_start_matches("./")
    }
}

impl TextStorage for MockStorage {
    fn read_text(&self, key: &str) -> StorageResult<String> {
        self.calls.borrow_mut().push(format!("read:{}", key));
        self.get(key).ok_or_else(|| StorageError::NotFound {
            key: key.to_string(),
            details: "no such entry".to_string(),
        })
    }

    fn write_text(&self, key: &str, text: &str) -> StorageResult<()> {
        self.calls.borrow_mut().push(format!("write:{}", key));
        if let Some(error) = &self.write_error {
            return Err(error.clone());
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl MockProgressReporter {
    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_stage(&self, stage: JoinStage, key: &str) {
        self.messages
            .borrow_mut()
            .push(format!("stage:{}:{}", stage, key));
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(format!("error:{}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(format!("done:{}", message));
    }
}

fn hello_world_storage() -> MockStorage {
    MockStorage::with_entries(&[("hello.txt", "Hello"), ("world.txt", "world")])
}

#[test]
fn test_join_default_separators() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());
    let request = JoinRequest::new("hello.txt", "world.txt", "out.txt").unwrap();

    let response = use_case.join(request).unwrap();

    assert_eq!(response.content, "Hello world!");
    assert_eq!(response.output_key, "out.txt");
    assert_eq!(use_case.storage().get("out.txt").as_deref(), Some("Hello world!"));
}

#[test]
fn test_join_custom_separators() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());
    let request = JoinRequest::new("hello.txt", "world.txt", "out.txt")
        .unwrap()
        .with_separators(Separators::new("-", "?"));

    let response = use_case.join(request).unwrap();

    assert_eq!(response.content, "Hello-world?");
}

#[test]
fn test_steps_run_in_order() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());
    let request = JoinRequest::new("hello.txt", "world.txt", "out.txt").unwrap();

    use_case.join(request).unwrap();

    assert_eq!(
        use_case.storage().calls(),
        vec!["read:hello.txt", "read:world.txt", "write:out.txt"]
    );
}

#[test]
fn test_missing_first_stops_before_second_read() {
    let storage = MockStorage::with_entries(&[("world.txt", "world")]);
    let use_case = JoinFilesUseCase::new(storage, MockProgressReporter::default());
    let request = JoinRequest::new("hello.txt", "world.txt", "out.txt").unwrap();

    let failure = use_case.join(request).unwrap_err();

    assert_eq!(failure.stage(), JoinStage::ReadFirst);
    assert!(matches!(
        failure.storage_error(),
        Some(StorageError::NotFound { .. })
    ));
    assert_eq!(use_case.storage().calls(), vec!["read:hello.txt"]);
    assert!(use_case.storage().get("out.txt").is_none());
}

#[test]
fn test_missing_second_leaves_output_untouched() {
    let storage = MockStorage::with_entries(&[("hello.txt", "Hello"), ("out.txt", "previous")]);
    let use_case = JoinFilesUseCase::new(storage, MockProgressReporter::default());
    let request = JoinRequest::new("hello.txt", "world.txt", "out.txt").unwrap();

    let failure = use_case.join(request).unwrap_err();

    assert_eq!(failure.stage(), JoinStage::ReadSecond);
    assert_eq!(failure.key(), Some("world.txt"));
    assert_eq!(use_case.storage().get("out.txt").as_deref(), Some("previous"));
    assert!(!use_case.storage().calls().iter().any(|c| c.starts_with("write")));
}

#[test]
fn test_write_failure_keeps_composed_text() {
    let storage = hello_world_storage().failing_writes(StorageError::PermissionDenied {
        key: "out.txt".to_string(),
        details: "read-only resource".to_string(),
    });
    let use_case = JoinFilesUseCase::new(storage, MockProgressReporter::default());
    let request = JoinRequest::new("hello.txt", "world.txt", "out.txt").unwrap();

    let failure = use_case.join(request).unwrap_err();

    assert_eq!(failure.stage(), JoinStage::Write);
    assert_eq!(failure.composed(), Some("Hello world!"));
    assert_eq!(failure.cause(), "read-only resource");
}

#[test]
fn test_join_is_idempotent() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());

    let first = use_case.join_keys("hello.txt", "world.txt", "out.txt").unwrap();
    let second = use_case.join_keys("hello.txt", "world.txt", "out.txt").unwrap();

    assert_eq!(first, second);
    assert_eq!(use_case.storage().get("out.txt").as_deref(), Some("Hello world!"));
}

#[test]
fn test_join_keys_rejects_empty_key() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());

    let err = use_case.join_keys("", "world.txt", "out.txt").unwrap_err();

    assert!(err.to_string().contains("first key must not be empty"));
    assert!(use_case.storage().calls().is_empty());
}

#[test]
fn test_join_keys_with_separators() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());

    let response = use_case
        .join_keys_with("hello.txt", "world.txt", "out.txt", Separators::new(", ", "."))
        .unwrap();

    assert_eq!(response.content, "Hello, world.");
}

#[test]
fn test_join_keys_failure_downcasts() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());

    let err = use_case.join_keys("missing.txt", "world.txt", "out.txt").unwrap_err();

    let failure = err.downcast_ref::<JoinFailure>().unwrap();
    assert_eq!(failure.stage(), JoinStage::ReadFirst);
}

#[test]
fn test_output_may_overwrite_input() {
    let use_case = JoinFilesUseCase::new(hello_world_storage(), MockProgressReporter::default());

    let response = use_case.join_keys("hello.txt", "world.txt", "hello.txt").unwrap();

    assert_eq!(response.content, "Hello world!");
    assert_eq!(use_case.storage().get("hello.txt").as_deref(), Some("Hello world!"));
}

#[test]
fn test_progress_reports_each_stage() {
    let reporter = MockProgressReporter::default();
    let use_case = JoinFilesUseCase::new(hello_world_storage(), &reporter);

    use_case.join_keys("hello.txt", "world.txt", "out.txt").unwrap();

    assert_eq!(
        reporter.messages(),
        vec![
            "stage:read-first:hello.txt",
            "stage:read-second:world.txt",
            "stage:compose:out.txt",
            "stage:write:out.txt",
            "done:✅ Output complete: out.txt",
        ]
    );
}

#[test]
fn test_progress_reports_failure() {
    let reporter = MockProgressReporter::default();
    let use_case = JoinFilesUseCase::new(MockStorage::default(), &reporter);

    let _ = use_case.join_keys("hello.txt", "world.txt", "out.txt");

    let messages = reporter.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[1]
        .starts_with("error:❌ Join failed at stage read-first: could not read hello.txt"));
    assert!(messages[1].contains("\n\nCaused by: Resource not found: hello.txt"));
}

#[test]
fn test_overwrite_warning_is_reported() {
    let reporter = MockProgressReporter::default();
    let use_case = JoinFilesUseCase::new(hello_world_storage(), &reporter);

    use_case.join_keys("hello.txt", "world.txt", "world.txt").unwrap();

    assert!(reporter.messages()[0].contains("will be overwritten"));
}

#[test]
fn test_overwrite_warning_uses_storage_aliasing() {
    let reporter = MockProgressReporter::default();
    let use_case = JoinFilesUseCase::new(DotSlashStorage(hello_world_storage()), &reporter);

    use_case.join_keys("hello.txt", "world.txt", "./hello.txt").unwrap();

    assert!(reporter.messages()[0].contains("output ./hello.txt is also an input"));
    assert_eq!(use_case.storage().0.get("hello.txt").as_deref(), Some("Hello world!"));
}

#[test]
fn test_no_overwrite_warning_for_distinct_output() {
    let reporter = MockProgressReporter::default();
    let use_case = JoinFilesUseCase::new(hello_world_storage(), &reporter);

    use_case.join_keys("hello.txt", "world.txt", "out.txt").unwrap();

    assert!(!reporter
        .messages()
        .iter()
        .any(|m| m.contains("will be overwritten")));
}
