//! Tests for the check command

use crate::common::{create_test_services, TestKnowledgeBase};
use kbseek::cli::commands::check::{execute, CheckArgs};
use kbseek::cli::OutputFormat;

#[tokio::test]
async fn test_check_picks_up_edits() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    assert_eq!(services.index.snapshot().store.len(), 3);

    kb.rewrite(r#"{"faq": [{"id": "hours", "title": {"en": "Office hours"}}]}"#);
    execute(CheckArgs {}, &services, OutputFormat::Json)
        .await
        .unwrap();

    let snapshot = services.index.snapshot();
    assert_eq!(snapshot.store.categories(), ["faq".to_string()]);
}

#[tokio::test]
async fn test_check_fails_on_corrupt_file_and_keeps_index() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    kb.rewrite("{ not json");
    let result = execute(CheckArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_err());
    assert_eq!(services.index.snapshot().store.len(), 3);
}
