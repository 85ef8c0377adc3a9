//! Tests for the show command

use crate::common::{create_test_services, TestKnowledgeBase};
use kbseek::cli::commands::show::{execute, ShowArgs};
use kbseek::cli::{exit_code, OutputFormat};

fn args(doc_ref: &str) -> ShowArgs {
    ShowArgs {
        doc_ref: doc_ref.to_string(),
        lang: Some("it".to_string()),
    }
}

#[tokio::test]
async fn test_show_existing_document() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Chat] {
        execute(args("housing:contract"), &services, format)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_show_unknown_document() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let result = execute(args("housing:nope"), &services, OutputFormat::Human).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("housing:nope"));
    assert_eq!(exit_code(err.as_ref()), 3);
}

#[tokio::test]
async fn test_show_malformed_reference() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let err = execute(args("housing"), &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert_eq!(exit_code(err.as_ref()), 2);
}
