//! Tests for the current / next / prev commands

use crate::common::{create_test_services, snippet_items, TestKnowledgeBase};
use kbseek::cli::commands::page::{execute, PageArgs};
use kbseek::cli::OutputFormat;
use kbseek::core::pagination::Step;

fn args(user: i64) -> PageArgs {
    PageArgs { user, lang: None }
}

#[tokio::test]
async fn test_next_moves_cursor() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    services.paginator.start(1, snippet_items(3)).await;

    execute(args(1), Some(Step::Forward), &services, OutputFormat::Json)
        .await
        .unwrap();
    let page = services.paginator.get_current(1).await.unwrap();
    assert_eq!(page.position, 2);
}

#[tokio::test]
async fn test_past_the_end_keeps_position() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    services.paginator.start(1, snippet_items(1)).await;

    execute(args(1), Some(Step::Forward), &services, OutputFormat::Human)
        .await
        .unwrap();
    execute(args(1), Some(Step::Back), &services, OutputFormat::Chat)
        .await
        .unwrap();
    let page = services.paginator.get_current(1).await.unwrap();
    assert_eq!((page.position, page.total_count), (1, 1));
}

#[tokio::test]
async fn test_without_session_is_error() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    for step in [None, Some(Step::Forward), Some(Step::Back)] {
        let result = execute(args(2), step, &services, OutputFormat::Human).await;
        assert!(result.is_err());
    }
}
