//! Tests for the search command

use crate::common::{create_test_services, TestKnowledgeBase};
use kbseek::cli::commands::search::{execute, SearchArgs};
use kbseek::cli::OutputFormat;

fn args(query: &str, user: i64) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        user,
        lang: Some("en".to_string()),
        limit: 10,
    }
}

#[tokio::test]
async fn test_search_starts_session() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    execute(args("housing", 11), &services, OutputFormat::Human)
        .await
        .unwrap();

    let page = services.paginator.get_current(11).await.unwrap();
    assert_eq!((page.position, page.total_count), (1, 2));
}

#[tokio::test]
async fn test_search_json_and_chat_formats() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    for format in [OutputFormat::Json, OutputFormat::Chat] {
        execute(args("contract", 12), &services, format).await.unwrap();
        let page = services.paginator.get_current(12).await.unwrap();
        assert_eq!(page.total_count, 1);
    }
}

#[tokio::test]
async fn test_limit_only_affects_listing() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let mut search = args("housing", 13);
    search.limit = 1;
    execute(search, &services, OutputFormat::Json).await.unwrap();

    let page = services.paginator.get_current(13).await.unwrap();
    assert_eq!(page.total_count, 2);
}

#[tokio::test]
async fn test_empty_query_is_rejected() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let result = execute(args("  ", 14), &services, OutputFormat::Human).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_no_results_clears_previous_session() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    execute(args("housing", 15), &services, OutputFormat::Human)
        .await
        .unwrap();
    execute(args("zzzz", 15), &services, OutputFormat::Human)
        .await
        .unwrap();
    assert!(services.paginator.get_current(15).await.is_none());
}
