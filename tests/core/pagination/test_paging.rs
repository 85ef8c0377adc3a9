// Integration tests for result paging

use crate::common::{create_file_services, create_test_services, snippet_items, TestKnowledgeBase};
use kbseek::core::pagination::Step;
use kbseek::core::types::{Page, SessionItem};

fn shape(page: &Option<Page>) -> Option<(usize, usize)> {
    page.as_ref().map(|p| (p.position, p.total_count))
}

fn text(page: &Option<Page>) -> Option<String> {
    match page.as_ref().map(|p| &p.item) {
        Some(SessionItem::Snippet { text }) => Some(text.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn test_three_result_walkthrough() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    let paginator = &services.paginator;

    paginator.start(1, snippet_items(3)).await;

    let current = paginator.get_current(1).await;
    assert_eq!(shape(&current), Some((1, 3)));
    assert_eq!(text(&current).as_deref(), Some("r1"));

    assert_eq!(shape(&paginator.advance(1, Step::Forward).await), Some((2, 3)));
    let last = paginator.advance(1, Step::Forward).await;
    assert_eq!(shape(&last), Some((3, 3)));
    assert_eq!(text(&last).as_deref(), Some("r3"));

    assert!(paginator.advance(1, Step::Forward).await.is_none());
    assert_eq!(shape(&paginator.get_current(1).await), Some((3, 3)));
}

#[tokio::test]
async fn test_forward_then_back_returns_to_first() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    let paginator = &services.paginator;

    for n in 1..=6 {
        paginator.start(7, snippet_items(n)).await;
        for _ in 0..n - 1 {
            assert!(paginator.next(7).await.is_some());
        }
        for _ in 0..n - 1 {
            assert!(paginator.previous(7).await.is_some());
        }
        assert_eq!(shape(&paginator.get_current(7).await), Some((1, n)));
    }
}

#[tokio::test]
async fn test_back_at_first_page_leaves_cursor() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    let paginator = &services.paginator;

    paginator.start(1, snippet_items(2)).await;
    assert!(paginator.previous(1).await.is_none());
    assert!(paginator.previous(1).await.is_none());
    assert_eq!(shape(&paginator.get_current(1).await), Some((1, 2)));
    assert_eq!(shape(&paginator.next(1).await), Some((2, 2)));
}

#[tokio::test]
async fn test_new_search_replaces_session() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    let paginator = &services.paginator;

    paginator.start(1, snippet_items(3)).await;
    paginator.next(1).await;
    paginator.next(1).await;

    let hits = services.search.search("housing", "en");
    let items = hits.into_iter().map(SessionItem::from).collect();
    let first = paginator.start(1, items).await;
    assert_eq!(shape(&first), Some((1, 2)));
    assert_eq!(
        first.unwrap().item.doc_ref().map(|r| r.as_str()),
        Some("housing:contract")
    );
}

#[tokio::test]
async fn test_no_session_is_none() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    let paginator = &services.paginator;

    assert!(paginator.get_current(99).await.is_none());
    assert!(paginator.next(99).await.is_none());
    assert!(paginator.previous(99).await.is_none());
}

#[tokio::test]
async fn test_paging_across_service_instances() {
    let kb = TestKnowledgeBase::student();

    // each instance stands in for a separate process
    create_file_services(&kb)
        .paginator
        .start(3, snippet_items(3))
        .await;
    let page = create_file_services(&kb).paginator.next(3).await;
    assert_eq!(shape(&page), Some((2, 3)));

    let current = create_file_services(&kb).paginator.get_current(3).await;
    assert_eq!(text(&current).as_deref(), Some("r2"));
}

#[tokio::test(start_paused = true)]
async fn test_session_expires_without_access() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    let paginator = &services.paginator;
    let ttl = services.config.session.ttl();

    paginator.start(1, snippet_items(2)).await;
    tokio::time::advance(ttl / 2).await;
    assert!(paginator.next(1).await.is_some());
    tokio::time::advance(ttl / 2 + ttl / 4).await;
    // refreshed by the move above
    assert!(paginator.get_current(1).await.is_some());

    tokio::time::advance(ttl * 2).await;
    assert!(paginator.get_current(1).await.is_none());
}
