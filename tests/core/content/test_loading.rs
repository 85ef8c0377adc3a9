// Integration tests for knowledge file loading

use crate::common::{create_test_services, TestKnowledgeBase};
use kbseek::core::content::{ContentStore, DocumentRef};

#[test]
fn test_malformed_entries_are_skipped() {
    let kb = TestKnowledgeBase::student();
    let store = ContentStore::load(&kb.content_file(), "fa").unwrap();

    // "broken" is not a list and the id-less visa item is dropped
    assert_eq!(store.categories(), &["housing".to_string(), "visa".to_string()]);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_numeric_id_and_plain_description() {
    let kb = TestKnowledgeBase::student();
    let store = ContentStore::load(&kb.content_file(), "fa").unwrap();

    let doc = store
        .get_ref(&DocumentRef::parse("visa:7").unwrap())
        .expect("numeric id should be kept as text");
    assert_eq!(
        doc.description.get("fa").map(String::as_str),
        Some("مراحل دریافت اجازه اقامت")
    );
}

#[test]
fn test_missing_file_gives_empty_services() {
    let kb = TestKnowledgeBase::new("{}");
    std::fs::remove_file(kb.content_file()).unwrap();

    let services = create_test_services(&kb);
    assert!(services.index.snapshot().is_empty());
    assert!(services.search.search("housing", "en").is_empty());
}

#[test]
fn test_corrupt_file_gives_empty_services() {
    let kb = TestKnowledgeBase::new("{ this is not json");
    let services = create_test_services(&kb);
    assert!(services.search.search("housing", "en").is_empty());
}

#[test]
fn test_category_items_in_file_order() {
    let kb = TestKnowledgeBase::student();
    let store = ContentStore::load(&kb.content_file(), "fa").unwrap();

    let items = store.category_items("housing", "it", "fa");
    let titles: Vec<&str> = items.iter().map(|e| e.title.as_str()).collect();
    // insurance has no "it" or "fa" title
    assert_eq!(titles, vec!["Contratto di affitto", ""]);
    assert_eq!(items[1].doc_ref.as_str(), "housing:insurance");
}
