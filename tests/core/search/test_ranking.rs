// Integration tests for search ranking

use crate::common::{create_test_services, hit_refs, TestKnowledgeBase};
use kbseek::core::indexer::tokenize;

const HOUSING_KB: &str = r#"{
  "housing": [
    {"id": "a", "title": {"en": "Housing Contract"}},
    {"id": "b", "title": {"en": "Housing Insurance"}}
  ]
}"#;

#[test]
fn test_housing_scenario() {
    let kb = TestKnowledgeBase::new(HOUSING_KB);
    let services = create_test_services(&kb);

    let hits = services.search.search("housing", "en");
    assert_eq!(hit_refs(&hits), vec!["housing:a", "housing:b"]);

    let hits = services.search.search("contract", "en");
    assert_eq!(hit_refs(&hits), vec!["housing:a"]);
}

#[test]
fn test_more_matched_tokens_rank_higher() {
    let kb = TestKnowledgeBase::new(HOUSING_KB);
    let services = create_test_services(&kb);

    let hits = services.search.search("insurance housing", "en");
    assert_eq!(hit_refs(&hits), vec!["housing:b", "housing:a"]);
    assert_eq!(hits[0].score, 2);
    assert_eq!(hits[1].score, 1);
}

#[test]
fn test_ranking_is_stable() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let first = services.search.search("housing contract room", "en");
    for _ in 0..10 {
        assert_eq!(services.search.search("housing contract room", "en"), first);
    }
}

#[test]
fn test_untokenizable_query_is_empty() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    for query in ["", "   ", "?!", "... --- ...", "👍"] {
        assert!(
            services.search.search(query, "en").is_empty(),
            "query {query:?} should return nothing"
        );
    }
}

#[test]
fn test_every_title_token_finds_its_document() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);
    let snapshot = services.index.snapshot();

    for doc in snapshot.store.documents() {
        for lang in ["fa", "en", "it"] {
            let Some(title) = doc.title.get(lang) else {
                continue;
            };
            for token in tokenize(title) {
                let hits = services.search.search(&token, lang);
                assert!(
                    hits.iter().any(|h| h.doc_ref == doc.doc_ref()),
                    "'{token}' ({lang}) should find {}",
                    doc.doc_ref()
                );
            }
        }
    }
}

#[test]
fn test_hit_carries_snippet() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let hits = services.search.search("insurance", "en");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Housing Insurance");
    assert_eq!(hits[0].snippet, "Insurance for your room.");
}

#[test]
fn test_subsection_content_is_searchable() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let hits = services.search.search("passport", "en");
    assert_eq!(hit_refs(&hits), vec!["housing:contract"]);
}
