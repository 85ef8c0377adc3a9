// Integration tests for searching in several languages

use crate::common::{create_test_services, hit_refs, TestKnowledgeBase};

#[test]
fn test_persian_query() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let hits = services.search.search("اقامت", "fa");
    assert_eq!(hit_refs(&hits), vec!["visa:7"]);
    assert_eq!(hits[0].title, "اجازه اقامت");
}

#[test]
fn test_italian_query_with_accents() {
    let kb = TestKnowledgeBase::new(
        r#"{"uni": [{"id": "1", "title": {"it": "Università per Stranieri"}}]}"#,
    );
    let services = create_test_services(&kb);

    assert_eq!(services.search.search("UNIVERSITÀ", "it").len(), 1);
    assert_eq!(services.search.search("stranieri?", "it").len(), 1);
}

#[test]
fn test_languages_are_indexed_separately() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    // "contratto" only appears in the Italian fields
    assert_eq!(services.search.search("contratto", "it").len(), 1);
    assert!(services.search.search("contratto", "en").is_empty());
}

#[test]
fn test_title_falls_back_to_default_language() {
    let kb = TestKnowledgeBase::new(
        r#"{"visa": [{"id": "p", "title": {"fa": "اجازه اقامت"}, "description": {"en": "Residence permit"}}]}"#,
    );
    let services = create_test_services(&kb);

    let hits = services.search.search("permit", "en");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "اجازه اقامت");
}

#[test]
fn test_unsupported_language_uses_default() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    assert_eq!(hit_refs(&services.search.search("اقامت", "de")), vec!["visa:7"]);
}

#[test]
fn test_upper_case_language_codes_in_config_file() {
    use kbseek::core::config::Config;
    use kbseek::core::services::Services;
    use kbseek::core::storage::MemoryBackend;
    use std::sync::Arc;

    let kb = TestKnowledgeBase::new(
        r#"{"housing": [{"id": "contract", "title": {"en": "Housing Contract"}}]}"#,
    );
    let config_path = kb.path().join("kbseek.toml");
    std::fs::write(
        &config_path,
        format!(
            "[content]\npath = {:?}\ndefault_language = \"EN\"\nlanguages = [\"EN\"]\n",
            kb.content_file()
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    let services = Services::with_backend(config, Arc::new(MemoryBackend::new())).unwrap();

    let hits = services.search.search("housing", "EN");
    assert_eq!(hit_refs(&hits), vec!["housing:contract"]);

    // unknown language falls back to the default title
    let resolved = services.resolver.resolve("housing", "contract", "fa");
    assert!(resolved.text.starts_with("Housing Contract"));
}

#[test]
fn test_upper_case_language_codes_set_in_code() {
    use kbseek::core::config::Config;
    use kbseek::core::services::Services;
    use kbseek::core::storage::MemoryBackend;
    use std::sync::Arc;

    let kb = TestKnowledgeBase::new(
        r#"{"housing": [{"id": "contract", "title": {"en": "Housing Contract"}}]}"#,
    );
    let mut config = Config::default();
    config.content.path = kb.content_file();
    config.content.languages = vec!["EN".to_string()];
    config.content.default_language = "EN".to_string();

    let services = Services::with_backend(config, Arc::new(MemoryBackend::new())).unwrap();
    assert_eq!(services.search.search("housing", "en").len(), 1);
    assert_eq!(services.config.content.default_language, "en");
}
