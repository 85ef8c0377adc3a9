//! Tests for the browse command

use crate::common::{create_test_services, TestKnowledgeBase};
use kbseek::cli::commands::browse::{execute, BrowseArgs};
use kbseek::cli::OutputFormat;

#[tokio::test]
async fn test_browse_categories_and_items() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Chat] {
        let all = BrowseArgs {
            category: None,
            lang: None,
        };
        execute(all, &services, format).await.unwrap();

        let housing = BrowseArgs {
            category: Some("housing".to_string()),
            lang: Some("en".to_string()),
        };
        execute(housing, &services, format).await.unwrap();
    }
}

#[tokio::test]
async fn test_browse_unknown_category() {
    let kb = TestKnowledgeBase::student();
    let services = create_test_services(&kb);

    let args = BrowseArgs {
        category: Some("broken".to_string()),
        lang: None,
    };
    assert!(execute(args, &services, OutputFormat::Human).await.is_err());
}
