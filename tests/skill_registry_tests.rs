use std::sync::Arc;

use prospect::providers::article::MockArticleExtractor;
use prospect::providers::llm::MockLLMProvider;
use prospect::providers::search::MockSearchProvider;
use prospect::skills::SkillRegistry;
use prospect::{Config, ProspectError, SkillInput};

fn create_registry(search: Arc<MockSearchProvider>) -> SkillRegistry {
    SkillRegistry::with_providers(
        &Config::default(),
        search,
        Arc::new(MockArticleExtractor::new()),
        Arc::new(MockLLMProvider::new()),
    )
}

#[test]
fn test_descriptors_have_required_fields() {
    let registry = create_registry(Arc::new(MockSearchProvider::new()));
    let descriptors = registry.descriptors();

    assert_eq!(descriptors.len(), 2);

    for descriptor in &descriptors {
        assert!(descriptor.get("plugin").is_some());
        assert!(descriptor.get("name").is_some());
        assert!(descriptor.get("description").is_some());

        let params = descriptor.get("parameters").unwrap();
        assert_eq!(params.get("type").unwrap(), "object");
        assert!(params.get("properties").is_some());
        assert!(params.get("required").is_some());
    }

    // Ordered by qualified name
    assert_eq!(descriptors[0]["plugin"], "LinkedInPlugin");
    assert_eq!(descriptors[1]["plugin"], "NewsPlugin");
}

#[tokio::test]
async fn test_invoke_checks_required_parameters() {
    let search = Arc::new(MockSearchProvider::new());
    let registry = create_registry(search.clone());

    let input = SkillInput {
        name: None,
        company: Some("Acme".to_string()),
        location: None,
    };

    let err = registry
        .invoke("LinkedInPlugin", "search_profiles", &input)
        .await
        .unwrap_err();

    match err.downcast_ref::<ProspectError>() {
        Some(ProspectError::MissingParameter { skill, parameter }) => {
            assert_eq!(skill, "LinkedInPlugin.search_profiles");
            assert_eq!(parameter, "name");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // Rejected before any request went out
    assert!(search.queries().is_empty());
}

#[tokio::test]
async fn test_news_skill_only_needs_company() {
    let search = Arc::new(MockSearchProvider::new());
    let registry = create_registry(search.clone());

    let input = SkillInput {
        name: None,
        company: Some("Acme".to_string()),
        location: None,
    };

    let output = registry
        .invoke("NewsPlugin", "summarize_news", &input)
        .await
        .unwrap();

    let rendered = serde_json::to_string(&output.for_host()).unwrap();
    assert_eq!(rendered, r#"{"summary":"Mock summary","references":[]}"#);
    assert_eq!(search.queries(), vec![("Acme".to_string(), 5)]);
}

#[tokio::test]
async fn test_profile_query_uses_input_location() {
    let search = Arc::new(MockSearchProvider::new());
    let registry = create_registry(search.clone());

    let input = SkillInput::new("Jane Doe", "Acme").with_location("Berlin");
    registry
        .invoke("LinkedInPlugin", "search_profiles", &input)
        .await
        .unwrap();

    let queries = search.queries();
    assert_eq!(
        queries[0].0,
        r#"site:linkedin.com/in "Jane Doe" "Acme" "Berlin""#
    );
    assert_eq!(queries[0].1, 10);
}
