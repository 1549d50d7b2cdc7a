use anyhow::Result;
use std::sync::Arc;

use crate::config::DEFAULT_LOCATION;
use crate::providers::search::SearchProvider;
use crate::types::ProfileResult;

pub const MAX_PROFILES: usize = 3;

pub struct ProfileSearchAgent {
    provider: Arc<dyn SearchProvider>,
    num_results: usize,
    linkedin_only: bool,
}

impl ProfileSearchAgent {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            num_results: 10,
            linkedin_only: false,
        }
    }

    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Keep only `linkedin.com/in/` URLs before truncating.
    pub fn with_linkedin_only(mut self, linkedin_only: bool) -> Self {
        self.linkedin_only = linkedin_only;
        self
    }

    pub fn build_query(name: &str, company: &str, location: &str) -> String {
        format!(
            "site:linkedin.com/in \"{}\" \"{}\" \"{}\"",
            name, company, location
        )
    }

    pub async fn search_profiles(
        &self,
        name: &str,
        company: &str,
        location: Option<&str>,
    ) -> Result<Vec<ProfileResult>> {
        let query = Self::build_query(name, company, location.unwrap_or(DEFAULT_LOCATION));
        log::info!("Searching profiles: {}", query);

        let results = self.provider.search(&query, self.num_results).await?;

        let profiles: Vec<ProfileResult> = results
            .into_iter()
            .map(|r| ProfileResult {
                title: r.title,
                url: r.link,
                snippet: r.snippet,
            })
            .filter(|p| !self.linkedin_only || p.is_linkedin_profile())
            .take(MAX_PROFILES)
            .collect();

        log::info!("Found {} profiles", profiles.len());
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::search::{MockSearchProvider, SearchResult};

    fn organic(n: usize) -> Vec<SearchResult> {
        (1..=n)
            .map(|i| SearchResult {
                title: Some(format!("Person {}", i)),
                link: Some(format!("https://www.linkedin.com/in/person-{}", i)),
                snippet: Some(format!("Snippet {}", i)),
            })
            .collect()
    }

    #[test]
    fn test_build_query() {
        let query = ProfileSearchAgent::build_query("Delvin Saji", "Tredence", "India");
        assert_eq!(
            query,
            r#"site:linkedin.com/in "Delvin Saji" "Tredence" "India""#
        );
    }

    #[tokio::test]
    async fn test_default_location_and_result_count() {
        let provider = Arc::new(MockSearchProvider::new().with_organic(organic(1)));
        let agent = ProfileSearchAgent::new(provider.clone());

        agent.search_profiles("Jane", "Acme", None).await.unwrap();

        let queries = provider.queries();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].0.ends_with("\"India\""));
        assert_eq!(queries[0].1, 10);
    }

    #[tokio::test]
    async fn test_truncates_to_three() {
        let provider = Arc::new(MockSearchProvider::new().with_organic(organic(8)));
        let agent = ProfileSearchAgent::new(provider);

        let profiles = agent
            .search_profiles("Jane", "Acme", Some("Berlin"))
            .await
            .unwrap();

        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].title.as_deref(), Some("Person 1"));
        assert_eq!(profiles[2].title.as_deref(), Some("Person 3"));
    }

    #[tokio::test]
    async fn test_missing_fields_stay_absent() {
        let provider = Arc::new(MockSearchProvider::new().with_organic(vec![SearchResult {
            title: Some("Only a title".to_string()),
            link: None,
            snippet: None,
        }]));
        let agent = ProfileSearchAgent::new(provider);

        let profiles = agent.search_profiles("Jane", "Acme", None).await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert!(profiles[0].url.is_none());
        assert!(profiles[0].snippet.is_none());
    }

    #[tokio::test]
    async fn test_linkedin_only_filter() {
        let mut results = organic(2);
        results.insert(
            0,
            SearchResult {
                title: Some("Acme company page".to_string()),
                link: Some("https://www.linkedin.com/company/acme".to_string()),
                snippet: None,
            },
        );

        let provider = Arc::new(MockSearchProvider::new().with_organic(results));
        let unfiltered = ProfileSearchAgent::new(provider.clone());
        let filtered = ProfileSearchAgent::new(provider).with_linkedin_only(true);

        assert_eq!(
            unfiltered.search_profiles("Jane", "Acme", None).await.unwrap().len(),
            3
        );

        let profiles = filtered.search_profiles("Jane", "Acme", None).await.unwrap();
        assert_eq!(profiles.len(), 2);
        assert!(profiles.iter().all(|p| p.is_linkedin_profile()));
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let agent = ProfileSearchAgent::new(Arc::new(MockSearchProvider::failing()));
        assert!(agent.search_profiles("Jane", "Acme", None).await.is_err());
    }
}
