use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::error::ProspectError;

/// One organic web result. SerpApi omits fields freely, so all are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsResult {
    pub title: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub date: Option<String>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>>;
    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<NewsResult>>;
}

#[derive(Debug, Clone)]
pub struct SerpApiProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SearchResult>,
    #[serde(default)]
    news_results: Vec<NewsResult>,
    error: Option<String>,
}

impl SerpApiProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: "https://serpapi.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    // The request URL carries the api_key, so it is stripped from every error
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<SerpApiResponse> {
        let response = self
            .client
            .get(format!("{}/search.json", self.base_url))
            .query(&[("engine", "google"), ("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            return Err(ProspectError::SearchApi { status, body }.into());
        }

        let result: SerpApiResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;

        // SerpApi reports some failures (bad key, exhausted plan) in the body
        if let Some(error) = result.error {
            return Err(ProspectError::SearchApi {
                status: 200,
                body: error,
            }
            .into());
        }

        Ok(result)
    }
}

#[async_trait]
impl SearchProvider for SerpApiProvider {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>> {
        let num = count.to_string();
        let result = self.fetch(&[("q", query), ("num", num.as_str())]).await?;
        log::debug!(
            "Search returned {} organic results",
            result.organic_results.len()
        );
        Ok(result.organic_results)
    }

    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<NewsResult>> {
        let num = count.to_string();
        let result = self
            .fetch(&[("q", query), ("tbm", "nws"), ("num", num.as_str())])
            .await?;
        log::debug!("Search returned {} news results", result.news_results.len());
        Ok(result.news_results)
    }
}

/// Canned search provider. Records every query it receives.
#[derive(Default)]
pub struct MockSearchProvider {
    organic: Vec<SearchResult>,
    news: Vec<NewsResult>,
    fail: bool,
    ignore_count: bool,
    queries: Mutex<Vec<(String, usize)>>,
}

impl MockSearchProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organic(mut self, organic: Vec<SearchResult>) -> Self {
        self.organic = organic;
        self
    }

    pub fn with_news(mut self, news: Vec<NewsResult>) -> Self {
        self.news = news;
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns every canned result regardless of the requested count, like
    /// a backend that does not honor `num`.
    pub fn ignoring_count(mut self) -> Self {
        self.ignore_count = true;
        self
    }

    pub fn queries(&self) -> Vec<(String, usize)> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    fn record(&self, query: &str, count: usize) -> Result<()> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push((query.to_string(), count));
        }
        if self.fail {
            anyhow::bail!("Mock search failure");
        }
        Ok(())
    }

    fn limit(&self, count: usize) -> usize {
        if self.ignore_count {
            usize::MAX
        } else {
            count
        }
    }
}

#[async_trait]
impl SearchProvider for MockSearchProvider {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>> {
        self.record(query, count)?;
        Ok(self.organic.iter().take(self.limit(count)).cloned().collect())
    }

    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<NewsResult>> {
        self.record(query, count)?;
        Ok(self.news.iter().take(self.limit(count)).cloned().collect())
    }
}
