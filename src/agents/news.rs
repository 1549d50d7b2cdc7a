use anyhow::Result;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::providers::article::ArticleExtractor;
use crate::providers::search::SearchProvider;
use crate::types::{NewsLink, ScrapeOutcome, ScrapedArticle};

pub struct NewsAgent {
    search: Arc<dyn SearchProvider>,
    extractor: Arc<dyn ArticleExtractor>,
    num_results: usize,
    concurrency: usize,
}

impl NewsAgent {
    pub fn new(search: Arc<dyn SearchProvider>, extractor: Arc<dyn ArticleExtractor>) -> Self {
        Self {
            search,
            extractor,
            num_results: 5,
            concurrency: 1,
        }
    }

    pub fn with_num_results(mut self, num_results: usize) -> Self {
        self.num_results = num_results;
        self
    }

    /// Number of articles downloaded at once. Output order never changes.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn search_news_links(
        &self,
        company: &str,
        num_results: usize,
    ) -> Result<Vec<NewsLink>> {
        let results = self.search.search_news(company, num_results).await?;

        Ok(results
            .into_iter()
            .filter_map(|r| r.link)
            .take(num_results)
            .collect())
    }

    pub async fn scrape_article(&self, url: &str) -> ScrapeOutcome {
        match self.extractor.extract(url).await {
            Ok(text) => ScrapeOutcome::Extracted(text.trim().to_string()),
            Err(e) => ScrapeOutcome::Failed(e.to_string()),
        }
    }

    pub async fn get_scraped_news(&self, company: &str) -> Result<Vec<ScrapedArticle>> {
        let links = self.search_news_links(company, self.num_results).await?;
        log::info!("Found {} news links for {}", links.len(), company);

        // `buffered` yields in input order regardless of completion order
        let outcomes: Vec<(NewsLink, ScrapeOutcome)> = stream::iter(links)
            .map(|link| async move {
                let outcome = self.scrape_article(&link).await;
                (link, outcome)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut articles = Vec::with_capacity(outcomes.len());
        for (url, outcome) in outcomes {
            match outcome {
                ScrapeOutcome::Failed(reason) => {
                    log::warn!("Skipping {}: {}", url, reason);
                }
                outcome => match outcome.content() {
                    Some(content) => articles.push(ScrapedArticle { url, content }),
                    None => log::warn!("Skipping {}: empty article", url),
                },
            }
        }

        log::info!("Scraped {} articles", articles.len());
        Ok(articles)
    }
}
