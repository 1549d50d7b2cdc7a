use std::sync::Arc;

use crate::providers::llm::{LLMProvider, Message};
use crate::types::{ScrapedArticle, SummaryOutcome};

pub const SUMMARY_PROMPT: &str = "Summarize this news:\n\n";
pub const ARTICLE_SEPARATOR: &str = "\n\n";

pub struct Summarizer {
    llm: Arc<dyn LLMProvider>,
}

impl Summarizer {
    pub fn new(llm: Arc<dyn LLMProvider>) -> Self {
        Self { llm }
    }

    pub fn combine(articles: &[ScrapedArticle]) -> String {
        articles
            .iter()
            .map(|a| a.content.as_str())
            .collect::<Vec<_>>()
            .join(ARTICLE_SEPARATOR)
    }

    pub async fn summarize(&self, articles: &[ScrapedArticle]) -> SummaryOutcome {
        self.summarize_text(&Self::combine(articles)).await
    }

    pub async fn summarize_text(&self, text: &str) -> SummaryOutcome {
        let messages = vec![Message::user(format!("{}{}", SUMMARY_PROMPT, text))];

        match self.llm.complete(messages).await {
            Ok(response) => SummaryOutcome::Generated(response.trim().to_string()),
            Err(e) => {
                log::warn!("Summary failed: {:#}", e);
                SummaryOutcome::Failed(e.to_string())
            }
        }
    }
}
