use anyhow::Result;
use async_trait::async_trait;

use super::{require, Skill, SkillOutput, SkillParameter};
use crate::agents::{NewsAgent, Summarizer};
use crate::types::{NewsDigest, SkillInput};

/// Scrapes recent news for a company and summarizes it in one call.
pub struct NewsSkill {
    agent: NewsAgent,
    summarizer: Summarizer,
}

impl NewsSkill {
    pub fn new(agent: NewsAgent, summarizer: Summarizer) -> Self {
        Self { agent, summarizer }
    }
}

#[async_trait]
impl Skill for NewsSkill {
    fn plugin(&self) -> &str {
        "NewsPlugin"
    }

    fn name(&self) -> &str {
        "summarize_news"
    }

    fn description(&self) -> &str {
        "Scrape and summarize news for a company"
    }

    fn parameters(&self) -> Vec<SkillParameter> {
        vec![SkillParameter::required("company", "Company name")]
    }

    async fn execute(&self, input: &SkillInput) -> Result<SkillOutput> {
        let company = require(self, input, "company")?;

        let articles = self.agent.get_scraped_news(company).await?;
        let summary = self.summarizer.summarize(&articles).await;
        let references = articles.into_iter().map(|a| a.url).collect();

        Ok(SkillOutput::News(NewsDigest {
            summary,
            references,
        }))
    }
}
