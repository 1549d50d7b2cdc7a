use anyhow::Result;

use crate::skills::SkillRegistry;
use crate::types::{Report, SkillInput};

pub const PROFILE_SKILL: (&str, &str) = ("LinkedInPlugin", "search_profiles");
pub const NEWS_SKILL: (&str, &str) = ("NewsPlugin", "summarize_news");

/// Runs profile search, then the news digest, and merges both into a report.
pub struct Pipeline {
    registry: SkillRegistry,
}

impl Pipeline {
    pub fn new(registry: SkillRegistry) -> Self {
        Self { registry }
    }

    pub async fn run(&self, input: &SkillInput) -> Result<Report> {
        let (plugin, function) = PROFILE_SKILL;
        let profiles = self
            .registry
            .invoke(plugin, function, input)
            .await?
            .into_profiles()?;

        let (plugin, function) = NEWS_SKILL;
        let news = self
            .registry
            .invoke(plugin, function, input)
            .await?
            .into_news()?;

        if news.summary.is_failed() {
            log::warn!("Report carries a failed summary");
        }

        Ok(Report::new(news, profiles))
    }
}
