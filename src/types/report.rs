use serde::{Deserialize, Serialize};

use super::{NewsLink, ProfileResult, SummaryOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedArticle {
    pub url: NewsLink,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDigest {
    pub summary: SummaryOutcome,
    pub references: Vec<NewsLink>,
}

/// Final merged output of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub summary: String,
    pub references: Vec<NewsLink>,
    pub linkedin_profiles: Vec<ProfileResult>,
}

impl Report {
    pub fn new(news: NewsDigest, linkedin_profiles: Vec<ProfileResult>) -> Self {
        Self {
            summary: news.summary.into_text(),
            references: news.references,
            linkedin_profiles,
        }
    }
}
