use serde::{Deserialize, Serialize};

pub const SUMMARY_FAILED_PREFIX: &str = "Summary failed: ";

/// Result of downloading and extracting one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrapeOutcome {
    Extracted(String),
    Failed(String),
}

impl ScrapeOutcome {
    /// Body text, only when extraction succeeded with non-empty content.
    pub fn content(self) -> Option<String> {
        match self {
            ScrapeOutcome::Extracted(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Result of asking the generative API for a summary.
///
/// A failed summary is a degraded result, not an error: callers must choose
/// how to present it. [`SummaryOutcome::into_text`] renders it the way the
/// report does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOutcome {
    Generated(String),
    Failed(String),
}

impl SummaryOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, SummaryOutcome::Failed(_))
    }

    pub fn into_text(self) -> String {
        match self {
            SummaryOutcome::Generated(text) => text,
            SummaryOutcome::Failed(reason) => format!("{}{}", SUMMARY_FAILED_PREFIX, reason),
        }
    }
}
