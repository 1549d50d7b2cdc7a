pub mod outcome;
pub mod profile;
pub mod report;

pub use outcome::{ScrapeOutcome, SummaryOutcome};
pub use profile::ProfileResult;
pub use report::{NewsDigest, Report, ScrapedArticle};

use serde::{Deserialize, Serialize};

pub type NewsLink = String;

/// Parameters for one skill invocation. Each skill reads what it needs and
/// never writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInput {
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
}

impl SkillInput {
    pub fn new(name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            company: Some(company.into()),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn get(&self, parameter: &str) -> Option<&str> {
        match parameter {
            "name" => self.name.as_deref(),
            "company" => self.company.as_deref(),
            "location" => self.location.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_input_lookup() {
        let input = SkillInput::new("Delvin Saji", "Tredence");
        assert_eq!(input.get("name"), Some("Delvin Saji"));
        assert_eq!(input.get("company"), Some("Tredence"));
        assert_eq!(input.get("location"), None);
        assert_eq!(input.get("unknown"), None);

        let input = input.with_location("Bangalore");
        assert_eq!(input.get("location"), Some("Bangalore"));
    }
}
