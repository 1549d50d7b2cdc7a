pub mod linkedin;
pub mod news;
pub mod runtime;

pub use linkedin::LinkedInSkill;
pub use news::NewsSkill;
pub use runtime::SkillRegistry;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::ProspectError;
use crate::types::{NewsDigest, NewsLink, ProfileResult, SkillInput};

#[derive(Debug, Clone, Serialize)]
pub struct SkillParameter {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl SkillParameter {
    pub fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &'static str, description: &'static str, default: &str) -> Self {
        Self {
            name,
            description,
            required: false,
            default: Some(default.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillOutput {
    Profiles(Vec<ProfileResult>),
    News(NewsDigest),
}

impl SkillOutput {
    pub fn into_profiles(self) -> Result<Vec<ProfileResult>> {
        match self {
            SkillOutput::Profiles(profiles) => Ok(profiles),
            other => Err(anyhow!("Expected profiles, got {:?}", other)),
        }
    }

    pub fn into_news(self) -> Result<NewsDigest> {
        match self {
            SkillOutput::News(digest) => Ok(digest),
            other => Err(anyhow!("Expected news digest, got {:?}", other)),
        }
    }

    /// Plain view for a host: a list of profiles, or `{summary, references}`
    /// with fields in the same order as the merged report.
    pub fn for_host(&self) -> HostOutput<'_> {
        match self {
            SkillOutput::Profiles(profiles) => HostOutput::Profiles(profiles),
            SkillOutput::News(digest) => HostOutput::News {
                summary: digest.summary.clone().into_text(),
                references: &digest.references,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HostOutput<'a> {
    Profiles(&'a [ProfileResult]),
    News {
        summary: String,
        references: &'a [NewsLink],
    },
}

#[async_trait]
pub trait Skill: Send + Sync {
    fn plugin(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> Vec<SkillParameter>;

    async fn execute(&self, input: &SkillInput) -> Result<SkillOutput>;

    fn qualified_name(&self) -> String {
        format!("{}.{}", self.plugin(), self.name())
    }

    fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.parameters() {
            let mut property = json!({
                "type": "string",
                "description": param.description,
            });
            if let Some(default) = &param.default {
                property["default"] = json!(default);
            }
            if param.required {
                required.push(param.name);
            }
            properties.insert(param.name.to_string(), property);
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Reads a required parameter, naming the skill in the error.
pub fn require<'a>(
    skill: &dyn Skill,
    input: &'a SkillInput,
    parameter: &str,
) -> Result<&'a str, ProspectError> {
    input
        .get(parameter)
        .ok_or_else(|| ProspectError::MissingParameter {
            skill: skill.qualified_name(),
            parameter: parameter.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SummaryOutcome;

    #[test]
    fn test_news_output_for_host() {
        let output = SkillOutput::News(NewsDigest {
            summary: SummaryOutcome::Failed("timeout".to_string()),
            references: vec!["https://a.example.com".to_string()],
        });

        let rendered = serde_json::to_string(&output.for_host()).unwrap();
        assert_eq!(
            rendered,
            r#"{"summary":"Summary failed: timeout","references":["https://a.example.com"]}"#
        );
    }

    #[test]
    fn test_profiles_output_for_host() {
        let output = SkillOutput::Profiles(vec![ProfileResult {
            title: Some("Jane Doe".to_string()),
            url: Some("https://linkedin.com/in/jane".to_string()),
            snippet: None,
        }]);

        let value = serde_json::to_value(output.for_host()).unwrap();
        assert_eq!(value[0]["url"], "https://linkedin.com/in/jane");
    }

    #[test]
    fn test_output_variant_mismatch() {
        let output = SkillOutput::Profiles(vec![]);
        assert!(output.clone().into_news().is_err());
        assert!(output.into_profiles().unwrap().is_empty());
    }
}
