use anyhow::Result;
use async_trait::async_trait;

use super::{require, Skill, SkillOutput, SkillParameter};
use crate::agents::ProfileSearchAgent;
use crate::config::DEFAULT_LOCATION;
use crate::types::SkillInput;

pub struct LinkedInSkill {
    agent: ProfileSearchAgent,
}

impl LinkedInSkill {
    pub fn new(agent: ProfileSearchAgent) -> Self {
        Self { agent }
    }
}

#[async_trait]
impl Skill for LinkedInSkill {
    fn plugin(&self) -> &str {
        "LinkedInPlugin"
    }

    fn name(&self) -> &str {
        "search_profiles"
    }

    fn description(&self) -> &str {
        "Search LinkedIn profiles for a person at a company"
    }

    fn parameters(&self) -> Vec<SkillParameter> {
        vec![
            SkillParameter::required("name", "Name of the person"),
            SkillParameter::required("company", "Company name"),
            SkillParameter::optional("location", "Location (optional)", DEFAULT_LOCATION),
        ]
    }

    async fn execute(&self, input: &SkillInput) -> Result<SkillOutput> {
        let name = require(self, input, "name")?;
        let company = require(self, input, "company")?;

        let profiles = self
            .agent
            .search_profiles(name, company, input.location.as_deref())
            .await?;

        Ok(SkillOutput::Profiles(profiles))
    }
}
