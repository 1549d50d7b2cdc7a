use anyhow::Result;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{LinkedInSkill, NewsSkill, Skill, SkillOutput};
use crate::agents::{NewsAgent, ProfileSearchAgent, Summarizer};
use crate::config::{Config, Credentials};
use crate::error::ProspectError;
use crate::providers::article::{ArticleExtractor, HttpArticleExtractor};
use crate::providers::llm::{GeminiProvider, LLMProvider};
use crate::providers::search::{SearchProvider, SerpApiProvider};
use crate::types::SkillInput;

/// Skills keyed by `Plugin.function`.
#[derive(Default)]
pub struct SkillRegistry {
    skills: BTreeMap<String, Box<dyn Skill>>,
}

impl SkillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the live providers once and registers the built-in skills.
    pub fn from_config(config: &Config, credentials: &Credentials) -> Result<Self> {
        let search: Arc<dyn SearchProvider> = Arc::new(
            SerpApiProvider::new(credentials.serpapi_api_key.clone())
                .with_base_url(config.serpapi_base_url.clone()),
        );
        let extractor: Arc<dyn ArticleExtractor> =
            Arc::new(HttpArticleExtractor::new(config.fetch_timeout_secs)?);
        let llm: Arc<dyn LLMProvider> = Arc::new(
            GeminiProvider::new(credentials.google_api_key.clone())
                .with_model(config.gemini_model.clone())
                .with_base_url(config.gemini_base_url.clone()),
        );

        Ok(Self::with_providers(config, search, extractor, llm))
    }

    pub fn with_providers(
        config: &Config,
        search: Arc<dyn SearchProvider>,
        extractor: Arc<dyn ArticleExtractor>,
        llm: Arc<dyn LLMProvider>,
    ) -> Self {
        let mut registry = Self::new();

        let profiles = ProfileSearchAgent::new(search.clone())
            .with_num_results(config.profile_results)
            .with_linkedin_only(config.linkedin_only);
        registry.register(Box::new(LinkedInSkill::new(profiles)));

        let news = NewsAgent::new(search, extractor)
            .with_num_results(config.news_results)
            .with_concurrency(config.scrape_concurrency);
        registry.register(Box::new(NewsSkill::new(news, Summarizer::new(llm))));

        registry
    }

    pub fn register(&mut self, skill: Box<dyn Skill>) {
        self.skills.insert(skill.qualified_name(), skill);
    }

    pub fn get(&self, plugin: &str, function: &str) -> Option<&dyn Skill> {
        self.skills
            .get(&format!("{}.{}", plugin, function))
            .map(|skill| skill.as_ref())
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Function descriptors for an orchestration host, ordered by name.
    pub fn descriptors(&self) -> Vec<Value> {
        self.skills
            .values()
            .map(|skill| {
                json!({
                    "plugin": skill.plugin(),
                    "name": skill.name(),
                    "description": skill.description(),
                    "parameters": skill.parameters_schema(),
                })
            })
            .collect()
    }

    pub async fn invoke(
        &self,
        plugin: &str,
        function: &str,
        input: &SkillInput,
    ) -> Result<SkillOutput> {
        let skill = self
            .get(plugin, function)
            .ok_or_else(|| ProspectError::UnknownSkill(format!("{}.{}", plugin, function)))?;

        for param in skill.parameters().iter().filter(|p| p.required) {
            if input.get(param.name).is_none() {
                return Err(ProspectError::MissingParameter {
                    skill: skill.qualified_name(),
                    parameter: param.name.to_string(),
                }
                .into());
            }
        }

        log::debug!("Invoking {}", skill.qualified_name());
        skill.execute(input).await
    }
}
