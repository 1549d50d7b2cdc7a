use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProspectError {
    #[error("{0} not set. Export it or add it to the config file.")]
    MissingApiKey(&'static str),

    #[error("Skill {skill} requires parameter '{parameter}'")]
    MissingParameter { skill: String, parameter: String },

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Search API error {status}: {body}")]
    SearchApi { status: u16, body: String },

    #[error("Generative API error {status}: {body}")]
    GenerativeApi { status: u16, body: String },

    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: String, reason: String },
}
