pub mod agents;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod providers;
pub mod skills;
pub mod types;

pub use config::Config;
pub use error::ProspectError;
pub use pipeline::Pipeline;
pub use types::*;
