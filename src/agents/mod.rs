pub mod news;
pub mod profile;
pub mod summarizer;

pub use news::NewsAgent;
pub use profile::ProfileSearchAgent;
pub use summarizer::Summarizer;
