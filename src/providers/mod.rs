pub mod article;
pub mod llm;
pub mod search;

pub use article::{ArticleExtractor, HttpArticleExtractor};
pub use llm::{GeminiProvider, LLMProvider, Message};
pub use search::{SearchProvider, SerpApiProvider};
