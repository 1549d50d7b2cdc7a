use anyhow::{anyhow, Result};
use async_trait::async_trait;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::time::Duration;

#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    /// Downloads `url` and returns the trimmed article body.
    async fn extract(&self, url: &str) -> Result<String>;
}

const NOISE_TAGS: &[&str] = &[
    "head", "script", "style", "noscript", "nav", "header", "footer", "aside", "form", "svg",
    "iframe",
];

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector {}: {:?}", css, e))
}

/// DOM based HTML to text conversion, tuned for news pages.
pub struct HtmlText {
    article: Selector,
    body: Selector,
    paragraph: Selector,
    whitespace: Regex,
}

impl HtmlText {
    pub fn new() -> Result<Self> {
        Ok(Self {
            article: selector("article")?,
            body: selector("body")?,
            paragraph: selector("p")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Article body as paragraphs separated by blank lines. Falls back to the
    /// whole region's text when it holds no `<p>` elements.
    pub fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);

        let region = document
            .select(&self.article)
            .next()
            .or_else(|| document.select(&self.body).next())
            .unwrap_or_else(|| document.root_element());

        let paragraphs: Vec<String> = region
            .select(&self.paragraph)
            .map(|p| self.collapse(&visible_text(p, region, "")))
            .filter(|p| !p.is_empty())
            .collect();

        if paragraphs.is_empty() {
            self.collapse(&visible_text(region, region, " "))
        } else {
            paragraphs.join("\n\n")
        }
    }

    fn collapse(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }
}

/// Text under `element`, skipping anything inside a noise tag below `region`.
fn visible_text(element: ElementRef, region: ElementRef, separator: &str) -> String {
    let mut parts = Vec::new();
    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .take_while(|ancestor| ancestor.id() != region.id())
            .filter_map(ElementRef::wrap)
            .any(|el| NOISE_TAGS.contains(&el.value().name()));
        if !hidden {
            parts.push(&**text);
        }
    }
    parts.join(separator)
}

pub struct HttpArticleExtractor {
    client: reqwest::Client,
    html: HtmlText,
}

impl HttpArticleExtractor {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Mozilla/5.0 (compatible; Prospect/1.0)")
            .build()?;

        Ok(Self {
            client,
            html: HtmlText::new()?,
        })
    }
}

#[async_trait]
impl ArticleExtractor for HttpArticleExtractor {
    async fn extract(&self, url: &str) -> Result<String> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(anyhow!("URL must start with http:// or https://"));
        }

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP {} fetching {}", status, url));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response.text().await?;

        let text = if content_type.is_empty() || content_type.contains("html") {
            self.html.extract(&body)
        } else {
            body.trim().to_string()
        };

        if text.is_empty() {
            return Err(anyhow!("No article content at {}", url));
        }

        Ok(text)
    }
}

/// Extractor backed by a fixed url -> body table. Unknown URLs fail.
#[derive(Default)]
pub struct MockArticleExtractor {
    pages: HashMap<String, Result<String, String>>,
}

impl MockArticleExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_article(mut self, url: &str, content: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(content.to_string()));
        self
    }

    pub fn with_failure(mut self, url: &str, error: &str) -> Self {
        self.pages.insert(url.to_string(), Err(error.to_string()));
        self
    }
}

#[async_trait]
impl ArticleExtractor for MockArticleExtractor {
    async fn extract(&self, url: &str) -> Result<String> {
        match self.pages.get(url) {
            Some(Ok(content)) => Ok(content.trim().to_string()),
            Some(Err(error)) => Err(anyhow!("{}", error)),
            None => Err(anyhow!("Unknown URL: {}", url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prefers_article_paragraphs() {
        let html = r#"
            <html>
                <head><title>Acme News</title></head>
                <body>
                    <nav><p>Home | World | Business</p></nav>
                    <script>console.log('ignore');</script>
                    <article>
                        <h1>Acme raises funding</h1>
                        <p>Acme &amp; partners raised <b>$10M</b>.</p>
                        <p>The round was led by Example Ventures.</p>
                    </article>
                    <footer><p>Copyright 2024</p></footer>
                </body>
            </html>
        "#;

        let text = HtmlText::new().unwrap().extract(html);
        assert_eq!(
            text,
            "Acme & partners raised $10M.\n\nThe round was led by Example Ventures."
        );
    }

    #[test]
    fn test_extract_splits_unclosed_paragraphs() {
        let html = "<html><body><article><p>First paragraph<p>Second <i>one</i></article></body></html>";

        let text = HtmlText::new().unwrap().extract(html);
        assert_eq!(text, "First paragraph\n\nSecond one");
    }

    #[test]
    fn test_extract_skips_noise_inside_region() {
        let html = r#"
            <html><body>
                <aside><p>Related: other story</p></aside>
                <p>Acme opened a new office.<script>track()</script></p>
            </body></html>
        "#;

        let text = HtmlText::new().unwrap().extract(html);
        assert_eq!(text, "Acme opened a new office.");
    }

    #[test]
    fn test_extract_falls_back_to_page_text() {
        let html = r#"
            <html><body>
                <style>.hidden { display: none; }</style>
                <div>Quarterly   results
                were strong.</div>
                <pre>not a paragraph</pre>
            </body></html>
        "#;

        let text = HtmlText::new().unwrap().extract(html);
        assert_eq!(text, "Quarterly results were strong. not a paragraph");
        assert!(!text.contains(".hidden"));
    }

    #[test]
    fn test_extract_empty_page() {
        let text = HtmlText::new()
            .unwrap()
            .extract("<html><head><title>x</title></head><body></body></html>");
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_http_extractor_rejects_non_http() {
        let extractor = HttpArticleExtractor::new(5).unwrap();
        let err = extractor.extract("ftp://example.com/a").await.unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[tokio::test]
    async fn test_mock_extractor() {
        let extractor = MockArticleExtractor::new()
            .with_article("https://a.example.com", "  body  ")
            .with_failure("https://b.example.com", "403 Forbidden");

        assert_eq!(extractor.extract("https://a.example.com").await.unwrap(), "body");
        assert!(extractor.extract("https://b.example.com").await.is_err());
        assert!(extractor.extract("https://c.example.com").await.is_err());
    }
}
