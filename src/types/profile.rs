use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResult {
    pub title: Option<String>,
    pub url: Option<String>,
    pub snippet: Option<String>,
}

impl ProfileResult {
    pub fn is_linkedin_profile(&self) -> bool {
        self.url
            .as_deref()
            .map(|url| url.contains("linkedin.com/in/"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let profile = ProfileResult {
            title: Some("Jane Doe - Engineer".to_string()),
            url: None,
            snippet: None,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["title"], "Jane Doe - Engineer");
        assert!(json["url"].is_null());
        assert!(json["snippet"].is_null());
    }

    #[test]
    fn test_linkedin_profile_detection() {
        let mut profile = ProfileResult {
            title: None,
            url: Some("https://in.linkedin.com/in/jane-doe".to_string()),
            snippet: None,
        };
        assert!(profile.is_linkedin_profile());

        profile.url = Some("https://www.linkedin.com/company/acme".to_string());
        assert!(!profile.is_linkedin_profile());

        profile.url = None;
        assert!(!profile.is_linkedin_profile());
    }
}
