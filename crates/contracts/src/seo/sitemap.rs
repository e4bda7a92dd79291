use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sitemap-protocol change frequency hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// hreflang alternates for one URL, as absolute URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageAlternates {
    pub en: String,
    pub tr: String,
}

/// One `<url>` element of the sitemap. Derived on every request from the
/// static catalog tables, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternates: Option<LanguageAlternates>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_frequency_serializes_lowercase() {
        let json = serde_json::to_string(&ChangeFrequency::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
        assert_eq!(ChangeFrequency::Weekly.as_str(), "weekly");
    }

    #[test]
    fn alternates_field_is_omitted_when_absent() {
        let entry = SitemapEntry {
            url: "https://calculator360pro.com/about".to_string(),
            last_modified: Utc::now(),
            change_frequency: ChangeFrequency::Yearly,
            priority: 0.3,
            alternates: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("alternates").is_none());
    }
}
