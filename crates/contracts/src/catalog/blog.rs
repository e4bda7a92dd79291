use chrono::NaiveDate;
use serde::Serialize;

/// Static metadata for a blog post (content bodies live elsewhere).
///
/// Dates are authored as `YYYY-MM-DD` strings and parsed where needed;
/// `last_modified()` prefers `date_modified` over the publish date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<&'static str>,
}

impl BlogPost {
    /// Parsed modification date, falling back to the publish date.
    /// Returns `None` only for malformed authored data.
    pub fn last_modified(&self) -> Option<NaiveDate> {
        let raw = self.date_modified.unwrap_or(self.date);
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_modified_prefers_date_modified() {
        let post = BlogPost {
            slug: "how-to-calculate-bmi",
            title: "How to Calculate BMI",
            description: "A practical BMI guide.",
            date: "2025-01-10",
            date_modified: Some("2025-03-02"),
        };
        assert_eq!(
            post.last_modified(),
            NaiveDate::from_ymd_opt(2025, 3, 2)
        );
    }

    #[test]
    fn last_modified_falls_back_to_publish_date() {
        let post = BlogPost {
            slug: "post",
            title: "Post",
            description: "Post",
            date: "2025-01-10",
            date_modified: None,
        };
        assert_eq!(post.last_modified(), NaiveDate::from_ymd_opt(2025, 1, 10));
    }
}
