use contracts::seo::SitemapEntry;

/// Escape the five XML-reserved characters for use in text nodes and
/// attribute values.
fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render sitemap-protocol XML with xhtml hreflang alternates.
///
/// `lastmod` is emitted as a plain date; search engines ignore sub-day
/// precision here and the builder only has day resolution for posts anyway.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(entries.len() * 256);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str(
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.format("%Y-%m-%d")
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        if let Some(alternates) = &entry.alternates {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"en\" href=\"{}\"/>\n",
                xml_escape(&alternates.en)
            ));
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"tr\" href=\"{}\"/>\n",
                xml_escape(&alternates.tr)
            ));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use contracts::seo::{ChangeFrequency, LanguageAlternates};

    fn entry(url: &str, alternates: Option<LanguageAlternates>) -> SitemapEntry {
        SitemapEntry {
            url: url.to_string(),
            last_modified: Utc.with_ymd_and_hms(2025, 3, 2, 9, 30, 0).unwrap(),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
            alternates,
        }
    }

    #[test]
    fn renders_url_element_fields() {
        let xml = render_sitemap(&[entry("https://calculator360pro.com/about", None)]);
        assert!(xml.contains("<loc>https://calculator360pro.com/about</loc>"));
        assert!(xml.contains("<lastmod>2025-03-02</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(!xml.contains("xhtml:link"));
    }

    #[test]
    fn renders_hreflang_alternates_when_present() {
        let xml = render_sitemap(&[entry(
            "https://calculator360pro.com/calculators/finance/currency-converter",
            Some(LanguageAlternates {
                en: "https://calculator360pro.com/calculators/finance/currency-converter"
                    .to_string(),
                tr: "https://calculator360pro.com/tr/hesap-makineleri/finans/doviz-cevirici"
                    .to_string(),
            }),
        )]);
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"en\" \
             href=\"https://calculator360pro.com/calculators/finance/currency-converter\"/>"
        ));
        assert!(xml.contains("hreflang=\"tr\""));
    }

    #[test]
    fn escapes_reserved_characters_in_urls() {
        let xml = render_sitemap(&[entry("https://example.com/?a=1&b=2", None)]);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
        assert!(!xml.contains("a=1&b"));
    }

    #[test]
    fn output_is_a_single_urlset_document() {
        let xml = render_sitemap(&[]);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
