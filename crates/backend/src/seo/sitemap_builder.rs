use chrono::{DateTime, NaiveTime, Utc};
use contracts::catalog::CalculatorCategory;
use contracts::seo::{ChangeFrequency, LanguageAlternates, SitemapEntry};

use crate::content::{blog, calculators, pages};
use crate::seo::locale_map;

/// Join a site-relative path onto the base URL. The home path maps to the
/// bare base URL, everything else is a plain concatenation.
pub fn absolute_url(site_url: &str, path: &str) -> String {
    if path == "/" {
        site_url.to_string()
    } else {
        format!("{site_url}{path}")
    }
}

fn alternates_for(site_url: &str, en_path: &str, tr_path: &str) -> LanguageAlternates {
    LanguageAlternates {
        en: absolute_url(site_url, en_path),
        tr: absolute_url(site_url, tr_path),
    }
}

/// Entry for an English page; alternates are attached only when the path has
/// a Turkish counterpart in the mapping table.
fn en_entry(
    site_url: &str,
    en_path: &str,
    last_modified: DateTime<Utc>,
    change_frequency: ChangeFrequency,
    priority: f32,
) -> SitemapEntry {
    SitemapEntry {
        url: absolute_url(site_url, en_path),
        last_modified,
        change_frequency,
        priority,
        alternates: locale_map::turkish_path(en_path)
            .map(|tr| alternates_for(site_url, en_path, tr)),
    }
}

/// Entry for a Turkish page, resolved through the reverse mapping
fn tr_entry(
    site_url: &str,
    tr_path: &str,
    last_modified: DateTime<Utc>,
    change_frequency: ChangeFrequency,
    priority: f32,
) -> SitemapEntry {
    SitemapEntry {
        url: absolute_url(site_url, tr_path),
        last_modified,
        change_frequency,
        priority,
        alternates: locale_map::english_path(tr_path)
            .map(|en| alternates_for(site_url, en, tr_path)),
    }
}

fn post_date(post: &contracts::catalog::BlogPost, now: DateTime<Utc>) -> DateTime<Utc> {
    post.last_modified()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or(now)
}

/// Build the full, deterministically ordered sitemap: base URLs, category
/// pages (EN then TR), calculator pages (EN then TR), blog posts (EN then
/// TR), static/legal pages, guide pages.
///
/// Everything except blog posts uses `now` as `lastmod`; per-page freshness
/// for static pages is not tracked. The sitemap-protocol 50,000-entry limit
/// is not checked; the catalog is orders of magnitude below it.
pub fn build_sitemap_entries(site_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();

    // Base URLs
    entries.push(en_entry(site_url, "/", now, ChangeFrequency::Daily, 1.0));
    entries.push(en_entry(
        site_url,
        "/calculators",
        now,
        ChangeFrequency::Weekly,
        0.9,
    ));
    entries.push(en_entry(site_url, "/blog", now, ChangeFrequency::Daily, 0.7));
    entries.push(tr_entry(site_url, "/tr", now, ChangeFrequency::Daily, 1.0));
    entries.push(tr_entry(
        site_url,
        "/tr/hesap-makineleri",
        now,
        ChangeFrequency::Weekly,
        0.9,
    ));
    entries.push(tr_entry(
        site_url,
        "/tr/blog",
        now,
        ChangeFrequency::Daily,
        0.7,
    ));

    // Category pages, EN then TR
    for category in CalculatorCategory::all() {
        let path = format!("/calculators/{}", category.slug());
        entries.push(en_entry(
            site_url,
            &path,
            now,
            ChangeFrequency::Weekly,
            0.9,
        ));
    }
    for category in CalculatorCategory::all() {
        let path = format!("/tr/hesap-makineleri/{}", category.slug_tr());
        entries.push(tr_entry(
            site_url,
            &path,
            now,
            ChangeFrequency::Weekly,
            0.9,
        ));
    }

    // Calculator pages, EN then TR. Turkish pages exist exactly where the
    // mapping table has a pair for the English page.
    for calc in calculators::all_calculators() {
        entries.push(en_entry(
            site_url,
            &calc.path(),
            now,
            ChangeFrequency::Weekly,
            0.8,
        ));
    }
    for calc in calculators::all_calculators() {
        if let Some(tr_path) = locale_map::turkish_path(&calc.path()) {
            entries.push(tr_entry(
                site_url,
                tr_path,
                now,
                ChangeFrequency::Weekly,
                0.8,
            ));
        }
    }

    // Blog posts, EN then TR, dated from the post metadata
    for post in blog::all_blog_posts() {
        entries.push(en_entry(
            site_url,
            &format!("/blog/{}", post.slug),
            post_date(post, now),
            ChangeFrequency::Monthly,
            0.7,
        ));
    }
    for post in blog::all_blog_posts_tr() {
        entries.push(tr_entry(
            site_url,
            &format!("/tr/blog/{}", post.slug),
            post_date(post, now),
            ChangeFrequency::Monthly,
            0.7,
        ));
    }

    // Static/legal pages, EN page followed by its Turkish counterpart
    for en_path in pages::LEGAL_PAGES {
        entries.push(en_entry(
            site_url,
            en_path,
            now,
            ChangeFrequency::Yearly,
            0.3,
        ));
        if let Some(tr_path) = locale_map::turkish_path(en_path) {
            entries.push(tr_entry(
                site_url,
                tr_path,
                now,
                ChangeFrequency::Yearly,
                0.3,
            ));
        }
    }

    // Guide pages
    for en_path in pages::GUIDE_PAGES {
        entries.push(en_entry(
            site_url,
            en_path,
            now,
            ChangeFrequency::Monthly,
            0.8,
        ));
        if let Some(tr_path) = locale_map::turkish_path(en_path) {
            entries.push(tr_entry(
                site_url,
                tr_path,
                now,
                ChangeFrequency::Monthly,
                0.8,
            ));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SITE: &str = "https://calculator360pro.com";

    fn entries() -> Vec<SitemapEntry> {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        build_sitemap_entries(SITE, now)
    }

    #[test]
    fn every_calculator_has_exactly_one_english_entry() {
        let entries = entries();
        for calc in calculators::all_calculators() {
            let url = format!(
                "{SITE}/calculators/{}/{}",
                calc.category.slug(),
                calc.slug
            );
            let count = entries.iter().filter(|e| e.url == url).count();
            assert_eq!(count, 1, "expected one entry for {url}, found {count}");
        }
    }

    #[test]
    fn date_time_category_resolves_to_url_segment() {
        let entries = entries();
        assert!(entries.iter().any(|e| {
            e.url == "https://calculator360pro.com/calculators/date-time/age-calculator"
        }));
        // The raw enum key must never leak into URLs
        assert!(!entries.iter().any(|e| e.url.contains("dateTime")));
    }

    #[test]
    fn homepage_leads_with_full_priority() {
        let entries = entries();
        assert_eq!(entries[0].url, SITE);
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[0].change_frequency, ChangeFrequency::Daily);
    }

    #[test]
    fn translated_calculator_appears_in_both_locales_with_matching_alternates() {
        let entries = entries();
        let en = entries
            .iter()
            .find(|e| e.url.ends_with("/calculators/finance/currency-converter"))
            .expect("missing EN entry");
        let tr = entries
            .iter()
            .find(|e| e.url.ends_with("/tr/hesap-makineleri/finans/doviz-cevirici"))
            .expect("missing TR entry");
        assert_eq!(en.alternates, tr.alternates);
        let alternates = en.alternates.as_ref().unwrap();
        assert_eq!(
            alternates.en,
            "https://calculator360pro.com/calculators/finance/currency-converter"
        );
        assert_eq!(
            alternates.tr,
            "https://calculator360pro.com/tr/hesap-makineleri/finans/doviz-cevirici"
        );
    }

    #[test]
    fn untranslated_pages_carry_no_alternates() {
        let entries = entries();
        let en_only = entries
            .iter()
            .find(|e| e.url.ends_with("/retirement-savings-calculator"))
            .expect("missing EN-only entry");
        assert!(en_only.alternates.is_none());

        let untranslated_post = entries
            .iter()
            .find(|e| e.url.ends_with("/blog/gpa-scales-explained"))
            .expect("missing untranslated post");
        assert!(untranslated_post.alternates.is_none());
    }

    #[test]
    fn blog_entries_use_post_dates_not_now() {
        let entries = entries();
        let modified = entries
            .iter()
            .find(|e| e.url.ends_with("/blog/how-to-calculate-bmi"))
            .unwrap();
        assert_eq!(
            modified.last_modified,
            Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap()
        );
        let published = entries
            .iter()
            .find(|e| e.url.ends_with("/tr/blog/vki-nasil-hesaplanir"))
            .unwrap();
        assert_eq!(
            published.last_modified,
            Utc.with_ymd_and_hms(2025, 1, 18, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn urls_are_unique_across_the_sitemap() {
        let entries = entries();
        let mut seen = std::collections::HashSet::new();
        for e in &entries {
            assert!(seen.insert(e.url.clone()), "duplicate url {}", e.url);
        }
    }

    #[test]
    fn group_order_is_stable() {
        let entries = entries();
        let pos = |needle: &str| {
            entries
                .iter()
                .position(|e| e.url.ends_with(needle))
                .unwrap_or_else(|| panic!("missing {needle}"))
        };
        assert!(pos("/calculators/finance") < pos("/calculators/finance/tax-calculator"));
        assert!(pos("/calculators/finance/tax-calculator") < pos("/blog/how-to-calculate-bmi"));
        assert!(pos("/blog/how-to-calculate-bmi") < pos("/privacy-policy"));
        assert!(pos("/privacy-policy") < pos("/guides/choosing-a-mortgage"));
    }
}
