use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::content::blog::BLOG_SLUG_MAP;

/// Hand-maintained English → Turkish path pairs for everything except blog
/// posts (those are derived from the blog slug map below). Keys are exact
/// path strings; there is no normalization or partial matching.
///
/// A page missing here gets no hreflang alternate, which is the intended
/// behavior for untranslated content, not an error.
static URL_MAPPINGS: &[(&str, &str)] = &[
    // Roots and hubs
    ("/", "/tr"),
    ("/calculators", "/tr/hesap-makineleri"),
    ("/blog", "/tr/blog"),
    // Category pages
    ("/calculators/finance", "/tr/hesap-makineleri/finans"),
    ("/calculators/health", "/tr/hesap-makineleri/saglik"),
    ("/calculators/education", "/tr/hesap-makineleri/egitim"),
    ("/calculators/math", "/tr/hesap-makineleri/matematik"),
    ("/calculators/date-time", "/tr/hesap-makineleri/tarih-saat"),
    // Finance calculators
    (
        "/calculators/finance/tax-calculator",
        "/tr/hesap-makineleri/finans/vergi-hesaplayici",
    ),
    (
        "/calculators/finance/loan-calculator",
        "/tr/hesap-makineleri/finans/kredi-hesaplayici",
    ),
    (
        "/calculators/finance/mortgage-calculator",
        "/tr/hesap-makineleri/finans/konut-kredisi-hesaplayici",
    ),
    (
        "/calculators/finance/compound-interest-calculator",
        "/tr/hesap-makineleri/finans/bilesik-faiz-hesaplayici",
    ),
    (
        "/calculators/finance/currency-converter",
        "/tr/hesap-makineleri/finans/doviz-cevirici",
    ),
    (
        "/calculators/finance/tip-calculator",
        "/tr/hesap-makineleri/finans/bahsis-hesaplayici",
    ),
    // retirement-savings-calculator: not translated yet, deliberately absent
    // Health calculators
    (
        "/calculators/health/bmi-calculator",
        "/tr/hesap-makineleri/saglik/vki-hesaplayici",
    ),
    (
        "/calculators/health/body-fat-calculator",
        "/tr/hesap-makineleri/saglik/vucut-yag-orani-hesaplayici",
    ),
    (
        "/calculators/health/calorie-calculator",
        "/tr/hesap-makineleri/saglik/kalori-hesaplayici",
    ),
    (
        "/calculators/health/ideal-weight-calculator",
        "/tr/hesap-makineleri/saglik/ideal-kilo-hesaplayici",
    ),
    (
        "/calculators/health/water-intake-calculator",
        "/tr/hesap-makineleri/saglik/su-ihtiyaci-hesaplayici",
    ),
    // Education calculators
    (
        "/calculators/education/gpa-calculator",
        "/tr/hesap-makineleri/egitim/not-ortalamasi-hesaplayici",
    ),
    (
        "/calculators/education/grade-calculator",
        "/tr/hesap-makineleri/egitim/ders-notu-hesaplayici",
    ),
    (
        "/calculators/education/exam-average-calculator",
        "/tr/hesap-makineleri/egitim/sinav-ortalamasi-hesaplayici",
    ),
    // Math calculators
    (
        "/calculators/math/percentage-calculator",
        "/tr/hesap-makineleri/matematik/yuzde-hesaplayici",
    ),
    (
        "/calculators/math/fraction-calculator",
        "/tr/hesap-makineleri/matematik/kesir-hesaplayici",
    ),
    (
        "/calculators/math/average-calculator",
        "/tr/hesap-makineleri/matematik/ortalama-hesaplayici",
    ),
    // Date & time calculators
    (
        "/calculators/date-time/age-calculator",
        "/tr/hesap-makineleri/tarih-saat/yas-hesaplayici",
    ),
    (
        "/calculators/date-time/date-difference-calculator",
        "/tr/hesap-makineleri/tarih-saat/tarih-farki-hesaplayici",
    ),
    (
        "/calculators/date-time/working-days-calculator",
        "/tr/hesap-makineleri/tarih-saat/is-gunu-hesaplayici",
    ),
    // Static/legal pages
    ("/about", "/tr/hakkimizda"),
    ("/contact", "/tr/iletisim"),
    ("/privacy-policy", "/tr/gizlilik-politikasi"),
    ("/terms-of-service", "/tr/kullanim-kosullari"),
    // Guides
    (
        "/guides/choosing-a-mortgage",
        "/tr/rehberler/konut-kredisi-secimi",
    ),
    (
        "/guides/understanding-gpa",
        "/tr/rehberler/not-ortalamasi-rehberi",
    ),
];

/// Forward table: EN path → TR path. Blog pairs are folded in from the blog
/// slug map so post translations are authored in exactly one place; the
/// derived paths are leaked once, the table lives for the whole process.
static FORWARD: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static str> = URL_MAPPINGS.iter().copied().collect();
    for (en_slug, tr_slug) in BLOG_SLUG_MAP {
        let en: &'static str = Box::leak(format!("/blog/{en_slug}").into_boxed_str());
        let tr: &'static str = Box::leak(format!("/tr/blog/{tr_slug}").into_boxed_str());
        map.insert(en, tr);
    }
    map
});

/// Reverse table, derived from the forward table so the round-trip invariant
/// holds by construction.
static REVERSE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| FORWARD.iter().map(|(en, tr)| (*tr, *en)).collect());

/// Turkish counterpart of an English path, if one exists
pub fn turkish_path(en_path: &str) -> Option<&'static str> {
    FORWARD.get(en_path).copied()
}

/// English counterpart of a Turkish path, if one exists
pub fn english_path(tr_path: &str) -> Option<&'static str> {
    REVERSE.get(tr_path).copied()
}

/// Iterate every (en, tr) pair, blog posts included
pub fn all_mappings() -> impl Iterator<Item = (&'static str, &'static str)> {
    FORWARD.iter().map(|(en, tr)| (*en, *tr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_reverse_round_trip() {
        for (en, tr) in all_mappings() {
            assert_eq!(english_path(tr), Some(en), "broken pair {en} -> {tr}");
        }
    }

    #[test]
    fn currency_converter_pair_is_present_both_ways() {
        assert_eq!(
            turkish_path("/calculators/finance/currency-converter"),
            Some("/tr/hesap-makineleri/finans/doviz-cevirici")
        );
        assert_eq!(
            english_path("/tr/hesap-makineleri/finans/doviz-cevirici"),
            Some("/calculators/finance/currency-converter")
        );
    }

    #[test]
    fn blog_pairs_are_derived_from_slug_map() {
        assert_eq!(
            turkish_path("/blog/how-to-calculate-bmi"),
            Some("/tr/blog/vki-nasil-hesaplanir")
        );
        assert_eq!(
            english_path("/tr/blog/bilesik-faiz-nedir"),
            Some("/blog/understanding-compound-interest")
        );
    }

    #[test]
    fn missing_mapping_is_none_not_error() {
        assert_eq!(
            turkish_path("/calculators/finance/retirement-savings-calculator"),
            None
        );
        assert_eq!(turkish_path("/blog/gpa-scales-explained"), None);
        assert_eq!(english_path("/no-such-page"), None);
    }

    #[test]
    fn no_turkish_path_is_mapped_twice() {
        let mut seen = std::collections::HashSet::new();
        for (_, tr) in all_mappings() {
            assert!(seen.insert(tr), "duplicate Turkish target {tr}");
        }
    }
}
