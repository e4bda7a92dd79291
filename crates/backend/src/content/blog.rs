use contracts::catalog::BlogPost;

/// English blog posts, newest last
static BLOG_POSTS_EN: &[BlogPost] = &[
    BlogPost {
        slug: "how-to-calculate-bmi",
        title: "How to Calculate BMI (and What the Number Actually Means)",
        description: "A practical guide to body mass index, its formula and its limits.",
        date: "2025-01-10",
        date_modified: Some("2025-03-02"),
    },
    BlogPost {
        slug: "understanding-compound-interest",
        title: "Understanding Compound Interest",
        description: "Why compounding frequency matters more than most savers think.",
        date: "2025-02-04",
        date_modified: None,
    },
    // No Turkish translation yet
    BlogPost {
        slug: "gpa-scales-explained",
        title: "GPA Scales Explained: 4.0, 5.0 and Percentage Systems",
        description: "How the common grading scales convert into a grade point average.",
        date: "2025-03-21",
        date_modified: None,
    },
];

/// Turkish blog posts, newest last
static BLOG_POSTS_TR: &[BlogPost] = &[
    BlogPost {
        slug: "vki-nasil-hesaplanir",
        title: "Vücut Kitle İndeksi Nasıl Hesaplanır?",
        description: "VKİ formülü, sağlıklı aralıklar ve ölçümün sınırları.",
        date: "2025-01-18",
        date_modified: None,
    },
    BlogPost {
        slug: "bilesik-faiz-nedir",
        title: "Bileşik Faiz Nedir?",
        description: "Bileşik faizin birikimlerinizi nasıl büyüttüğünü örneklerle anlatıyoruz.",
        date: "2025-02-12",
        date_modified: Some("2025-04-01"),
    },
];

/// EN slug → TR slug for translated posts. Posts missing here simply get no
/// hreflang alternate; that is expected for untranslated content.
pub static BLOG_SLUG_MAP: &[(&str, &str)] = &[
    ("how-to-calculate-bmi", "vki-nasil-hesaplanir"),
    ("understanding-compound-interest", "bilesik-faiz-nedir"),
];

pub fn all_blog_posts() -> &'static [BlogPost] {
    BLOG_POSTS_EN
}

pub fn all_blog_posts_tr() -> &'static [BlogPost] {
    BLOG_POSTS_TR
}

pub fn turkish_blog_slug(en_slug: &str) -> Option<&'static str> {
    BLOG_SLUG_MAP
        .iter()
        .find(|(en, _)| *en == en_slug)
        .map(|(_, tr)| *tr)
}

pub fn english_blog_slug(tr_slug: &str) -> Option<&'static str> {
    BLOG_SLUG_MAP
        .iter()
        .find(|(_, tr)| *tr == tr_slug)
        .map(|(en, _)| *en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_map_targets_exist_in_both_collections() {
        for (en, tr) in BLOG_SLUG_MAP {
            assert!(
                all_blog_posts().iter().any(|p| p.slug == *en),
                "unknown EN slug {en}"
            );
            assert!(
                all_blog_posts_tr().iter().any(|p| p.slug == *tr),
                "unknown TR slug {tr}"
            );
        }
    }

    #[test]
    fn blog_slug_lookup_round_trips() {
        assert_eq!(
            turkish_blog_slug("how-to-calculate-bmi"),
            Some("vki-nasil-hesaplanir")
        );
        assert_eq!(
            english_blog_slug("vki-nasil-hesaplanir"),
            Some("how-to-calculate-bmi")
        );
        assert_eq!(turkish_blog_slug("gpa-scales-explained"), None);
    }
}
