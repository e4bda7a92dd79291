//! Dev-time consistency checks over the static content tables.
//!
//! The catalog, the URL mapping table and the blog slug map are authored by
//! hand; nothing validates them at runtime (a missing mapping just drops an
//! hreflang alternate). This lint is where the invariants are enforced,
//! via the `lint_content` binary run in CI.

use std::collections::HashSet;
use std::fmt;

use contracts::catalog::CalculatorCategory;

use crate::content::{blog, calculators};
use crate::seo::locale_map;

/// FAQ answers should fit the featured-snippet window
pub const FAQ_ANSWER_MIN_WORDS: usize = 40;
pub const FAQ_ANSWER_MAX_WORDS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintLevel {
    /// Broken invariant; the lint binary exits non-zero
    Error,
    /// Worth fixing but tolerated (e.g. an untranslated page)
    Warning,
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub level: LintLevel,
    pub subject: String,
    pub message: String,
}

impl Finding {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: LintLevel::Error,
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: LintLevel::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            LintLevel::Error => "error",
            LintLevel::Warning => "warning",
        };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Run every check over the static tables. Deterministic output order:
/// catalog checks first, then mapping checks, then blog checks.
pub fn run_lint() -> Vec<Finding> {
    let mut findings = Vec::new();
    check_catalog(&mut findings);
    check_url_mappings(&mut findings);
    check_blog(&mut findings);
    findings
}

fn check_catalog(findings: &mut Vec<Finding>) {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for calc in calculators::all_calculators() {
        if !ids.insert(calc.id) {
            findings.push(Finding::error(calc.id, "duplicate calculator id"));
        }
        if !slugs.insert((calc.category, calc.slug)) {
            findings.push(Finding::error(
                calc.id,
                format!("duplicate slug '{}' in {:?}", calc.slug, calc.category),
            ));
        }
        if calc.name.trim().is_empty() {
            findings.push(Finding::error(calc.id, "empty name"));
        }
        if calc.description.trim().is_empty() {
            findings.push(Finding::error(calc.id, "empty description"));
        }
        if calc.keywords.is_empty() {
            findings.push(Finding::error(calc.id, "no keywords"));
        }

        for (i, faq) in calc.faqs.iter().enumerate() {
            if faq.question.trim().is_empty() || faq.answer.trim().is_empty() {
                findings.push(Finding::error(
                    calc.id,
                    format!("faq #{} has an empty question or answer", i + 1),
                ));
                continue;
            }
            let words = word_count(faq.answer);
            if !(FAQ_ANSWER_MIN_WORDS..=FAQ_ANSWER_MAX_WORDS).contains(&words) {
                findings.push(Finding::warning(
                    calc.id,
                    format!(
                        "faq #{} answer is {words} words, target is \
                         {FAQ_ANSWER_MIN_WORDS}-{FAQ_ANSWER_MAX_WORDS} for snippet eligibility",
                        i + 1
                    ),
                ));
            }
        }
    }

    // Category slug lookups must stay bijective
    for category in CalculatorCategory::all() {
        if CalculatorCategory::from_slug(category.slug()) != Some(*category) {
            findings.push(Finding::error(
                category.slug(),
                "English category slug does not resolve back to its key",
            ));
        }
        if CalculatorCategory::from_slug_tr(category.slug_tr()) != Some(*category) {
            findings.push(Finding::error(
                category.slug_tr(),
                "Turkish category slug does not resolve back to its key",
            ));
        }
    }
}

fn check_url_mappings(findings: &mut Vec<Finding>) {
    // Round-trip invariant over the whole forward table
    for (en, tr) in locale_map::all_mappings() {
        match locale_map::english_path(tr) {
            Some(back) if back == en => {}
            Some(back) => findings.push(Finding::error(
                en,
                format!("reverse mapping resolves to '{back}' instead"),
            )),
            None => findings.push(Finding::error(en, "missing reverse mapping")),
        }
    }

    // No two English paths may share a Turkish target
    let mut targets = HashSet::new();
    for (_, tr) in locale_map::all_mappings() {
        if !targets.insert(tr) {
            findings.push(Finding::error(tr, "Turkish path mapped more than once"));
        }
    }

    // Every calculator page should eventually have a Turkish counterpart
    for calc in calculators::all_calculators() {
        let path = calc.path();
        if locale_map::turkish_path(&path).is_none() {
            findings.push(Finding::warning(
                calc.id,
                "no Turkish counterpart in the URL mapping table",
            ));
        }
    }
}

fn check_blog(findings: &mut Vec<Finding>) {
    for (en_slug, tr_slug) in blog::BLOG_SLUG_MAP {
        if !blog::all_blog_posts().iter().any(|p| p.slug == *en_slug) {
            findings.push(Finding::error(
                *en_slug,
                "blog slug map references an unknown English post",
            ));
        }
        if !blog::all_blog_posts_tr().iter().any(|p| p.slug == *tr_slug) {
            findings.push(Finding::error(
                *tr_slug,
                "blog slug map references an unknown Turkish post",
            ));
        }
    }

    for post in blog::all_blog_posts().iter().chain(blog::all_blog_posts_tr()) {
        if post.last_modified().is_none() {
            findings.push(Finding::error(
                post.slug,
                format!("unparseable date '{}'", post.date),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("a  b\tc\nd"), 4);
    }

    #[test]
    fn shipped_catalog_has_no_errors() {
        let errors: Vec<_> = run_lint()
            .into_iter()
            .filter(|f| f.level == LintLevel::Error)
            .collect();
        assert!(
            errors.is_empty(),
            "catalog lint errors: {:?}",
            errors.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }

    #[test]
    fn untranslated_calculator_is_reported_as_warning() {
        let findings = run_lint();
        let warning = findings
            .iter()
            .find(|f| f.subject == "retirement-savings-calculator")
            .expect("expected a warning for the untranslated calculator");
        assert_eq!(warning.level, LintLevel::Warning);
    }
}
