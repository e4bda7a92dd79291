use serde::Serialize;

use super::CalculatorCategory;

/// One question/answer pair attached to a calculator or guide page.
/// Consumed verbatim by the FAQPage schema generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Static definition of a single calculator page.
///
/// The catalog is authored at compile time; slugs are unique within their
/// category and `id` is unique across the whole catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorDefinition {
    pub id: &'static str,
    pub category: CalculatorCategory,
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    #[serde(skip_serializing_if = "faqs_empty")]
    pub faqs: &'static [FaqItem],
}

fn faqs_empty(faqs: &&'static [FaqItem]) -> bool {
    faqs.is_empty()
}

impl CalculatorDefinition {
    /// English path relative to the site root
    pub fn path(&self) -> String {
        format!("/calculators/{}/{}", self.category.slug(), self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_uses_category_url_segment() {
        let calc = CalculatorDefinition {
            id: "age-calculator",
            category: CalculatorCategory::DateTime,
            slug: "age-calculator",
            name: "Age Calculator",
            description: "Calculate your exact age.",
            keywords: &["age"],
            faqs: &[],
        };
        assert_eq!(calc.path(), "/calculators/date-time/age-calculator");
    }
}
