use serde::{Deserialize, Serialize};

/// Calculator categories. The enum key is the canonical identifier; URL
/// segments come from `slug()`/`slug_tr()`, never from the key itself
/// (`DateTime` maps to `date-time`, not `dateTime`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculatorCategory {
    Finance,
    Health,
    Education,
    Math,
    DateTime,
}

impl CalculatorCategory {
    /// English URL segment
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorCategory::Finance => "finance",
            CalculatorCategory::Health => "health",
            CalculatorCategory::Education => "education",
            CalculatorCategory::Math => "math",
            CalculatorCategory::DateTime => "date-time",
        }
    }

    /// Turkish URL segment
    pub fn slug_tr(&self) -> &'static str {
        match self {
            CalculatorCategory::Finance => "finans",
            CalculatorCategory::Health => "saglik",
            CalculatorCategory::Education => "egitim",
            CalculatorCategory::Math => "matematik",
            CalculatorCategory::DateTime => "tarih-saat",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorCategory::Finance => "Finance Calculators",
            CalculatorCategory::Health => "Health Calculators",
            CalculatorCategory::Education => "Education Calculators",
            CalculatorCategory::Math => "Math Calculators",
            CalculatorCategory::DateTime => "Date & Time Calculators",
        }
    }

    pub fn display_name_tr(&self) -> &'static str {
        match self {
            CalculatorCategory::Finance => "Finans Hesaplayıcıları",
            CalculatorCategory::Health => "Sağlık Hesaplayıcıları",
            CalculatorCategory::Education => "Eğitim Hesaplayıcıları",
            CalculatorCategory::Math => "Matematik Hesaplayıcıları",
            CalculatorCategory::DateTime => "Tarih ve Saat Hesaplayıcıları",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalculatorCategory::Finance => {
                "Free online finance calculators: loans, mortgages, taxes, interest and currency."
            }
            CalculatorCategory::Health => {
                "Free online health calculators: BMI, body fat, calories and daily water intake."
            }
            CalculatorCategory::Education => {
                "Free online education calculators: GPA, grades and exam averages."
            }
            CalculatorCategory::Math => {
                "Free online math calculators: percentages, fractions and averages."
            }
            CalculatorCategory::DateTime => {
                "Free online date and time calculators: age, date differences and working days."
            }
        }
    }

    /// Resolve a category from its English URL segment
    pub fn from_slug(slug: &str) -> Option<CalculatorCategory> {
        CalculatorCategory::all()
            .iter()
            .copied()
            .find(|c| c.slug() == slug)
    }

    /// Resolve a category from its Turkish URL segment
    pub fn from_slug_tr(slug: &str) -> Option<CalculatorCategory> {
        CalculatorCategory::all()
            .iter()
            .copied()
            .find(|c| c.slug_tr() == slug)
    }

    pub fn all() -> &'static [CalculatorCategory] {
        &[
            CalculatorCategory::Finance,
            CalculatorCategory::Health,
            CalculatorCategory::Education,
            CalculatorCategory::Math,
            CalculatorCategory::DateTime,
        ]
    }

    pub fn info(&self) -> CategoryInfo {
        CategoryInfo {
            key: *self,
            name: self.display_name(),
            slug: self.slug(),
            description: self.description(),
        }
    }
}

/// Category card as exposed to API consumers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub key: CalculatorCategory,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lookups_are_bijective() {
        for category in CalculatorCategory::all() {
            assert_eq!(CalculatorCategory::from_slug(category.slug()), Some(*category));
            assert_eq!(
                CalculatorCategory::from_slug_tr(category.slug_tr()),
                Some(*category)
            );
        }
    }

    #[test]
    fn date_time_key_differs_from_url_segment() {
        assert_eq!(CalculatorCategory::DateTime.slug(), "date-time");
        assert_eq!(CalculatorCategory::DateTime.slug_tr(), "tarih-saat");
        let json = serde_json::to_string(&CalculatorCategory::DateTime).unwrap();
        assert_eq!(json, "\"dateTime\"");
    }

    #[test]
    fn unknown_slug_resolves_to_none() {
        assert_eq!(CalculatorCategory::from_slug("dateTime"), None);
        assert_eq!(CalculatorCategory::from_slug("unknown"), None);
    }
}
