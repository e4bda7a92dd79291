use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

// ============================================================================
// WebApplication
// ============================================================================

/// schema.org WebApplication block for a calculator page.
/// Name and description are verbatim copies of the calculator definition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApplication {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub application_category: &'static str,
    pub operating_system: &'static str,
    pub offers: Offer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_language: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub price: &'static str,
    pub price_currency: &'static str,
}

impl Offer {
    pub fn free() -> Self {
        Self {
            schema_type: "Offer",
            price: "0",
            price_currency: "USD",
        }
    }
}

// ============================================================================
// FAQPage
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub text: String,
}

// ============================================================================
// BreadcrumbList
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub item_list_element: Vec<ListItem>,
}

/// Shared between BreadcrumbList and ItemList; `position` is 1-based.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

// ============================================================================
// HowTo
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowTo {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub step: Vec<HowToStep>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToStep {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: u32,
    pub name: String,
    pub text: String,
}

// ============================================================================
// CollectionPage
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub main_entity: ItemList,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub number_of_items: u32,
    pub item_list_element: Vec<ListItem>,
}

// ============================================================================
// Per-page bundles returned by the schema API
// ============================================================================

/// Every JSON-LD block a calculator page embeds. `faq_page` is absent when
/// the calculator has no FAQs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorPageSchemas {
    pub web_application: WebApplication,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_page: Option<FaqPage>,
    pub breadcrumb: BreadcrumbList,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageSchemas {
    pub collection_page: CollectionPage,
    pub breadcrumb: BreadcrumbList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_application_serializes_jsonld_keys() {
        let schema = WebApplication {
            context: SCHEMA_CONTEXT,
            schema_type: "WebApplication",
            name: "Tax Calculator".to_string(),
            description: "Estimate your income tax.".to_string(),
            url: "https://calculator360pro.com/calculators/finance/tax-calculator".to_string(),
            application_category: "UtilityApplication",
            operating_system: "Web",
            offers: Offer::free(),
            in_language: Some("en"),
        };
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "WebApplication");
        assert_eq!(json["applicationCategory"], "UtilityApplication");
        assert_eq!(json["offers"]["priceCurrency"], "USD");
    }

    #[test]
    fn faq_page_omitted_from_bundle_when_none() {
        let bundle = CalculatorPageSchemas {
            web_application: WebApplication {
                context: SCHEMA_CONTEXT,
                schema_type: "WebApplication",
                name: "X".to_string(),
                description: "Y".to_string(),
                url: "https://example.com/x".to_string(),
                application_category: "UtilityApplication",
                operating_system: "Web",
                offers: Offer::free(),
                in_language: None,
            },
            faq_page: None,
            breadcrumb: BreadcrumbList {
                context: SCHEMA_CONTEXT,
                schema_type: "BreadcrumbList",
                item_list_element: vec![],
            },
        };
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json.get("faqPage").is_none());
    }
}
