use contracts::catalog::{CalculatorCategory, CalculatorDefinition, FaqItem};
use contracts::seo::{
    Answer, BreadcrumbList, CollectionPage, FaqPage, HowTo, HowToStep, ItemList, ListItem, Offer,
    Question, WebApplication, SCHEMA_CONTEXT,
};

use crate::content::calculators;
use crate::seo::sitemap_builder::absolute_url;

/// WebApplication block for a calculator page. Name and description are
/// copied verbatim from the definition; the URL joins the site base, the
/// category URL segment and the calculator slug.
pub fn calculator_schema(site_url: &str, calc: &CalculatorDefinition) -> WebApplication {
    WebApplication {
        context: SCHEMA_CONTEXT,
        schema_type: "WebApplication",
        name: calc.name.to_string(),
        description: calc.description.to_string(),
        url: absolute_url(site_url, &calc.path()),
        application_category: "UtilityApplication",
        operating_system: "Web",
        offers: Offer::free(),
        in_language: Some("en"),
    }
}

/// FAQPage block, or `None` when there are no FAQs. Callers must skip
/// embedding in the `None` case rather than emit an empty block.
pub fn faq_schema(faqs: &[FaqItem]) -> Option<FaqPage> {
    if faqs.is_empty() {
        return None;
    }
    Some(FaqPage {
        context: SCHEMA_CONTEXT,
        schema_type: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                schema_type: "Question",
                name: faq.question.to_string(),
                accepted_answer: Answer {
                    schema_type: "Answer",
                    text: faq.answer.to_string(),
                },
            })
            .collect(),
    })
}

/// BreadcrumbList from a (name, path) trail. "Home" is always prepended as
/// position 1; positions are 1-based in array order.
pub fn breadcrumb_schema(site_url: &str, trail: &[(&str, &str)]) -> BreadcrumbList {
    let mut items = Vec::with_capacity(trail.len() + 1);
    items.push(ListItem {
        schema_type: "ListItem",
        position: 1,
        name: "Home".to_string(),
        item: Some(site_url.to_string()),
    });
    for (i, (name, path)) in trail.iter().enumerate() {
        items.push(ListItem {
            schema_type: "ListItem",
            position: (i + 2) as u32,
            name: (*name).to_string(),
            item: Some(absolute_url(site_url, path)),
        });
    }
    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element: items,
    }
}

/// Breadcrumb trail for a calculator page:
/// Home → Calculators → category → calculator
pub fn calculator_breadcrumb(site_url: &str, calc: &CalculatorDefinition) -> BreadcrumbList {
    let category_path = format!("/calculators/{}", calc.category.slug());
    let calc_path = calc.path();
    let trail: [(&str, &str); 3] = [
        ("Calculators", "/calculators"),
        (calc.category.display_name(), &category_path),
        (calc.name, &calc_path),
    ];
    breadcrumb_schema(site_url, &trail)
}

/// HowTo block listing ordered steps as (name, text) pairs
pub fn howto_schema(name: &str, description: &str, steps: &[(&str, &str)], url: &str) -> HowTo {
    HowTo {
        context: SCHEMA_CONTEXT,
        schema_type: "HowTo",
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        step: steps
            .iter()
            .enumerate()
            .map(|(i, (step_name, text))| HowToStep {
                schema_type: "HowToStep",
                position: (i + 1) as u32,
                name: (*step_name).to_string(),
                text: (*text).to_string(),
            })
            .collect(),
    }
}

/// CollectionPage block for a category page, listing every calculator in
/// the category in catalog order.
pub fn collection_schema(site_url: &str, category: CalculatorCategory) -> CollectionPage {
    let items: Vec<ListItem> = calculators::calculators_in_category(category)
        .enumerate()
        .map(|(i, calc)| ListItem {
            schema_type: "ListItem",
            position: (i + 1) as u32,
            name: calc.name.to_string(),
            item: Some(absolute_url(site_url, &calc.path())),
        })
        .collect();
    CollectionPage {
        context: SCHEMA_CONTEXT,
        schema_type: "CollectionPage",
        name: category.display_name().to_string(),
        description: category.description().to_string(),
        url: absolute_url(site_url, &format!("/calculators/{}", category.slug())),
        main_entity: ItemList {
            schema_type: "ItemList",
            number_of_items: items.len() as u32,
            item_list_element: items,
        },
    }
}
