mod schema;
mod sitemap;

pub use schema::{
    Answer, BreadcrumbList, CalculatorPageSchemas, CategoryPageSchemas, CollectionPage, FaqPage,
    HowTo, HowToStep, ItemList, ListItem, Offer, Question, WebApplication, SCHEMA_CONTEXT,
};
pub use sitemap::{ChangeFrequency, LanguageAlternates, SitemapEntry};
