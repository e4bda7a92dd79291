pub mod catalog;
pub mod locale;
pub mod schema;
pub mod sitemap;
