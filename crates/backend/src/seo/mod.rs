pub mod lint;
pub mod locale_map;
pub mod schema_gen;
pub mod sitemap_builder;
pub mod sitemap_xml;
