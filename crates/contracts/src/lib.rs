pub mod catalog;
pub mod seo;
