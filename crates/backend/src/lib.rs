pub mod content;
pub mod handlers;
pub mod routes;
pub mod seo;
pub mod shared;
pub mod system;
