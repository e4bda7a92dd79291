pub mod blog;
pub mod calculators;
pub mod pages;
