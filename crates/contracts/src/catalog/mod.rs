mod blog;
mod calculator;
mod category;

pub use blog::BlogPost;
pub use calculator::{CalculatorDefinition, FaqItem};
pub use category::{CalculatorCategory, CategoryInfo};
