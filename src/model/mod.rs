mod category;
mod format;
mod recipe_record;

pub use category::{Category, CategoryFilter, UnknownCategory, WILDCARD};
pub use format::{DataFormat, DecodeError};
pub use recipe_record::{is_valid_slug, RecipeRecord};
