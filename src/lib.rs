pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod ffi;
pub mod model;
pub mod navigation;
pub mod search;
pub mod share;

uniffi::setup_scaffolding!();

pub use catalog::{Catalog, CatalogError};
pub use config::{Config, ConfigError};
pub use fetcher::{get_recipe, DirectorySource, FetchError, RecipeSource};
pub use model::*;
pub use navigation::{NavigationState, CATEGORY_KEY};
pub use search::{compute_visible, FilterState, RecipeBrowser};
pub use share::ShareLinks;
