//! UniFFI bindings for the mobile apps (iOS, Android).
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Records cross the boundary as plain value types, categories as their
//! display labels, and navigation state as a raw query string.

use crate::catalog::{Catalog, CatalogError};
use crate::config::{Config, ConfigError};
use crate::fetcher::{get_recipe_str, FetchError};
use crate::model::{CategoryFilter, RecipeRecord};
use crate::navigation::NavigationState;
use crate::search::compute_visible;
use crate::share::ShareLinks;
use camino::Utf8Path;
use std::sync::Arc;
use url::Url;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum SabrasError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Invalid recipe data: {message}")]
    DataError { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Invalid URL: {message}")]
    UrlError { message: String },
}

impl From<CatalogError> for SabrasError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::IoError(e) => SabrasError::IoError {
                message: e.to_string(),
            },
            e => SabrasError::DataError {
                message: e.to_string(),
            },
        }
    }
}

impl From<FetchError> for SabrasError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::IoError(e) => SabrasError::IoError {
                message: e.to_string(),
            },
            e @ FetchError::DecodeError { .. } => SabrasError::DataError {
                message: e.to_string(),
            },
        }
    }
}

impl From<ConfigError> for SabrasError {
    fn from(e: ConfigError) -> Self {
        SabrasError::ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<url::ParseError> for SabrasError {
    fn from(e: url::ParseError) -> Self {
        SabrasError::UrlError {
            message: e.to_string(),
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiRecipe {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Category display label
    pub category: String,
    pub featured_image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: u32,
    pub notes: Option<String>,
    pub published_at: Option<String>,
}

impl From<&RecipeRecord> for FfiRecipe {
    fn from(r: &RecipeRecord) -> Self {
        FfiRecipe {
            id: r.id().to_string(),
            slug: r.slug().to_string(),
            title: r.title().to_string(),
            category: r.category().label().to_string(),
            featured_image: r.featured_image().map(|s| s.to_string()),
            ingredients: r.ingredients().to_vec(),
            instructions: r.instructions().to_vec(),
            prep_time: r.prep_time().to_string(),
            cook_time: r.cook_time().to_string(),
            total_time: r.total_time().to_string(),
            servings: r.servings(),
            notes: r.notes().map(|s| s.to_string()),
            published_at: r.published_at().map(|s| s.to_string()),
        }
    }
}

/// FFI-safe share links for a recipe.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiShareLinks {
    pub page: String,
    pub facebook: String,
    pub twitter: String,
}

impl From<ShareLinks> for FfiShareLinks {
    fn from(links: ShareLinks) -> Self {
        FfiShareLinks {
            page: links.page.into(),
            facebook: links.facebook.into(),
            twitter: links.twitter.into(),
        }
    }
}

/// FFI-safe handle to a loaded catalog.
#[derive(Debug, uniffi::Object)]
pub struct FfiCatalog {
    inner: Catalog,
}

#[uniffi::export]
impl FfiCatalog {
    /// Returns every recipe in catalog order.
    pub fn list_all(&self) -> Vec<FfiRecipe> {
        self.inner.iter().map(FfiRecipe::from).collect()
    }

    /// Looks a recipe up by slug.
    pub fn get_by_slug(&self, slug: String) -> Option<FfiRecipe> {
        self.inner.get_by_slug(&slug).map(FfiRecipe::from)
    }

    /// Returns the first `count` recipes.
    pub fn featured(&self, count: u32) -> Vec<FfiRecipe> {
        self.inner
            .featured(count as usize)
            .iter()
            .map(FfiRecipe::from)
            .collect()
    }

    /// Returns the recipes visible for a category label and a search query.
    ///
    /// Labels outside the category set match nothing.
    pub fn visible(&self, category: String, query: String) -> Vec<FfiRecipe> {
        let filter = CategoryFilter::parse(&category);
        compute_visible(self.inner.list_all(), &filter, &query)
            .into_iter()
            .map(FfiRecipe::from)
            .collect()
    }

    /// Returns the number of recipes.
    pub fn count(&self) -> u32 {
        self.inner.len() as u32
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Loads the recipes bundled with the library.
#[uniffi::export]
pub fn builtin_catalog() -> Result<Arc<FfiCatalog>, SabrasError> {
    let inner = Catalog::builtin()?;
    Ok(Arc::new(FfiCatalog { inner }))
}

/// Loads a catalog file (`.yaml`, `.yml` or `.json`).
#[uniffi::export]
pub fn catalog_from_path(path: String) -> Result<Arc<FfiCatalog>, SabrasError> {
    let inner = Catalog::from_path(Utf8Path::new(&path))?;
    Ok(Arc::new(FfiCatalog { inner }))
}

/// Loads one recipe per data file found in `dir`.
#[uniffi::export]
pub fn catalog_from_dir(dir: String) -> Result<Arc<FfiCatalog>, SabrasError> {
    let inner = Catalog::from_dir(Utf8Path::new(&dir))?;
    Ok(Arc::new(FfiCatalog { inner }))
}

/// Fetches a single recipe by slug from per-recipe data files.
///
/// # Arguments
/// * `base_dirs` - Directories to search, in priority order
/// * `slug` - Recipe slug from the detail route
///
/// # Returns
/// The recipe, `None` if no directory has it, or an error for unreadable
/// data.
#[uniffi::export]
pub fn fetch_recipe(base_dirs: Vec<String>, slug: String) -> Result<Option<FfiRecipe>, SabrasError> {
    let recipe = get_recipe_str(base_dirs, &slug)?;
    Ok(recipe.as_ref().map(FfiRecipe::from))
}

/// Returns the category labels offered to users, wildcard first.
#[uniffi::export]
pub fn category_options() -> Vec<String> {
    CategoryFilter::options()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Returns the category a listing opened with `query_string` starts on.
#[uniffi::export]
pub fn initial_category(query_string: String) -> String {
    NavigationState::parse(&query_string).category().into()
}

/// Applies a category selection to `query_string` and returns the new
/// query string.
#[uniffi::export]
pub fn select_category(query_string: String, category: String) -> String {
    let mut navigation = NavigationState::parse(&query_string);
    navigation.set_category(&CategoryFilter::parse(&category));
    navigation.to_query_string()
}

/// Builds share links for `slug` on the site rooted at `site_url`.
#[uniffi::export]
pub fn share_links(
    catalog: Arc<FfiCatalog>,
    slug: String,
    site_url: String,
) -> Result<Option<FfiShareLinks>, SabrasError> {
    let Some(recipe) = catalog.inner.get_by_slug(&slug) else {
        return Ok(None);
    };
    let config = Config::new(Url::parse(&site_url)?)?;
    Ok(Some(ShareLinks::for_recipe(&config, recipe)?.into()))
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.count(), 6);
        let first = &catalog.list_all()[0];
        assert_eq!(first.slug, "kenyan-pilau");
        assert_eq!(first.category, "Dinner");
        assert_eq!(catalog.featured(3).len(), 3);
    }

    #[test]
    fn test_visible() {
        let catalog = builtin_catalog().unwrap();
        let drinks = catalog.visible("Drinks".to_string(), String::new());
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].title, "Mango Passion Smoothie");

        assert!(catalog
            .visible("Drinks".to_string(), "kenyan".to_string())
            .is_empty());
        assert!(catalog.visible("drinks".to_string(), String::new()).is_empty());
        assert_eq!(catalog.visible("All".to_string(), String::new()).len(), 6);
    }

    #[test]
    fn test_get_by_slug() {
        let catalog = builtin_catalog().unwrap();
        let chapati = catalog.get_by_slug("kenyan-chapati".to_string()).unwrap();
        assert_eq!(chapati.category, "Family-friendly");
        assert_eq!(chapati.servings, 8);
        assert!(catalog.get_by_slug("pizza".to_string()).is_none());
    }

    #[test]
    fn test_navigation_functions() {
        assert_eq!(initial_category(String::new()), "All");
        assert_eq!(initial_category("?category=Desserts".to_string()), "Desserts");
        assert_eq!(initial_category("category=Brunch".to_string()), "Brunch");

        let query = select_category("page=2".to_string(), "Soups".to_string());
        assert_eq!(query, "page=2&category=Soups");
        let query = select_category(query, "All".to_string());
        assert_eq!(query, "page=2");
    }

    #[test]
    fn test_category_options() {
        let options = category_options();
        assert_eq!(options.first().map(String::as_str), Some("All"));
        assert_eq!(options.len(), 8);
    }

    #[test]
    fn test_fetch_recipe() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().to_str().unwrap();
        fs::write(
            format!("{temp_path}/githeri.yaml"),
            indoc! {r#"
                id: "20"
                slug: githeri
                title: Githeri
                category: Dinner
                "#},
        )
        .unwrap();

        let recipe = fetch_recipe(vec![temp_path.to_string()], "githeri".to_string())
            .unwrap()
            .unwrap();
        assert_eq!(recipe.title, "Githeri");
        assert!(fetch_recipe(vec![temp_path.to_string()], "ugali".to_string())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_catalog_from_dir_missing() {
        let err = catalog_from_dir("/nonexistent/recipes".to_string()).unwrap_err();
        assert!(matches!(err, SabrasError::DataError { .. }));
    }

    #[test]
    fn test_share_links() {
        let catalog = builtin_catalog().unwrap();
        let links = share_links(
            catalog.clone(),
            "kenyan-pilau".to_string(),
            "https://kitchen.example".to_string(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(links.page, "https://kitchen.example/recipes/kenyan-pilau");
        assert!(links.twitter.contains("text=Traditional+Kenyan+Pilau"));

        let missing = share_links(
            catalog,
            "pizza".to_string(),
            "https://kitchen.example".to_string(),
        )
        .unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
