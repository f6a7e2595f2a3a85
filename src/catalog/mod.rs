//! The recipe catalog.
//!
//! A [`Catalog`] owns an ordered, read-only list of [`RecipeRecord`]s and
//! answers slug lookups. Order is the authored order of the data source and
//! is what every listing shows; nothing here sorts.

use crate::model::{is_valid_slug, DataFormat, DecodeError, RecipeRecord};
use camino::{Utf8Path, Utf8PathBuf};
use glob::MatchOptions;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::{debug, info};

/// Recipes shipped with the crate, the same set the website launched with.
const BUILTIN_RECIPES: &str = include_str!("../../data/recipes.yaml");

/// Errors that can occur while building a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read recipe data: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to decode recipe data: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("Failed to read directory: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Unsupported recipe data file: {0}")]
    UnsupportedFormat(Utf8PathBuf),

    #[error("Path contains invalid UTF-8: {0}")]
    InvalidPath(String),

    #[error("Duplicate recipe slug: {0}")]
    DuplicateSlug(String),

    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    #[error("Slug is not URL-safe: {0:?}")]
    InvalidSlug(String),
}

/// An immutable, ordered collection of recipes with lookup by slug.
///
/// # Examples
///
/// ```
/// use sabras_recipes::Catalog;
///
/// let catalog = Catalog::builtin()?;
/// assert_eq!(catalog.list_all()[0].title(), "Traditional Kenyan Pilau");
/// assert!(catalog.get_by_slug("kenyan-chapati").is_some());
/// assert!(catalog.get_by_slug("pizza").is_none());
/// # Ok::<(), sabras_recipes::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<RecipeRecord>,
    slugs: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, checking that slugs are URL-safe and that slugs and
    /// ids are unique.
    pub fn from_records(records: Vec<RecipeRecord>) -> Result<Self, CatalogError> {
        let mut slugs = HashMap::with_capacity(records.len());
        let mut ids = HashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if !is_valid_slug(record.slug()) {
                return Err(CatalogError::InvalidSlug(record.slug().to_string()));
            }
            if slugs.insert(record.slug().to_string(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(record.slug().to_string()));
            }
            if !ids.insert(record.id()) {
                return Err(CatalogError::DuplicateId(record.id().to_string()));
            }
        }

        Ok(Catalog { records, slugs })
    }

    /// Parses a YAML list of recipes.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        Self::decode(DataFormat::Yaml, content)
    }

    /// Parses a JSON array of recipes.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        Self::decode(DataFormat::Json, content)
    }

    /// Loads a catalog file holding a list of recipes. The format follows the
    /// file extension (`.yaml`, `.yml` or `.json`).
    pub fn from_path(path: &Utf8Path) -> Result<Self, CatalogError> {
        let format = DataFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::decode(format, &content)?;
        info!(path = %path, recipes = catalog.len(), "loaded recipe catalog");
        Ok(catalog)
    }

    /// Loads one recipe per data file found directly in `dir`.
    ///
    /// Files are taken in file-name order, so a numeric prefix controls
    /// listing order. Extensions match case-insensitively and files with
    /// other extensions are ignored.
    pub fn from_dir(dir: &Utf8Path) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::DirectoryNotFound(dir.to_path_buf()));
        }

        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };
        let mut paths = Vec::new();
        for ext in DataFormat::EXTENSIONS {
            let pattern = dir.join(format!("*.{ext}"));
            for entry in glob::glob_with(pattern.as_str(), options)? {
                let path = entry?;
                let path = Utf8PathBuf::from_path_buf(path)
                    .map_err(|p| CatalogError::InvalidPath(p.display().to_string()))?;
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let format = DataFormat::from_path(&path)
                .ok_or_else(|| CatalogError::UnsupportedFormat(path.clone()))?;
            let content = std::fs::read_to_string(&path)?;
            let record: RecipeRecord = format.decode(&content)?;
            debug!(path = %path, slug = record.slug(), "read recipe file");
            records.push(record);
        }

        let catalog = Self::from_records(records)?;
        info!(dir = %dir, recipes = catalog.len(), "loaded recipe directory");
        Ok(catalog)
    }

    /// The recipes bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUILTIN_RECIPES)
    }

    fn decode(format: DataFormat, content: &str) -> Result<Self, CatalogError> {
        let records: Vec<RecipeRecord> = format.decode(content)?;
        Self::from_records(records)
    }

    /// Every recipe, in catalog order.
    pub fn list_all(&self) -> &[RecipeRecord] {
        &self.records
    }

    /// Looks a recipe up by slug. A miss is an ordinary outcome.
    pub fn get_by_slug(&self, slug: &str) -> Option<&RecipeRecord> {
        self.slugs.get(slug).map(|&index| &self.records[index])
    }

    /// The first `count` recipes, as shown in the landing page preview.
    pub fn featured(&self, count: usize) -> &[RecipeRecord] {
        &self.records[..count.min(self.records.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RecipeRecord;
    type IntoIter = std::slice::Iter<'a, RecipeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
