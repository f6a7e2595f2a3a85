//! Recipe fetching functionality.
//!
//! The detail page resolves the recipe named by the slug in its route. A
//! [`RecipeSource`] answers that lookup with the record or with `None`;
//! absence is an ordinary outcome and never an error. Errors are reserved
//! for data that exists but cannot be read.

use crate::catalog::Catalog;
use crate::model::{is_valid_slug, DataFormat, DecodeError, RecipeRecord};
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when fetching recipes.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read recipe file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to decode recipe file {path}: {source}")]
    DecodeError {
        path: Utf8PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Anything that can resolve a recipe by slug.
///
/// A returned record always has `slug()` equal to the slug asked for.
pub trait RecipeSource {
    fn fetch(&self, slug: &str) -> Result<Option<RecipeRecord>, FetchError>;
}

impl RecipeSource for Catalog {
    fn fetch(&self, slug: &str) -> Result<Option<RecipeRecord>, FetchError> {
        Ok(self.get_by_slug(slug).cloned())
    }
}

/// Recipes stored one per file, named after their slug, across an ordered
/// list of directories.
///
/// # Examples
///
/// ```no_run
/// use sabras_recipes::fetcher::{DirectorySource, RecipeSource};
///
/// let source = DirectorySource::new(["./content/recipes", "./drafts"]);
/// match source.fetch("kenyan-pilau")? {
///     Some(recipe) => println!("{}", recipe.title()),
///     None => println!("Recipe Not Found"),
/// }
/// # Ok::<(), sabras_recipes::fetcher::FetchError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectorySource {
    base_dirs: Vec<Utf8PathBuf>,
}

impl DirectorySource {
    pub fn new<I, P>(base_dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Utf8PathBuf>,
    {
        DirectorySource {
            base_dirs: base_dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn base_dirs(&self) -> &[Utf8PathBuf] {
        &self.base_dirs
    }
}

impl RecipeSource for DirectorySource {
    fn fetch(&self, slug: &str) -> Result<Option<RecipeRecord>, FetchError> {
        get_recipe(&self.base_dirs, slug)
    }
}

/// Searches for and loads a recipe by slug from the specified directories.
///
/// Directories are searched in order and the first `<slug>.json`,
/// `<slug>.yaml` or `<slug>.yml` found wins. A file whose record carries a
/// different slug is skipped. A slug that is not URL-safe is never turned
/// into a path; it simply finds nothing.
pub fn get_recipe<P: AsRef<Utf8Path>>(
    base_dirs: impl IntoIterator<Item = P>,
    slug: &str,
) -> Result<Option<RecipeRecord>, FetchError> {
    if !is_valid_slug(slug) {
        debug!(slug, "rejecting malformed recipe slug");
        return Ok(None);
    }

    for base_dir in base_dirs {
        for ext in DataFormat::EXTENSIONS {
            let path = base_dir.as_ref().join(format!("{slug}.{ext}"));
            if !path.is_file() {
                continue;
            }
            let record = read_record(&path)?;
            if record.slug() != slug {
                warn!(path = %path, slug = record.slug(), "skipping recipe file named after another slug");
                continue;
            }
            debug!(path = %path, "fetched recipe");
            return Ok(Some(record));
        }
    }

    debug!(slug, "recipe not found");
    Ok(None)
}

/// Convenience wrapper around [`get_recipe`] taking string directories.
pub fn get_recipe_str(
    base_dirs: impl IntoIterator<Item = impl AsRef<str>>,
    slug: &str,
) -> Result<Option<RecipeRecord>, FetchError> {
    let base_dirs: Vec<Utf8PathBuf> = base_dirs
        .into_iter()
        .map(|s| Utf8PathBuf::from(s.as_ref()))
        .collect();
    get_recipe(&base_dirs, slug)
}

fn read_record(path: &Utf8Path) -> Result<RecipeRecord, FetchError> {
    let content = std::fs::read_to_string(path)?;
    // Callers only build paths from the known extensions.
    let format = DataFormat::from_path(path).unwrap_or(DataFormat::Json);
    format
        .decode(&content)
        .map_err(|source| FetchError::DecodeError {
            path: path.to_path_buf(),
            source,
        })
}
