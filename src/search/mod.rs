use crate::model::{CategoryFilter, RecipeRecord};

mod browser;
mod model;

pub use browser::RecipeBrowser;
pub use model::FilterState;

/// Computes the recipes visible for a category and a search query.
///
/// A record is kept when both hold:
/// - the category filter matches its category (the wildcard matches
///   everything, an unrecognized label matches nothing);
/// - the query is empty, or the lower-cased title or category label
///   contains the lower-cased query.
///
/// The result keeps the order of `records`. An empty result is a normal
/// outcome that callers render as an empty state.
///
/// # Examples
///
/// ```
/// use sabras_recipes::{compute_visible, Catalog, CategoryFilter};
///
/// let catalog = Catalog::builtin()?;
/// let visible = compute_visible(catalog.list_all(), &CategoryFilter::All, "MANGO");
/// assert_eq!(visible[0].title(), "Mango Passion Smoothie");
/// # Ok::<(), sabras_recipes::CatalogError>(())
/// ```
pub fn compute_visible<'a>(
    records: &'a [RecipeRecord],
    active_category: &CategoryFilter,
    search_query: &str,
) -> Vec<&'a RecipeRecord> {
    let query = search_query.to_lowercase();
    records
        .iter()
        .filter(|record| active_category.matches(record.category()))
        .filter(|record| matches_query(record, &query))
        .collect()
}

/// Substring test against title and category label. `query` must already be
/// lower-cased.
fn matches_query(record: &RecipeRecord, query: &str) -> bool {
    query.is_empty()
        || record.title().to_lowercase().contains(query)
        || record.category().label().to_lowercase().contains(query)
}
