use super::model::FilterState;
use crate::catalog::Catalog;
use crate::model::{CategoryFilter, RecipeRecord};
use crate::navigation::NavigationState;
use tracing::debug;

/// View-model of the recipe listing page.
///
/// Owns the navigation state and the filter state for one listing and keeps
/// them in step: category selections are written through to navigation,
/// search text stays local.
///
/// # Examples
///
/// ```
/// use sabras_recipes::{Catalog, CategoryFilter, NavigationState, RecipeBrowser};
///
/// let catalog = Catalog::builtin()?;
/// let mut browser = RecipeBrowser::new(&catalog, NavigationState::parse("category=Drinks"));
/// assert_eq!(browser.visible().len(), 1);
///
/// browser.select_category(CategoryFilter::All);
/// assert_eq!(browser.navigation().to_query_string(), "");
///
/// browser.set_query("kenyan");
/// assert_eq!(browser.visible().len(), 3);
/// # Ok::<(), sabras_recipes::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecipeBrowser<'a> {
    catalog: &'a Catalog,
    navigation: NavigationState,
    state: FilterState,
}

impl<'a> RecipeBrowser<'a> {
    /// Opens a listing at `navigation`, taking the initial category from it.
    pub fn new(catalog: &'a Catalog, navigation: NavigationState) -> Self {
        let state = FilterState::from_navigation(&navigation);
        debug!(category = %state.active_category, "opened recipe listing");
        RecipeBrowser {
            catalog,
            navigation,
            state,
        }
    }

    /// Handles a click on a category button.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.navigation.set_category(&category);
        self.state = self.state.with_category(category);
    }

    /// Handles an edit of the search box.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state = self.state.with_query(query);
    }

    /// The recipes to render for the current state.
    pub fn visible(&self) -> Vec<&'a RecipeRecord> {
        self.state.apply(self.catalog.list_all())
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn into_navigation(self) -> NavigationState {
        self.navigation
    }
}
