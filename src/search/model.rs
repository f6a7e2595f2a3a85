use crate::model::{CategoryFilter, RecipeRecord};
use crate::navigation::NavigationState;
use serde::{Deserialize, Serialize};

/// Inputs of a recipe listing: the active category and the search box text.
///
/// The state is never patched field by field; each interaction produces a
/// new value that replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub active_category: CategoryFilter,
    pub search_query: String,
}

impl FilterState {
    pub fn new(active_category: CategoryFilter, search_query: impl Into<String>) -> Self {
        FilterState {
            active_category,
            search_query: search_query.into(),
        }
    }

    /// The state of a freshly loaded listing. Only the category survives a
    /// reload; the query always starts empty.
    pub fn from_navigation(navigation: &NavigationState) -> Self {
        FilterState {
            active_category: navigation.category(),
            search_query: String::new(),
        }
    }

    pub fn with_category(&self, active_category: CategoryFilter) -> Self {
        FilterState::new(active_category, self.search_query.clone())
    }

    pub fn with_query(&self, search_query: impl Into<String>) -> Self {
        FilterState::new(self.active_category.clone(), search_query)
    }

    /// Runs [`compute_visible`](super::compute_visible) with this state.
    pub fn apply<'a>(&self, records: &'a [RecipeRecord]) -> Vec<&'a RecipeRecord> {
        super::compute_visible(records, &self.active_category, &self.search_query)
    }
}
