//! Shareable navigation state.
//!
//! The recipe listing keeps its category in the query string of the page
//! URL so that a filtered view can be bookmarked or linked. This module
//! models that query string as an ordered list of key/value pairs with
//! `URLSearchParams`-like `get`/`set`/`remove` semantics, and owns the
//! read-at-load / write-on-select contract for the category key.

use crate::config::Config;
use crate::model::CategoryFilter;
use crate::share::recipes_url;
use tracing::debug;
use url::{form_urlencoded, ParseError, Url};

/// Query-string key holding the active category.
pub const CATEGORY_KEY: &str = "category";

/// Ordered query-string pairs of the current location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pairs: Vec<(String, String)>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        NavigationState {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Reads the query string of `url`.
    pub fn from_url(url: &Url) -> Self {
        NavigationState {
            pairs: url.query_pairs().into_owned().collect(),
        }
    }

    /// The first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the first value of `key` in place and drops any others, or
    /// appends the pair when the key is absent.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found = false;
        self.pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found {
                return false;
            }
            found = true;
            *v = value.to_string();
            true
        });
        if !found {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// Removes every value stored under `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Serializes the pairs as an `application/x-www-form-urlencoded`
    /// query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Writes this state into `url`, clearing the query when empty.
    pub fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.to_query_string()));
        }
    }

    /// The category a listing starts with when loaded at this location.
    ///
    /// A missing or empty value means the wildcard. Anything else is passed
    /// through as-is, including labels outside the category set.
    pub fn category(&self) -> CategoryFilter {
        match self.get(CATEGORY_KEY) {
            None | Some("") => CategoryFilter::All,
            Some(value) => {
                let filter = CategoryFilter::parse(value);
                if let CategoryFilter::Unrecognized(label) = &filter {
                    debug!(category = %label, "navigation carries an unrecognized category");
                }
                filter
            }
        }
    }

    /// Records a category selection: the wildcard removes the key, any other
    /// value stores its exact label.
    pub fn set_category(&mut self, filter: &CategoryFilter) {
        if filter.is_wildcard() {
            self.remove(CATEGORY_KEY);
        } else {
            self.set(CATEGORY_KEY, filter.label());
        }
    }

    /// Link to the recipe listing opened on `filter`, as used by the
    /// category cards on the landing page.
    ///
    /// ```
    /// use sabras_recipes::{CategoryFilter, Config, NavigationState};
    ///
    /// let url = NavigationState::recipes_link(&Config::default(), &CategoryFilter::parse("Soups"))?;
    /// assert_eq!(url.as_str(), "http://localhost:8080/recipes?category=Soups");
    /// # Ok::<(), url::ParseError>(())
    /// ```
    pub fn recipes_link(config: &Config, filter: &CategoryFilter) -> Result<Url, ParseError> {
        let mut navigation = NavigationState::new();
        navigation.set_category(filter);
        recipes_url(config, &navigation)
    }
}
