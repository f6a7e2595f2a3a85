use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label of the wildcard entry in the category set.
///
/// It is only ever a filter value; no recipe carries it as its category.
pub const WILDCARD: &str = "All";

/// The closed set of recipe categories.
///
/// Serialized using the display labels shown on the site, so
/// `Category::FamilyFriendly` reads and writes as `"Family-friendly"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Family-friendly")]
    FamilyFriendly,
    Dinner,
    Desserts,
    Breakfast,
    Drinks,
    Salads,
    Soups,
}

impl Category {
    /// Every category in display order.
    pub const VARIANTS: [Category; 7] = [
        Category::FamilyFriendly,
        Category::Dinner,
        Category::Desserts,
        Category::Breakfast,
        Category::Drinks,
        Category::Salads,
        Category::Soups,
    ];

    /// Returns the display label, which is also the navigation value.
    pub fn label(&self) -> &'static str {
        match self {
            Category::FamilyFriendly => "Family-friendly",
            Category::Dinner => "Dinner",
            Category::Desserts => "Desserts",
            Category::Breakfast => "Breakfast",
            Category::Drinks => "Drinks",
            Category::Salads => "Salads",
            Category::Soups => "Soups",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown recipe category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses an exact, case-sensitive label.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::VARIANTS
            .into_iter()
            .find(|category| category.label() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// The active category of a recipe listing.
///
/// Values arriving from navigation state are not validated: a label outside
/// the category set is kept as [`CategoryFilter::Unrecognized`] and matches
/// no recipe at all, rather than falling back to the wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// The wildcard, no filtering.
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    /// Parses a filter label exactly as it appears in navigation state.
    pub fn parse(value: &str) -> Self {
        if value == WILDCARD {
            return CategoryFilter::All;
        }
        match value.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unrecognized(value.to_string()),
        }
    }

    /// The ordered category set offered to users, wildcard first.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::VARIANTS.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => WILDCARD,
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Unrecognized(value) => value,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Returns true if a recipe in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(active) => *active == category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
