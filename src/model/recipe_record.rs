use super::category::Category;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A single published recipe.
///
/// Records are immutable once loaded. Field names serialize in camelCase so
/// that per-recipe JSON files written for the website (`prepTime`,
/// `featuredImage`, ...) load without conversion.
///
/// # Examples
///
/// ```
/// use sabras_recipes::{Category, RecipeRecord};
///
/// let recipe = RecipeRecord::new("7", "ginger-chai", "Ginger Chai", Category::Drinks)
///     .with_instructions(["Boil water with ginger", "Add tea leaves and milk"])
///     .with_servings(2);
///
/// let steps: Vec<_> = recipe.numbered_instructions().collect();
/// assert_eq!(steps[1], (2, "Add tea leaves and milk"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    id: String,
    slug: String,
    title: String,
    category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    featured_image: Option<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    prep_time: String,
    #[serde(default)]
    cook_time: String,
    #[serde(default)]
    total_time: String,
    #[serde(default)]
    servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    published_at: Option<String>,
}

impl RecipeRecord {
    /// Creates a record with the identifying fields set and everything
    /// display-only left empty.
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        category: Category,
    ) -> Self {
        RecipeRecord {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            category,
            featured_image: None,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            total_time: String::new(),
            servings: 0,
            notes: None,
            published_at: None,
        }
    }

    pub fn with_featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = instructions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the free-form prep, cook and total time strings.
    pub fn with_times(
        mut self,
        prep: impl Into<String>,
        cook: impl Into<String>,
        total: impl Into<String>,
    ) -> Self {
        self.prep_time = prep.into();
        self.cook_time = cook.into();
        self.total_time = total.into();
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_published_at(mut self, date: impl Into<String>) -> Self {
        self.published_at = Some(date.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The URL-safe key used for detail lookups.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn featured_image(&self) -> Option<&str> {
        self.featured_image.as_deref()
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Instructions paired with their one-indexed step number.
    pub fn numbered_instructions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(index, step)| (index + 1, step.as_str()))
    }

    pub fn prep_time(&self) -> &str {
        &self.prep_time
    }

    pub fn cook_time(&self) -> &str {
        &self.cook_time
    }

    pub fn total_time(&self) -> &str {
        &self.total_time
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Chef's notes. Blank notes are reported as absent.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|notes| !notes.trim().is_empty())
    }

    pub fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }
}

/// Returns true if `slug` is lowercase ASCII words joined by single hyphens.
///
/// Slugs double as file names for on-disk recipe sources, so anything that
/// could be read as a path (`..`, `/`, uppercase variants) is rejected.
pub fn is_valid_slug(slug: &str) -> bool {
    static SLUG_RE: OnceLock<Regex> = OnceLock::new();
    SLUG_RE
        .get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"))
        .is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_deserialize_site_json() {
        let json = indoc! {r#"
            {
              "id": "3",
              "title": "Mango Passion Smoothie",
              "slug": "mango-passion-smoothie",
              "featuredImage": "https://images.example/mango.jpg",
              "category": "Drinks",
              "ingredients": ["2 ripe mangoes, cubed", "1 cup yogurt"],
              "instructions": ["Blend mango cubes until smooth", "Serve immediately"],
              "prepTime": "10 mins",
              "cookTime": "0 mins",
              "totalTime": "10 mins",
              "servings": 4,
              "notes": "Best served immediately.",
              "publishedAt": "2024-02-01"
            }"#};

        let recipe: RecipeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id(), "3");
        assert_eq!(recipe.slug(), "mango-passion-smoothie");
        assert_eq!(recipe.category(), Category::Drinks);
        assert_eq!(recipe.featured_image(), Some("https://images.example/mango.jpg"));
        assert_eq!(recipe.ingredients().len(), 2);
        assert_eq!(recipe.prep_time(), "10 mins");
        assert_eq!(recipe.total_time(), "10 mins");
        assert_eq!(recipe.servings(), 4);
        assert_eq!(recipe.notes(), Some("Best served immediately."));
        assert_eq!(recipe.published_at(), Some("2024-02-01"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_category() {
        let yaml = indoc! {r#"
            id: "9"
            title: Mystery
            slug: mystery
            category: Brunch
            "#};
        assert!(serde_yaml::from_str::<RecipeRecord>(yaml).is_err());
    }

    #[test]
    fn test_deserialize_rejects_wildcard_category() {
        let yaml = indoc! {r#"
            id: "9"
            title: Everything
            slug: everything
            category: All
            "#};
        assert!(serde_yaml::from_str::<RecipeRecord>(yaml).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let yaml = indoc! {r#"
            id: "10"
            title: Plain Tea
            slug: plain-tea
            category: Drinks
            "#};
        let recipe: RecipeRecord = serde_yaml::from_str(yaml).unwrap();
        assert!(recipe.featured_image().is_none());
        assert!(recipe.ingredients().is_empty());
        assert_eq!(recipe.servings(), 0);
        assert!(recipe.notes().is_none());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let recipe = RecipeRecord::new("1", "kenyan-pilau", "Traditional Kenyan Pilau", Category::Dinner)
            .with_times("20 mins", "45 mins", "1 hr 5 mins");
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["prepTime"], "20 mins");
        assert_eq!(value["totalTime"], "1 hr 5 mins");
        assert_eq!(value["category"], "Dinner");
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_blank_notes_are_absent() {
        let recipe = RecipeRecord::new("1", "a", "A", Category::Soups).with_notes("   ");
        assert!(recipe.notes().is_none());
    }

    #[test]
    fn test_numbered_instructions() {
        let recipe = RecipeRecord::new("2", "kenyan-chapati", "Kenyan Chapati", Category::FamilyFriendly)
            .with_instructions(["Mix flour and salt", "Add water", "Knead"]);
        let steps: Vec<(usize, &str)> = recipe.numbered_instructions().collect();
        assert_eq!(
            steps,
            vec![(1, "Mix flour and salt"), (2, "Add water"), (3, "Knead")]
        );
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("kenyan-pilau"));
        assert!(is_valid_slug("sukuma-wiki-ugali"));
        assert!(is_valid_slug("pilau2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Kenyan-Pilau"));
        assert!(!is_valid_slug("kenyan--pilau"));
        assert!(!is_valid_slug("-pilau"));
        assert!(!is_valid_slug("../secrets"));
        assert!(!is_valid_slug("kenyan pilau"));
        assert!(!is_valid_slug("recipes/pilau"));
    }
}
