//! Canonical page URLs and social share links.

use crate::config::Config;
use crate::model::RecipeRecord;
use crate::navigation::NavigationState;
use serde::Serialize;
use url::{ParseError, Url};

/// Path segment of the recipe listing, relative to the site root.
pub const RECIPES_PATH: &str = "recipes";

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";

/// URL of the recipe listing carrying `navigation` as its query string.
///
/// ```
/// use sabras_recipes::{CategoryFilter, Config, NavigationState};
/// use sabras_recipes::share::recipes_url;
///
/// let mut navigation = NavigationState::new();
/// navigation.set_category(&CategoryFilter::parse("Drinks"));
/// let url = recipes_url(&Config::default(), &navigation)?;
/// assert_eq!(url.as_str(), "http://localhost:8080/recipes?category=Drinks");
/// # Ok::<(), url::ParseError>(())
/// ```
pub fn recipes_url(config: &Config, navigation: &NavigationState) -> Result<Url, ParseError> {
    let mut url = config.site_url.join(RECIPES_PATH)?;
    navigation.apply_to(&mut url);
    Ok(url)
}

/// Detail page URL of the recipe with `slug`.
pub fn recipe_url(config: &Config, slug: &str) -> Result<Url, ParseError> {
    config
        .site_url
        .join(&format!("{RECIPES_PATH}/"))?
        .join(slug)
}

/// Links rendered under "Share this recipe".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub page: Url,
    pub facebook: Url,
    pub twitter: Url,
}

impl ShareLinks {
    pub fn for_recipe(config: &Config, recipe: &RecipeRecord) -> Result<Self, ParseError> {
        let page = recipe_url(config, recipe.slug())?;

        let mut facebook = Url::parse(FACEBOOK_SHARER)?;
        facebook.query_pairs_mut().append_pair("u", page.as_str());

        let mut twitter = Url::parse(TWITTER_INTENT)?;
        twitter
            .query_pairs_mut()
            .append_pair("url", page.as_str())
            .append_pair("text", recipe.title());

        Ok(ShareLinks {
            page,
            facebook,
            twitter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryFilter};

    fn site(url: &str) -> Config {
        Config::from_yaml_str(&format!("site_url: {url}")).unwrap()
    }

    #[test]
    fn test_recipe_url() {
        let config = site("https://kitchen.example");
        let url = recipe_url(&config, "kenyan-pilau").unwrap();
        assert_eq!(url.as_str(), "https://kitchen.example/recipes/kenyan-pilau");
    }

    #[test]
    fn test_recipe_url_under_sub_path() {
        let config = site("https://kitchen.example/sabras");
        let url = recipe_url(&config, "kenyan-chapati").unwrap();
        assert_eq!(url.as_str(), "https://kitchen.example/sabras/recipes/kenyan-chapati");
    }

    #[test]
    fn test_recipes_url() {
        let config = Config::default();
        let url = recipes_url(&config, &NavigationState::new()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/recipes");

        let mut navigation = NavigationState::new();
        navigation.set_category(&CategoryFilter::Only(Category::FamilyFriendly));
        let url = recipes_url(&config, &navigation).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/recipes?category=Family-friendly");
        assert_eq!(NavigationState::from_url(&url), navigation);
    }

    #[test]
    fn test_share_links() {
        let config = site("https://kitchen.example");
        let recipe = RecipeRecord::new("3", "mango-passion-smoothie", "Mango Passion Smoothie", Category::Drinks);
        let links = ShareLinks::for_recipe(&config, &recipe).unwrap();

        assert_eq!(
            links.page.as_str(),
            "https://kitchen.example/recipes/mango-passion-smoothie"
        );
        assert_eq!(
            links.facebook.as_str(),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fkitchen.example%2Frecipes%2Fmango-passion-smoothie"
        );
        let pairs: Vec<(String, String)> = links.twitter.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("url".to_string(), links.page.to_string()),
                ("text".to_string(), "Mango Passion Smoothie".to_string()),
            ]
        );
    }
}
