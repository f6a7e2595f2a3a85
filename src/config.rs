//! Site configuration.
//!
//! Settings come from a YAML file or from `SABRAS_*` environment variables.
//! Missing values fall back to defaults and are logged.

use crate::catalog::{Catalog, CatalogError};
use crate::model::RecipeRecord;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub const SITE_URL_VAR: &str = "SABRAS_SITE_URL";
pub const FEATURED_COUNT_VAR: &str = "SABRAS_FEATURED_COUNT";
pub const CATALOG_DIR_VAR: &str = "SABRAS_CATALOG_DIR";

const DEFAULT_SITE_URL: &str = "http://localhost:8080/";
const DEFAULT_FEATURED_COUNT: usize = 3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid site URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Site URL cannot be used as a base: {0}")]
    NotABase(Url),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidNumber { key: String, value: String },
}

/// Settings shared by link building and catalog loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Public root of the site. Always ends with `/`.
    pub site_url: Url,
    /// How many recipes the landing page previews.
    pub featured_count: usize,
    /// Directory of per-recipe data files. The bundled recipes are used
    /// when unset.
    pub catalog_dir: Option<Utf8PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            site_url: default_site_url(),
            featured_count: DEFAULT_FEATURED_COUNT,
            catalog_dir: None,
        }
    }
}

impl Config {
    /// Default settings rooted at `site_url`.
    pub fn new(site_url: Url) -> Result<Self, ConfigError> {
        Config {
            site_url,
            ..Config::default()
        }
        .normalized()
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.normalized()
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        info!(path = %path, "loaded site config");
        Ok(config)
    }

    /// Reads the `SABRAS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        match lookup(SITE_URL_VAR) {
            Some(value) => {
                config.site_url = Url::parse(&value).map_err(|source| {
                    warn!("Invalid {SITE_URL_VAR} value: {source}");
                    ConfigError::InvalidUrl { value, source }
                })?;
            }
            None => info!("{SITE_URL_VAR} not set, using default: {DEFAULT_SITE_URL}"),
        }

        match lookup(FEATURED_COUNT_VAR) {
            Some(value) => {
                config.featured_count = value.trim().parse().map_err(|_| {
                    warn!("Invalid {FEATURED_COUNT_VAR} value: {value}");
                    ConfigError::InvalidNumber {
                        key: FEATURED_COUNT_VAR.to_string(),
                        value: value.clone(),
                    }
                })?;
            }
            None => info!("{FEATURED_COUNT_VAR} not set, using default: {DEFAULT_FEATURED_COUNT}"),
        }

        config.catalog_dir = lookup(CATALOG_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(Utf8PathBuf::from);

        config.normalized()
    }

    /// Loads the configured catalog directory, or the bundled recipes.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_dir {
            Some(dir) => Catalog::from_dir(dir),
            None => Catalog::builtin(),
        }
    }

    /// The landing page preview: the first `featured_count` recipes.
    pub fn featured<'a>(&self, catalog: &'a Catalog) -> &'a [RecipeRecord] {
        catalog.featured(self.featured_count)
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        if self.site_url.cannot_be_a_base() {
            return Err(ConfigError::NotABase(self.site_url));
        }
        if !self.site_url.path().ends_with('/') {
            let path = format!("{}/", self.site_url.path());
            self.site_url.set_path(&path);
        }
        Ok(self)
    }
}

fn default_site_url() -> Url {
    Url::parse(DEFAULT_SITE_URL).expect("default site URL is valid")
}
