use camino::Utf8Path;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Encodings accepted for recipe data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
}

/// Errors produced while decoding recipe data.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DataFormat {
    /// File extensions tried, in order, when looking a recipe up by slug.
    pub const EXTENSIONS: [&'static str; 3] = ["json", "yaml", "yml"];

    /// Picks the format from a file extension, case-insensitively.
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(DataFormat::Yaml),
            "json" => Some(DataFormat::Json),
            _ => None,
        }
    }

    pub fn decode<T: DeserializeOwned>(self, content: &str) -> Result<T, DecodeError> {
        match self {
            DataFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            DataFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}
