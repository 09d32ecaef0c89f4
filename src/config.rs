//! Environment configuration shared by the export tool and the server.
//!
//! | Variable        | Default          | Meaning                               |
//! |-----------------|------------------|---------------------------------------|
//! | `CATALOG_DIR`   | unset (built-in) | corpus directory to load              |
//! | `OUTPUT_DIR`    | `catalog_pages`  | export destination                    |
//! | `EXPORT_FORMAT` | `both`           | `markdown`, `json` or `both`          |
//! | `PORT`          | `3000`           | server port                           |

use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Markdown,
    Json,
    #[default]
    Both,
}

impl ExportFormat {
    pub fn markdown(&self) -> bool {
        matches!(self, ExportFormat::Markdown | ExportFormat::Both)
    }

    pub fn json(&self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }
}

impl FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            other => Err(CatalogError::InvalidConfig(format!(
                "EXPORT_FORMAT must be markdown, json or both (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub catalog_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub export_format: ExportFormat,
    pub port: u16,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            output_dir: PathBuf::from("catalog_pages"),
            export_format: ExportFormat::Both,
            port: 3000,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key -> value source. Empty values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| get(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get("CATALOG_DIR") {
            config.catalog_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = get("OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(format) = get("EXPORT_FORMAT") {
            config.export_format = format.parse()?;
        }
        if let Some(port) = get("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| CatalogError::InvalidConfig(format!("PORT must be a port number (got '{}')", port)))?;
        }

        Ok(config)
    }
}
