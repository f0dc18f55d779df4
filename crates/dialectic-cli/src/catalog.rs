//! Catalog file loading
//!
//! A catalog maps framework keys to framework literals. The format is
//! chosen by file extension: `.json`, or `.yaml` / `.yml`.

use anyhow::{bail, Context, Result};
use dialectic_model::Catalog;
use std::path::Path;

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// JSON object
    Json,
    /// YAML mapping
    Yaml,
}

impl CatalogFormat {
    /// Format implied by the file extension, if recognised
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse catalog text
///
/// # Errors
/// Syntax errors, or literals missing required fields.
pub fn parse_catalog(text: &str, format: CatalogFormat) -> Result<Catalog> {
    let catalog = match format {
        CatalogFormat::Json => serde_json::from_str(text).context("invalid JSON catalog")?,
        CatalogFormat::Yaml => serde_yaml::from_str(text).context("invalid YAML catalog")?,
    };
    Ok(catalog)
}

/// Read and parse a catalog file
///
/// # Errors
/// Unknown extension, unreadable file, or unparseable content.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let Some(format) = CatalogFormat::from_path(path) else {
        bail!(
            "cannot infer catalog format of {}: expected .json, .yaml or .yml",
            path.display()
        );
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog =
        parse_catalog(&text, format).with_context(|| format!("in {}", path.display()))?;
    tracing::debug!(path = %path.display(), frameworks = catalog.len(), "catalog read");
    Ok(catalog)
}
