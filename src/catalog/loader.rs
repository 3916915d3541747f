use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::types::Catalog;
use crate::intent::CitationClass;

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

impl Catalog {
    /// Returns the path to the catalog file.
    ///
    /// Uses `~/.config/style-wizard/catalog.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn catalog_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("style-wizard").join("catalog.toml")
    }

    /// Loads the catalog from the default location.
    ///
    /// If the file doesn't exist, returns `Catalog::default()`.
    pub fn load() -> Result<Self, CatalogError> {
        let path = Self::catalog_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No catalog file, using built-in catalog");
            return Ok(Catalog::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates the catalog from a specific file.
    ///
    /// Lists the file omits keep their built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog: Catalog = toml::from_str(&content).map_err(|e| CatalogError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        catalog.validate()?;
        tracing::info!(
            path = %path.display(),
            archetypes = catalog.archetypes.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Validates the catalog.
    ///
    /// Checks:
    /// - Every id is non-empty
    /// - Ids are unique within each list
    /// - Fields and author formats are not empty
    /// - Every citation class has an archetype, a citation preset and a
    ///   bibliography preset, so no required question is left without choices
    pub fn validate(&self) -> Result<(), CatalogError> {
        check_ids("archetypes", self.archetypes.iter().map(|a| a.id.as_str()))?;
        check_ids("fields", self.fields.iter().map(|e| e.id.as_str()))?;
        check_ids(
            "author_formats",
            self.author_formats.iter().map(|e| e.id.as_str()),
        )?;
        check_ids(
            "citation_presets",
            self.citation_presets.iter().map(|p| p.id.as_str()),
        )?;
        check_ids(
            "bibliography_presets",
            self.bibliography_presets.iter().map(|p| p.id.as_str()),
        )?;

        if self.fields.is_empty() {
            return Err(validation("'fields' must not be empty"));
        }
        if self.author_formats.is_empty() {
            return Err(validation("'author_formats' must not be empty"));
        }

        // Note classes may still answer yes to a bibliography, so every
        // class needs a bibliography preset.
        for &class in CitationClass::all() {
            if self.archetypes_for(class).next().is_none() {
                return Err(validation(format!(
                    "No archetype for citation class '{}'",
                    class.as_str()
                )));
            }
            if self.citation_presets_for(class).next().is_none() {
                return Err(validation(format!(
                    "No citation preset for citation class '{}'",
                    class.as_str()
                )));
            }
            if self.bibliography_presets_for(Some(class)).next().is_none() {
                return Err(validation(format!(
                    "No bibliography preset for citation class '{}'",
                    class.as_str()
                )));
            }
        }
        Ok(())
    }
}

fn validation(message: impl Into<String>) -> CatalogError {
    CatalogError::ValidationError {
        message: message.into(),
    }
}

fn check_ids<'a>(list: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(CatalogError::ValidationError {
                message: format!("Empty id in '{}'", list),
            });
        }
        if !seen.insert(id) {
            return Err(CatalogError::ValidationError {
                message: format!("Duplicate id '{}' in '{}'", id, list),
            });
        }
    }
    Ok(())
}
