//! Label translation
//!
//! Indicator labels pass through a translation collaborator before display.
//! Translation mechanics are not this tool's business: the catalog is a flat
//! file of `source -> translated` strings maintained elsewhere, and a missing
//! catalog degrades to identity translation. Filter expressions never go
//! through here -- they carry the host's untranslated literals.

use crate::store;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Translation seam for indicator labels
pub trait Translate {
    fn translate(&self, text: &str) -> String;
}

/// Identity translation, used when no catalog is configured
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// File-backed translation catalog
///
/// Entries come from a JSON object of `source -> translated` strings.
/// Untranslated entries fall through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Default catalog location under the config directory
    pub fn default_path() -> Result<PathBuf> {
        Ok(store::config_dir()?.join("translations.json"))
    }

    /// Catalog location from the config file or default
    pub fn resolve_path() -> Result<PathBuf> {
        if let Some(location) = store::config_value("translations.location") {
            let path = PathBuf::from(location);
            // Relative paths resolve against the config file directory
            if path.is_relative() {
                return Ok(store::config_dir()?.join(path));
            }
            return Ok(path);
        }
        Self::default_path()
    }

    /// Load the configured catalog; a missing file yields an empty catalog
    pub fn load() -> Result<Catalog> {
        let path = Self::resolve_path()?;
        if !path.exists() {
            log::debug!("no translation catalog at {}", path.display());
            return Ok(Catalog::default());
        }
        Self::load_from(&path)
    }

    /// Load a catalog from an explicit path
    pub fn load_from(path: &Path) -> Result<Catalog> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation catalog: {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse translation catalog: {}", path.display()))?;
        log::debug!("loaded {} translation entries from {}", entries.len(), path.display());
        Ok(Catalog { entries })
    }

    /// Build a catalog from in-memory pairs (used by tests)
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Catalog {
        Catalog {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, text: &str) -> String {
        self.entries
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_translation() {
        assert_eq!(Identity.translate("Paid"), "Paid");
        assert_eq!(Identity.translate(""), "");
    }

    #[test]
    fn test_catalog_lookup_with_fallthrough() {
        let catalog = Catalog::from_pairs([("Paid", "Pagado"), ("Draft", "Borrador")]);
        assert_eq!(catalog.translate("Paid"), "Pagado");
        assert_eq!(catalog.translate("Draft"), "Borrador");
        // Untranslated entries fall through unchanged
        assert_eq!(catalog.translate("Failed"), "Failed");
    }

    #[test]
    fn test_empty_catalog_is_identity() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.translate("Paid"), "Paid");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("translations.json");
        std::fs::write(&path, r#"{"Paid": "Pagado"}"#).unwrap();

        let catalog = Catalog::load_from(&path).unwrap();
        assert_eq!(catalog.translate("Paid"), "Pagado");
    }

    #[test]
    fn test_load_from_broken_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("translations.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(Catalog::load_from(&path).is_err());
    }
}
