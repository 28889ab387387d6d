//! Catalog configuration files.
//!
//! A catalog file declares every language once and lets regions refer to
//! them by id:
//!
//! ```toml
//! default_region = "nl"
//!
//! [[languages]]
//! code = "NL"
//! id = "nl"
//! locale = "nl-NL"
//! name = "Nederlands"
//!
//! [[regions]]
//! id = "nl"
//! name = "Netherlands"
//! country_code = "NL"
//! domain = "nl.domain.com"
//! currency = "EUR"
//! channel_id = "channel-nl"
//! default_language = "nl"
//! available_languages = ["nl"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::{RegionError, RegionResult};
use crate::language::LanguageCode;

/// Unvalidated catalog as read from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Region used for unknown hostnames. Defaults to the first region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_region: Option<String>,

    /// Every language any region may offer.
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,

    /// Markets, in display order.
    #[serde(default)]
    pub regions: Vec<RegionConfig>,
}

/// A language entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub code: LanguageCode,
    pub id: String,
    pub locale: String,
    pub name: String,
}

/// A region entry. Languages are referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub id: String,
    pub name: String,
    pub country_code: String,
    pub domain: String,
    pub currency: Currency,
    pub channel_id: String,
    /// Backend region id, when it differs from `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commerce_region_id: Option<String>,
    pub default_language: String,
    pub available_languages: Vec<String>,
}

impl CatalogConfig {
    /// Load a catalog file. `.json` files are parsed as JSON, anything else
    /// as TOML.
    pub fn load(path: impl AsRef<Path>) -> RegionResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RegionError::Io {
            path: path.display().to_string(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parse a TOML catalog.
    pub fn from_toml(content: &str) -> RegionResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON catalog.
    pub fn from_json(content: &str) -> RegionResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
default_region = "be"

[[languages]]
code = "NL"
id = "nl"
locale = "nl-NL"
name = "Nederlands"

[[regions]]
id = "be"
name = "Belgium"
country_code = "BE"
domain = "be.domain.com"
currency = "EUR"
channel_id = "channel-be"
default_language = "nl"
available_languages = ["nl"]
"#;

    #[test]
    fn test_parse_toml() {
        let config = CatalogConfig::from_toml(SAMPLE).unwrap();
        assert_eq!(config.default_region.as_deref(), Some("be"));
        assert_eq!(config.languages.len(), 1);
        assert_eq!(config.languages[0].code, LanguageCode::NL);
        assert_eq!(config.regions[0].currency, Currency::EUR);
        assert!(config.regions[0].commerce_region_id.is_none());
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "languages": [{"code": "de", "id": "de", "locale": "de-DE", "name": "Deutsch"}],
            "regions": [{
                "id": "de", "name": "Germany", "country_code": "DE",
                "domain": "de.domain.com", "currency": "EUR", "channel_id": "channel-de",
                "default_language": "de", "available_languages": ["de"]
            }]
        }"#;
        let config = CatalogConfig::from_json(json).unwrap();
        assert!(config.default_region.is_none());
        assert_eq!(config.regions[0].domain, "de.domain.com");
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let broken = SAMPLE.replace(r#"currency = "EUR""#, r#"currency = "ZZZ""#);
        assert!(matches!(
            CatalogConfig::from_toml(&broken),
            Err(RegionError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogConfig::load("/nonexistent/regions.toml").unwrap_err();
        assert!(matches!(err, RegionError::Io { .. }));
    }
}
