//! Region catalog error types.

use thiserror::Error;

/// Result alias for catalog loading and validation.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors raised while building a region catalog.
///
/// Resolution itself never fails; these only surface when a catalog is
/// loaded or validated.
#[derive(Error, Debug)]
pub enum RegionError {
    /// The catalog defines no regions.
    #[error("Region catalog is empty")]
    EmptyCatalog,

    /// Two regions share the same id.
    #[error("Duplicate region id: {0}")]
    DuplicateRegion(String),

    /// Two regions share the same domain.
    #[error("Domain {domain} is claimed by both {first} and {second}")]
    DuplicateDomain {
        domain: String,
        first: String,
        second: String,
    },

    /// A region has no domain.
    #[error("Region {0} has an empty domain")]
    EmptyDomain(String),

    /// A region's domain carries a port or is otherwise not a bare host.
    #[error("Region {region} has invalid domain {domain}: expected a host without a port")]
    InvalidDomain { region: String, domain: String },

    /// Two languages share the same id.
    #[error("Duplicate language id: {0}")]
    DuplicateLanguage(String),

    /// A region references a language that is not defined.
    #[error("Region {region} references unknown language {language}")]
    UnknownLanguage { region: String, language: String },

    /// A region offers no languages.
    #[error("Region {0} has no available languages")]
    NoLanguages(String),

    /// A region's default language is not one of its available languages.
    #[error("Default language {language} of region {region} is not in its available languages")]
    DefaultLanguageUnavailable { region: String, language: String },

    /// The configured default region does not exist.
    #[error("Default region not found: {0}")]
    UnknownDefaultRegion(String),

    /// Unsupported currency code.
    #[error("Unsupported currency code: {0}")]
    UnknownCurrency(String),

    /// Unsupported language code.
    #[error("Unsupported language code: {0}")]
    UnknownLanguageCode(String),

    /// Failed to read a catalog file.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parse error.
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}
