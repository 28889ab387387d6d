//! Languages offered by a market.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegionError;
use crate::ids::LanguageId;

/// Language codes accepted by the upstream commerce API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum LanguageCode {
    EN,
    NL,
    FR,
    DE,
    ES,
    IT,
    PL,
    SV,
    DA,
    NB,
}

impl LanguageCode {
    /// Upper-case API code (e.g. "NL").
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::EN => "EN",
            LanguageCode::NL => "NL",
            LanguageCode::FR => "FR",
            LanguageCode::DE => "DE",
            LanguageCode::ES => "ES",
            LanguageCode::IT => "IT",
            LanguageCode::PL => "PL",
            LanguageCode::SV => "SV",
            LanguageCode::DA => "DA",
            LanguageCode::NB => "NB",
        }
    }

    /// Parse a code, ignoring case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "EN" => Some(LanguageCode::EN),
            "NL" => Some(LanguageCode::NL),
            "FR" => Some(LanguageCode::FR),
            "DE" => Some(LanguageCode::DE),
            "ES" => Some(LanguageCode::ES),
            "IT" => Some(LanguageCode::IT),
            "PL" => Some(LanguageCode::PL),
            "SV" => Some(LanguageCode::SV),
            "DA" => Some(LanguageCode::DA),
            "NB" => Some(LanguageCode::NB),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| RegionError::UnknownLanguageCode(s.to_string()))
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = RegionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageCode> for &'static str {
    fn from(code: LanguageCode) -> Self {
        code.code()
    }
}

/// A language a market can be browsed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// API-facing language code.
    pub code: LanguageCode,
    /// Short internal identifier.
    pub id: LanguageId,
    /// Locale tag (e.g. "nl-NL").
    pub locale: String,
    /// Display name.
    pub name: String,
}

impl Language {
    /// Create a new language.
    pub fn new(
        code: LanguageCode,
        id: impl Into<LanguageId>,
        locale: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            code,
            id: id.into(),
            locale: locale.into(),
            name: name.into(),
        }
    }

    /// Primary language subtag of the locale, lower-cased (`nl` for `nl-BE`).
    pub fn primary_subtag(&self) -> String {
        self.locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}
