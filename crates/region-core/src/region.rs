//! Market definitions.

use serde::Serialize;

use crate::currency::Currency;
use crate::ids::{ChannelId, LanguageId, RegionId};
use crate::language::Language;

/// A market: one domain, one currency, one upstream channel.
///
/// Regions are only built through [`RegionCatalog`](crate::RegionCatalog),
/// which guarantees `available_languages` is non-empty and contains
/// `default_language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Short market identifier.
    pub id: RegionId,
    /// Display name.
    pub name: String,
    /// ISO 3166 country code.
    pub country_code: String,
    /// Canonical hostname for this market.
    pub domain: String,
    /// Active currency.
    pub currency: Currency,
    /// Upstream catalog/pricing channel.
    pub channel_id: ChannelId,
    /// The commerce backend's own id for this market (e.g. a Medusa
    /// `reg_...` id), when it differs from `id`.
    pub commerce_region_id: Option<String>,
    /// Language used when none has been chosen.
    pub default_language: Language,
    /// Languages this market can be browsed in, in display order.
    pub available_languages: Vec<Language>,
}

impl Region {
    /// Region identifier to send to the commerce backend.
    pub fn commerce_region_id(&self) -> &str {
        self.commerce_region_id
            .as_deref()
            .unwrap_or_else(|| self.id.as_str())
    }

    /// Look up one of this region's languages by id.
    pub fn language(&self, id: &str) -> Option<&Language> {
        self.available_languages.iter().find(|l| l.id == id)
    }

    /// Whether this region offers the given language.
    pub fn supports(&self, id: &str) -> bool {
        self.language(id).is_some()
    }

    /// Display-oriented summary of this region.
    pub fn summary(&self) -> RegionSummary {
        RegionSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            currency: self.currency.code(),
            currency_symbol: self.currency.symbol(),
            default_language: self.default_language.id.clone(),
            languages: self
                .available_languages
                .iter()
                .map(|l| LanguageOption {
                    id: l.id.clone(),
                    name: l.name.clone(),
                    locale: l.locale.clone(),
                })
                .collect(),
        }
    }
}

/// What a region picker needs to render a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionSummary {
    pub id: RegionId,
    pub name: String,
    pub currency: &'static str,
    pub currency_symbol: &'static str,
    pub default_language: LanguageId,
    pub languages: Vec<LanguageOption>,
}

/// A selectable language in a region picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub id: LanguageId,
    pub name: String,
    pub locale: String,
}
