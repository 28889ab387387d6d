//! The validated, read-only set of markets.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::{RegionError, RegionResult};
use crate::host::strip_port;
use crate::ids::{ChannelId, LanguageId, RegionId};
use crate::language::Language;
use crate::region::{Region, RegionSummary};

/// Immutable list of markets. The first entry is the default region.
///
/// Construction enforces the catalog invariants: at least one region,
/// unique ids, unique domains, and a non-empty language list that contains
/// each region's default language. Share it between sessions behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Build a catalog from regions. The first region is the default.
    pub fn new(regions: Vec<Region>) -> RegionResult<Self> {
        if regions.is_empty() {
            return Err(RegionError::EmptyCatalog);
        }

        let mut ids = HashSet::new();
        let mut domains: HashMap<&str, &RegionId> = HashMap::new();

        for region in &regions {
            if !ids.insert(region.id.as_str()) {
                return Err(RegionError::DuplicateRegion(region.id.to_string()));
            }
            if region.domain.is_empty() {
                return Err(RegionError::EmptyDomain(region.id.to_string()));
            }
            // Lookups strip the port, so a domain carrying one could never match.
            if strip_port(&region.domain) != region.domain {
                return Err(RegionError::InvalidDomain {
                    region: region.id.to_string(),
                    domain: region.domain.clone(),
                });
            }
            if let Some(first) = domains.insert(region.domain.as_str(), &region.id) {
                return Err(RegionError::DuplicateDomain {
                    domain: region.domain.clone(),
                    first: first.to_string(),
                    second: region.id.to_string(),
                });
            }
            if region.available_languages.is_empty() {
                return Err(RegionError::NoLanguages(region.id.to_string()));
            }
            if !region.available_languages.contains(&region.default_language) {
                return Err(RegionError::DefaultLanguageUnavailable {
                    region: region.id.to_string(),
                    language: region.default_language.id.to_string(),
                });
            }
        }

        Ok(Self { regions })
    }

    /// Build a catalog from a parsed configuration file.
    pub fn from_config(config: CatalogConfig) -> RegionResult<Self> {
        let mut languages: HashMap<String, Language> = HashMap::new();
        for lang in config.languages {
            if languages.contains_key(&lang.id) {
                return Err(RegionError::DuplicateLanguage(lang.id));
            }
            let language = Language {
                code: lang.code,
                id: LanguageId::new(lang.id.clone()),
                locale: lang.locale,
                name: lang.name,
            };
            languages.insert(lang.id, language);
        }

        let lookup = |region: &str, id: &str| {
            languages
                .get(id)
                .cloned()
                .ok_or_else(|| RegionError::UnknownLanguage {
                    region: region.to_string(),
                    language: id.to_string(),
                })
        };

        let mut regions = Vec::with_capacity(config.regions.len());
        for entry in config.regions {
            let available = entry
                .available_languages
                .iter()
                .map(|id| lookup(&entry.id, id))
                .collect::<RegionResult<Vec<_>>>()?;
            let default_language = lookup(&entry.id, &entry.default_language)?;

            regions.push(Region {
                id: RegionId::new(entry.id),
                name: entry.name,
                country_code: entry.country_code,
                domain: entry.domain,
                currency: entry.currency,
                channel_id: ChannelId::new(entry.channel_id),
                commerce_region_id: entry.commerce_region_id,
                default_language,
                available_languages: available,
            });
        }

        if let Some(default_id) = config.default_region {
            let pos = regions
                .iter()
                .position(|r| r.id == default_id.as_str())
                .ok_or(RegionError::UnknownDefaultRegion(default_id))?;
            let default = regions.remove(pos);
            regions.insert(0, default);
        }

        let catalog = Self::new(regions)?;
        debug!(
            regions = catalog.len(),
            default = %catalog.default_region().id,
            "region catalog built"
        );
        Ok(catalog)
    }

    /// Load and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> RegionResult<Self> {
        let path = path.as_ref();
        let catalog = Self::from_config(CatalogConfig::load(path)?)?;
        info!(
            path = %path.display(),
            regions = catalog.len(),
            "loaded region catalog"
        );
        Ok(catalog)
    }

    /// The region used when nothing else applies.
    pub fn default_region(&self) -> &Region {
        // Non-empty by construction.
        &self.regions[0]
    }

    /// All regions, default first.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Iterate over regions, default first.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always false; a catalog has at least one region.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Look up a region by id.
    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Whether a region id is configured.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.regions.iter().position(|r| r.id == id)
    }

    pub(crate) fn region_at(&self, index: usize) -> &Region {
        self.regions.get(index).unwrap_or_else(|| self.default_region())
    }

    /// Find the region serving a host, without falling back.
    ///
    /// The port is stripped and the comparison is exact and case-sensitive.
    pub fn find_by_domain(&self, host: &str) -> Option<&Region> {
        let host = strip_port(host);
        self.regions.iter().find(|r| r.domain == host)
    }

    pub(crate) fn position_by_domain(&self, host: &str) -> Option<usize> {
        let host = strip_port(host);
        self.regions.iter().position(|r| r.domain == host)
    }

    /// Resolve a host to a region, falling back to the default region.
    pub fn resolve_by_hostname(&self, host: &str) -> &Region {
        match self.find_by_domain(host) {
            Some(region) => region,
            None => {
                warn!(
                    host,
                    fallback = %self.default_region().id,
                    "no region configured for host, using default"
                );
                self.default_region()
            }
        }
    }

    /// Picker summaries for every region.
    pub fn summaries(&self) -> Vec<RegionSummary> {
        self.regions.iter().map(Region::summary).collect()
    }
}

impl<'a> IntoIterator for &'a RegionCatalog {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::currency::Currency;
    use crate::language::LanguageCode;

    pub fn dutch() -> Language {
        Language::new(LanguageCode::NL, "nl", "nl-NL", "Nederlands")
    }

    pub fn french() -> Language {
        Language::new(LanguageCode::FR, "fr", "fr-BE", "Fran\u{e7}ais")
    }

    pub fn german() -> Language {
        Language::new(LanguageCode::DE, "de", "de-DE", "Deutsch")
    }

    pub fn english() -> Language {
        Language::new(LanguageCode::EN, "en", "en-GB", "English")
    }

    pub fn region(id: &str, name: &str, default: Language, available: Vec<Language>) -> Region {
        Region {
            id: RegionId::new(id),
            name: name.to_string(),
            country_code: id.to_ascii_uppercase(),
            domain: format!("{}.domain.com", id),
            currency: Currency::EUR,
            channel_id: ChannelId::new(format!("channel-{}", id)),
            commerce_region_id: None,
            default_language: default,
            available_languages: available,
        }
    }

    /// nl (default), be, de on `<id>.domain.com`.
    pub fn benelux() -> RegionCatalog {
        RegionCatalog::new(vec![
            region("nl", "Netherlands", dutch(), vec![dutch(), english()]),
            region("be", "Belgium", dutch(), vec![dutch(), french(), english()]),
            region("de", "Germany", german(), vec![german(), english()]),
        ])
        .unwrap()
    }
}
