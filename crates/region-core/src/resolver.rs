//! Per-session region and language selection.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::RegionCatalog;
use crate::language::Language;
use crate::region::Region;

/// How the current region was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    /// No hostname seen yet, or the hostname matched nothing.
    Default,
    /// Matched the request hostname.
    Hostname,
    /// Chosen explicitly by the user.
    Explicit,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Hostname => write!(f, "hostname"),
            Self::Explicit => write!(f, "explicit"),
        }
    }
}

/// The active region and language for one request or session.
///
/// Create one per request (or per session) from a shared catalog. The
/// current region is always valid: unknown hostnames fall back to the
/// catalog default and unknown ids passed to [`set_region`] are ignored.
///
/// ```
/// # use std::sync::Arc;
/// # use region_core::{RegionCatalog, RegionResolver};
/// # fn demo(catalog: Arc<RegionCatalog>) {
/// let mut resolver = RegionResolver::for_host(catalog, "be.domain.com:8443");
/// resolver.set_region("de");
/// println!("{}", resolver.current_region().name);
/// # }
/// ```
///
/// [`set_region`]: RegionResolver::set_region
#[derive(Debug, Clone)]
pub struct RegionResolver {
    catalog: Arc<RegionCatalog>,
    current: usize,
    language: Option<usize>,
    source: ResolutionSource,
    hostname_seen: bool,
}

impl RegionResolver {
    /// Start on the default region, waiting for a hostname.
    pub fn new(catalog: Arc<RegionCatalog>) -> Self {
        Self {
            catalog,
            current: 0,
            language: None,
            source: ResolutionSource::Default,
            hostname_seen: false,
        }
    }

    /// Start from a known hostname.
    pub fn for_host(catalog: Arc<RegionCatalog>, host: &str) -> Self {
        let mut resolver = Self::new(catalog);
        resolver.observe_hostname(host);
        resolver
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Arc<RegionCatalog> {
        &self.catalog
    }

    /// Resolve a host against the catalog without touching the selection.
    pub fn resolve_by_hostname(&self, host: &str) -> &Region {
        self.catalog.resolve_by_hostname(host)
    }

    /// Adopt the region for `host` the first time a hostname becomes known.
    ///
    /// Returns `true` when this call performed the resolution. Later calls
    /// are no-ops. An explicit selection made before the hostname arrived is
    /// kept.
    pub fn observe_hostname(&mut self, host: &str) -> bool {
        if self.hostname_seen {
            return false;
        }
        self.hostname_seen = true;

        if self.source == ResolutionSource::Explicit {
            debug!(host, "hostname arrived after explicit region selection, keeping selection");
            return true;
        }

        match self.catalog.position_by_domain(host) {
            Some(index) => {
                self.switch_to(index);
                self.source = ResolutionSource::Hostname;
            }
            None => {
                warn!(
                    host,
                    fallback = %self.catalog.default_region().id,
                    "no region configured for host, using default"
                );
                self.switch_to(0);
                self.source = ResolutionSource::Default;
            }
        }
        true
    }

    /// Whether a hostname has been observed.
    pub fn hostname_resolved(&self) -> bool {
        self.hostname_seen
    }

    /// Make `id` the current region. Unknown ids are ignored.
    ///
    /// Returns `true` when the selection was applied.
    pub fn set_region(&mut self, id: &str) -> bool {
        match self.catalog.position(id) {
            Some(index) => {
                self.switch_to(index);
                self.source = ResolutionSource::Explicit;
                true
            }
            None => {
                debug!(region = id, "ignoring unknown region id");
                false
            }
        }
    }

    /// The active region.
    pub fn current_region(&self) -> &Region {
        self.catalog.region_at(self.current)
    }

    /// How the active region was chosen.
    pub fn source(&self) -> ResolutionSource {
        self.source
    }

    /// The active language: the explicit choice, else the region default.
    pub fn current_language(&self) -> &Language {
        let region = self.current_region();
        self.language
            .and_then(|i| region.available_languages.get(i))
            .unwrap_or(&region.default_language)
    }

    /// Whether the language was chosen explicitly.
    pub fn language_is_explicit(&self) -> bool {
        self.language.is_some()
    }

    /// Select a language offered by the current region. Unknown or
    /// unavailable ids are ignored.
    pub fn set_language(&mut self, id: &str) -> bool {
        let region = self.current_region();
        match region.available_languages.iter().position(|l| l.id == id) {
            Some(index) => {
                self.language = Some(index);
                true
            }
            None => {
                debug!(
                    language = id,
                    region = %region.id,
                    "ignoring language not offered by region"
                );
                false
            }
        }
    }

    /// Drop any explicit language choice.
    pub fn reset_language(&mut self) {
        self.language = None;
    }

    /// Move to another region, carrying the chosen language over when the
    /// new region offers it.
    fn switch_to(&mut self, index: usize) {
        let chosen = self
            .language
            .map(|_| self.current_language().id.clone());
        self.current = index;
        self.language = chosen.and_then(|id| {
            self.current_region()
                .available_languages
                .iter()
                .position(|l| l.id == id)
        });
    }
}
