//! Request-scoped region resolution.

use std::sync::Arc;

use http::header::{ACCEPT_LANGUAGE, COOKIE, HOST};
use http::HeaderMap;
use tracing::debug;

use crate::catalog::RegionCatalog;
use crate::ids::LanguageId;
use crate::language::Language;
use crate::persistence::{parse_cookie_header, parse_query_param, OverridePolicy};
use crate::region::Region;
use crate::resolver::{RegionResolver, ResolutionSource};

const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Region state for a single request, plus any cookies the response must set.
#[derive(Debug, Clone)]
pub struct RegionContext {
    resolver: RegionResolver,
    set_cookies: Vec<String>,
}

impl RegionContext {
    /// Resolve region and language for a request.
    ///
    /// Order: hostname, then region override (query, else cookie), then
    /// language override (query, else cookie), else `Accept-Language`
    /// negotiation. Unknown ids anywhere are ignored.
    pub fn from_request(
        catalog: Arc<RegionCatalog>,
        headers: &HeaderMap,
        query: Option<&str>,
        policy: &OverridePolicy,
    ) -> Self {
        let mut resolver = RegionResolver::new(catalog);
        let mut set_cookies = Vec::new();

        if let Some(host) = request_host(headers, policy) {
            resolver.observe_hostname(host);
        }

        let cookies = header_str(headers, COOKIE.as_str());
        let cookie = |name: &str| cookies.and_then(|c| parse_cookie_header(c, name));
        let param = |name: &str| query.and_then(|q| parse_query_param(q, name));

        if let Some(id) = param(policy.region_param.as_str()) {
            if resolver.set_region(id) {
                set_cookies.push(policy.region_set_cookie(id));
            }
        } else if let Some(id) = cookie(policy.region_cookie.as_str()) {
            resolver.set_region(id);
        }

        let language_chosen = match param(policy.language_param.as_str()) {
            Some(id) => {
                let applied = resolver.set_language(id);
                if applied {
                    set_cookies.push(policy.language_set_cookie(id));
                }
                applied
            }
            None => cookie(policy.language_cookie.as_str())
                .is_some_and(|id| resolver.set_language(id)),
        };

        if !language_chosen {
            if let Some(accept) = header_str(headers, ACCEPT_LANGUAGE.as_str()) {
                if let Some(id) = negotiate_language(resolver.current_region(), accept) {
                    let id = id.as_str().to_string();
                    resolver.set_language(&id);
                }
            }
        }

        debug!(
            region = %resolver.current_region().id,
            language = %resolver.current_language().id,
            source = %resolver.source(),
            "resolved request region"
        );

        Self {
            resolver,
            set_cookies,
        }
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &RegionResolver {
        &self.resolver
    }

    /// Mutable access for in-request switches.
    pub fn resolver_mut(&mut self) -> &mut RegionResolver {
        &mut self.resolver
    }

    /// Consume into the resolver.
    pub fn into_resolver(self) -> RegionResolver {
        self.resolver
    }

    /// The active region.
    pub fn region(&self) -> &Region {
        self.resolver.current_region()
    }

    /// The active language.
    pub fn language(&self) -> &Language {
        self.resolver.current_language()
    }

    /// How the region was chosen.
    pub fn source(&self) -> ResolutionSource {
        self.resolver.source()
    }

    /// `Set-Cookie` values the response should carry.
    pub fn set_cookies(&self) -> &[String] {
        &self.set_cookies
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Host the request was addressed to.
pub fn request_host<'a>(headers: &'a HeaderMap, policy: &OverridePolicy) -> Option<&'a str> {
    let forwarded = if policy.trust_forwarded_host {
        // Proxies may append; the first entry is the client-facing host.
        header_str(headers, X_FORWARDED_HOST)
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    } else {
        None
    };
    forwarded.or_else(|| header_str(headers, HOST.as_str()))
}

/// Pick the best language a region offers for an `Accept-Language` header.
///
/// Entries are tried by descending q-value. Each entry matches an exact
/// locale first, then the primary subtag. `*` and `q=0` entries are skipped.
pub fn negotiate_language<'r>(region: &'r Region, accept: &str) -> Option<&'r LanguageId> {
    let mut ranges: Vec<(&str, f32)> = accept
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            let q = pieces
                .filter_map(|p| p.trim().strip_prefix("q="))
                .find_map(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            (!tag.is_empty() && tag != "*" && q > 0.0).then_some((tag, q))
        })
        .collect();
    // Stable sort keeps header order among equal weights.
    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranges.into_iter().find_map(|(tag, _)| {
        let exact = region
            .available_languages
            .iter()
            .find(|l| l.locale.eq_ignore_ascii_case(tag));
        let primary = tag.split(['-', '_']).next().unwrap_or(tag).to_ascii_lowercase();
        exact
            .or_else(|| {
                region
                    .available_languages
                    .iter()
                    .find(|l| l.primary_subtag() == primary)
            })
            .map(|l| &l.id)
    })
}
