//! Session persistence of explicit region and language choices.
//!
//! A user's choice is carried in a cookie. A `region` / `language` query
//! parameter switches for the current request; the response should then set
//! the cookie so the choice sticks for the rest of the session.

/// Default cookie lifetime: 30 days.
pub const DEFAULT_COOKIE_MAX_AGE_SECS: u64 = 30 * 24 * 60 * 60;

/// Names and cookie attributes used to persist overrides.
#[derive(Debug, Clone)]
pub struct OverridePolicy {
    /// Cookie holding the chosen region id.
    pub region_cookie: String,
    /// Cookie holding the chosen language id.
    pub language_cookie: String,
    /// Query parameter that switches region.
    pub region_param: String,
    /// Query parameter that switches language.
    pub language_param: String,
    /// Cookie lifetime in seconds.
    pub max_age_secs: u64,
    /// Whether to mark cookies `Secure`.
    pub secure: bool,
    /// Whether to read the host from `X-Forwarded-Host`.
    pub trust_forwarded_host: bool,
}

impl Default for OverridePolicy {
    fn default() -> Self {
        Self {
            region_cookie: "storefront_region".to_string(),
            language_cookie: "storefront_language".to_string(),
            region_param: "region".to_string(),
            language_param: "language".to_string(),
            max_age_secs: DEFAULT_COOKIE_MAX_AGE_SECS,
            secure: true,
            trust_forwarded_host: false,
        }
    }
}

impl OverridePolicy {
    /// Mark cookies `Secure` or not (local development over plain HTTP).
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Read the host from `X-Forwarded-Host` when behind a trusted proxy.
    pub fn with_forwarded_host(mut self, trust: bool) -> Self {
        self.trust_forwarded_host = trust;
        self
    }

    /// Set the cookie lifetime.
    pub fn with_max_age(mut self, secs: u64) -> Self {
        self.max_age_secs = secs;
        self
    }

    /// `Set-Cookie` value persisting a region choice.
    pub fn region_set_cookie(&self, region_id: &str) -> String {
        self.cookie(&self.region_cookie).set(region_id)
    }

    /// `Set-Cookie` value persisting a language choice.
    pub fn language_set_cookie(&self, language_id: &str) -> String {
        self.cookie(&self.language_cookie).set(language_id)
    }

    fn cookie<'a>(&self, name: &'a str) -> OverrideCookie<'a> {
        OverrideCookie {
            name,
            max_age_secs: self.max_age_secs,
            secure: self.secure,
        }
    }

    /// `Set-Cookie` values forgetting both choices.
    pub fn clear_cookies(&self) -> [String; 2] {
        [
            self.cookie(&self.region_cookie).clear(),
            self.cookie(&self.language_cookie).clear(),
        ]
    }
}

/// Renders `Set-Cookie` header values for one override cookie.
#[derive(Debug, Clone, Copy)]
pub struct OverrideCookie<'a> {
    pub name: &'a str,
    pub max_age_secs: u64,
    pub secure: bool,
}

impl OverrideCookie<'_> {
    /// Cookie storing `value`.
    pub fn set(&self, value: &str) -> String {
        self.render(value, self.max_age_secs)
    }

    /// Cookie that expires immediately.
    pub fn clear(&self) -> String {
        self.render("", 0)
    }

    fn render(&self, value: &str, max_age: u64) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; SameSite=Lax",
            self.name, value, max_age
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

/// Extract a cookie value from a `Cookie` request header.
pub fn parse_cookie_header<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
        .filter(|value| !value.is_empty())
}

/// Extract a parameter from a raw query string (with or without `?`).
///
/// Values are not percent-decoded; region and language ids are plain ASCII.
pub fn parse_query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
