//! Parameters the commerce API clients attach to every catalog query.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::currency::Currency;
use crate::ids::{ChannelId, RegionId};
use crate::language::LanguageCode;
use crate::resolver::RegionResolver;

/// Channel, currency and language for upstream catalog and pricing calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelContext {
    pub region_id: RegionId,
    /// Region id as the commerce backend knows it.
    pub commerce_region_id: String,
    pub channel_id: ChannelId,
    pub currency: Currency,
    pub language_code: LanguageCode,
    pub locale: String,
    pub country_code: String,
}

impl ChannelContext {
    /// Snapshot the resolver's current region and language.
    pub fn from_resolver(resolver: &RegionResolver) -> Self {
        let region = resolver.current_region();
        let language = resolver.current_language();
        Self {
            region_id: region.id.clone(),
            commerce_region_id: region.commerce_region_id().to_string(),
            channel_id: region.channel_id.clone(),
            currency: region.currency,
            language_code: language.code,
            locale: language.locale.clone(),
            country_code: region.country_code.clone(),
        }
    }

    /// GraphQL variables selecting channel and translation language.
    pub fn graphql_variables(&self) -> Value {
        json!({
            "channel": self.channel_id.as_str(),
            "languageCode": self.language_code.code(),
        })
    }

    /// Merge the channel variables into caller variables.
    ///
    /// Keys the caller already set are left alone. Non-object input is
    /// replaced.
    pub fn merge_graphql_variables(&self, variables: Value) -> Value {
        let mut merged = match variables {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if let Value::Object(defaults) = self.graphql_variables() {
            for (key, value) in defaults {
                merged.entry(key).or_insert(value);
            }
        }
        Value::Object(merged)
    }

    /// Query pairs for REST store endpoints.
    ///
    /// `region_id` is the backend's region id, which falls back to the
    /// storefront id when the catalog does not set `commerce_region_id`.
    pub fn rest_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("region_id", self.commerce_region_id.clone()),
            ("currency_code", self.currency.code().to_ascii_lowercase()),
            ("sales_channel_id", self.channel_id.to_string()),
        ]
    }
}

impl From<&RegionResolver> for ChannelContext {
    fn from(resolver: &RegionResolver) -> Self {
        Self::from_resolver(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::benelux;
    use std::sync::Arc;

    fn belgium_in_french() -> ChannelContext {
        let mut resolver = RegionResolver::for_host(Arc::new(benelux()), "be.domain.com");
        resolver.set_language("fr");
        ChannelContext::from(&resolver)
    }

    #[test]
    fn test_from_resolver() {
        let ctx = belgium_in_french();
        assert_eq!(ctx.channel_id, "channel-be");
        assert_eq!(ctx.currency, Currency::EUR);
        assert_eq!(ctx.language_code, LanguageCode::FR);
        assert_eq!(ctx.locale, "fr-BE");
    }

    #[test]
    fn test_graphql_variables() {
        let vars = belgium_in_french().graphql_variables();
        assert_eq!(vars, json!({"channel": "channel-be", "languageCode": "FR"}));
    }

    #[test]
    fn test_merge_keeps_caller_keys() {
        let merged = belgium_in_french()
            .merge_graphql_variables(json!({"slug": "shoes", "channel": "preview"}));
        assert_eq!(merged["slug"], "shoes");
        assert_eq!(merged["channel"], "preview");
        assert_eq!(merged["languageCode"], "FR");
    }

    #[test]
    fn test_merge_replaces_non_object() {
        let merged = belgium_in_french().merge_graphql_variables(Value::Null);
        assert_eq!(merged["channel"], "channel-be");
    }

    #[test]
    fn test_rest_query() {
        let query = belgium_in_french().rest_query();
        assert_eq!(query[0], ("region_id", "be".to_string()));
        assert_eq!(query[1], ("currency_code", "eur".to_string()));
    }

    #[test]
    fn test_rest_query_uses_commerce_region_id() {
        let mut be = crate::catalog::fixtures::region(
            "be",
            "Belgium",
            crate::catalog::fixtures::dutch(),
            vec![crate::catalog::fixtures::dutch()],
        );
        be.commerce_region_id = Some("reg_01HBELGIUM".to_string());
        let resolver = RegionResolver::new(Arc::new(crate::RegionCatalog::new(vec![be]).unwrap()));

        let ctx = ChannelContext::from(&resolver);
        assert_eq!(ctx.region_id, "be");
        assert_eq!(ctx.rest_query()[0], ("region_id", "reg_01HBELGIUM".to_string()));
    }
}
