//! End-to-end resolution against a catalog file.

use std::collections::HashSet;
use std::sync::Arc;

use http::{HeaderMap, HeaderValue};
use proptest::prelude::*;
use region_core::prelude::*;

fn catalog() -> Arc<RegionCatalog> {
    let config = region_core::CatalogConfig::from_toml(include_str!("fixtures/regions.toml"))
        .expect("fixture parses");
    Arc::new(RegionCatalog::from_config(config).expect("fixture is valid"))
}

#[test]
fn belgium_with_port_resolves_to_belgium() {
    let catalog = catalog();
    let resolver = RegionResolver::for_host(catalog, "be.domain.com:8443");
    assert_eq!(resolver.current_region().name, "Belgium");
}

#[test]
fn unknown_host_resolves_to_netherlands() {
    let catalog = catalog();
    assert_eq!(catalog.resolve_by_hostname("fr.other.com").name, "Netherlands");
    assert_eq!(
        catalog.resolve_by_hostname("unknown.example.com").id,
        catalog.default_region().id
    );
}

#[test]
fn explicit_selection_switches_to_germany() {
    let mut resolver = RegionResolver::new(catalog());
    resolver.set_region("de");
    assert_eq!(resolver.current_region().name, "Germany");

    resolver.set_region("fr");
    assert_eq!(resolver.current_region().name, "Germany");
}

#[test]
fn every_default_language_is_available() {
    for region in catalog().iter() {
        assert!(region.available_languages.contains(&region.default_language));
        assert!(!region.available_languages.is_empty());
    }
}

#[test]
fn domains_are_unique() {
    let catalog = catalog();
    let domains: HashSet<_> = catalog.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(domains.len(), catalog.len());
}

#[test]
fn request_flow_feeds_channel_parameters() {
    let mut headers = HeaderMap::new();
    headers.insert("host", HeaderValue::from_static("be.domain.com"));
    headers.insert("accept-language", HeaderValue::from_static("fr-FR,fr;q=0.9"));

    let ctx = RegionContext::from_request(catalog(), &headers, None, &OverridePolicy::default());
    let channel = ChannelContext::from(ctx.resolver());

    assert_eq!(channel.channel_id, "channel-be");
    assert_eq!(channel.language_code, LanguageCode::FR);
    assert_eq!(channel.currency.code(), "EUR");
}

#[test]
fn summaries_list_languages_in_order() {
    let summaries = catalog().summaries();
    let belgium = summaries.iter().find(|s| s.id == "be").unwrap();
    let ids: Vec<_> = belgium.languages.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["nl-be", "fr", "en"]);
}

proptest! {
    #[test]
    fn any_port_is_stripped(index in 0usize..3, port in 0u32..=65535) {
        let catalog = catalog();
        let region = &catalog.regions()[index];
        let host = format!("{}:{}", region.domain, port);
        prop_assert_eq!(&catalog.resolve_by_hostname(&host).id, &region.id);
    }

    #[test]
    fn resolution_never_fails(host in "\\PC{0,40}") {
        let catalog = catalog();
        let resolved = catalog.resolve_by_hostname(&host);
        prop_assert!(catalog.contains(resolved.id.as_str()));
    }

    #[test]
    fn unknown_ids_never_change_selection(id in "[a-z]{3,8}") {
        let mut resolver = RegionResolver::for_host(catalog(), "be.domain.com");
        resolver.set_region(&id);
        prop_assert_eq!(resolver.current_region().id.as_str(), "be");
    }
}
