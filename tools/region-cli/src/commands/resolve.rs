//! Hostname resolution command.

use anyhow::{Context as _, Result};
use http::header::{ACCEPT_LANGUAGE, COOKIE, HOST};
use http::{HeaderMap, HeaderValue};
use region_core::{ChannelContext, OverridePolicy, RegionContext, ResolutionSource};
use serde_json::json;

use super::ResolveArgs;
use crate::context::Context;
use crate::output::source_badge;

/// Run the resolve command.
pub fn run(args: ResolveArgs, ctx: &Context) -> Result<()> {
    let headers = build_headers(&args)?;
    let query = build_query(&args);
    let policy = OverridePolicy::default();

    let resolved = RegionContext::from_request(
        ctx.catalog.clone(),
        &headers,
        query.as_deref(),
        &policy,
    );
    let region = resolved.region();
    let language = resolved.language();
    let channel = ChannelContext::from(resolved.resolver());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "region": region.summary(),
            "language": language,
            "source": resolved.source(),
            "channel": channel,
            "graphql_variables": channel.graphql_variables(),
            "set_cookies": resolved.set_cookies(),
        }));
        return Ok(());
    }

    if let Some(host) = &args.host {
        if resolved.source() == ResolutionSource::Default {
            ctx.output
                .warn(&format!("No region serves {}, using the default", host));
        }
    }

    ctx.output.header(&format!("{} ({})", region.name, region.id));
    ctx.output
        .kv("source", &source_badge(&resolved.source().to_string()));
    ctx.output.kv("domain", &region.domain);
    ctx.output.kv(
        "currency",
        &format!("{} {}", region.currency, region.currency.symbol()),
    );
    ctx.output
        .kv("language", &format!("{} ({})", language.name, language.locale));
    ctx.output.kv("channel", channel.channel_id.as_str());

    for (key, value) in channel.rest_query() {
        ctx.output.kv(key, &value);
    }
    for cookie in resolved.set_cookies() {
        ctx.output.kv("set-cookie", cookie);
    }

    Ok(())
}

fn build_headers(args: &ResolveArgs) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let pairs = [
        (HOST, &args.host),
        (COOKIE, &args.cookie),
        (ACCEPT_LANGUAGE, &args.accept_language),
    ];

    for (name, value) in pairs {
        if let Some(value) = value {
            let header = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid {} header: {}", name, value))?;
            headers.insert(name, header);
        }
    }

    Ok(headers)
}

fn build_query(args: &ResolveArgs) -> Option<String> {
    let policy = OverridePolicy::default();
    let pairs: Vec<String> = [
        (policy.region_param.as_str(), &args.region),
        (policy.language_param.as_str(), &args.language),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| format!("{}={}", key, v)))
    .collect();

    (!pairs.is_empty()).then(|| pairs.join("&"))
}
