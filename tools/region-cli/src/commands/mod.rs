//! CLI command implementations.

pub mod list;
pub mod resolve;
pub mod validate;

use clap::Args;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Show the languages offered by each market.
    #[arg(short, long)]
    pub languages: bool,
}

/// Arguments for the resolve command.
#[derive(Args)]
pub struct ResolveArgs {
    /// Host header value (may include a port).
    pub host: Option<String>,

    /// Region override, as if passed via `?region=`.
    #[arg(short, long)]
    pub region: Option<String>,

    /// Language override, as if passed via `?language=`.
    #[arg(short, long)]
    pub language: Option<String>,

    /// Raw Cookie header.
    #[arg(long)]
    pub cookie: Option<String>,

    /// Accept-Language header.
    #[arg(long)]
    pub accept_language: Option<String>,
}
