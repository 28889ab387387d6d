//! Market, currency and language resolution for the multi-region storefront.
//!
//! This crate decides which market applies to a request and what the
//! commerce API clients must send upstream:
//!
//! - **Catalog**: the validated, read-only list of regions and languages
//! - **Resolver**: per-session current region and language
//! - **Context**: one-shot resolution from request headers, cookies and query
//! - **Channel**: channel, currency and language parameters for API calls
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use region_core::prelude::*;
//!
//! let catalog = Arc::new(RegionCatalog::load("regions.toml")?);
//!
//! // One resolver per request or session
//! let mut resolver = RegionResolver::for_host(catalog.clone(), "be.domain.com:8443");
//! resolver.set_region("de");
//!
//! let channel = ChannelContext::from(&resolver);
//! let variables = channel.merge_graphql_variables(serde_json::json!({ "slug": "shoes" }));
//! ```

pub mod catalog;
pub mod channel;
pub mod config;
pub mod context;
pub mod currency;
pub mod error;
pub mod host;
pub mod ids;
pub mod language;
pub mod persistence;
pub mod region;
pub mod resolver;

pub use catalog::RegionCatalog;
pub use channel::ChannelContext;
pub use config::CatalogConfig;
pub use context::RegionContext;
pub use currency::Currency;
pub use error::{RegionError, RegionResult};
pub use ids::*;
pub use language::{Language, LanguageCode};
pub use persistence::OverridePolicy;
pub use region::{Region, RegionSummary};
pub use resolver::{RegionResolver, ResolutionSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::RegionCatalog;
    pub use crate::channel::ChannelContext;
    pub use crate::context::RegionContext;
    pub use crate::currency::Currency;
    pub use crate::error::{RegionError, RegionResult};
    pub use crate::ids::*;
    pub use crate::language::{Language, LanguageCode};
    pub use crate::persistence::OverridePolicy;
    pub use crate::region::{Region, RegionSummary};
    pub use crate::resolver::{RegionResolver, ResolutionSource};
}
