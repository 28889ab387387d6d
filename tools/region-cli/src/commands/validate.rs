//! Catalog validation command.

use anyhow::Result;
use serde_json::json;

use crate::context::Context;

/// Run the validate command.
///
/// Loading the context already validated the catalog; this reports on it.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = &ctx.catalog;
    let default = catalog.default_region();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "valid": true,
            "path": ctx.catalog_path.display().to_string(),
            "regions": catalog.len(),
            "default_region": default.id,
        }));
        return Ok(());
    }

    ctx.output.success(&format!(
        "{} is valid ({} regions)",
        ctx.catalog_path.display(),
        catalog.len()
    ));
    ctx.output.kv("default region", &format!("{} ({})", default.id, default.name));

    if catalog.len() == 1 {
        ctx.output
            .warn("Only one region configured; every host resolves to it.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;

    const SAMPLE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../regions.toml");

    #[test]
    fn test_validate_sample_catalog() {
        for json in [true, false] {
            let ctx = Context::load(Some(SAMPLE_CATALOG), Output::new(false, json)).unwrap();
            assert!(run(&ctx).is_ok());
        }
    }
}
