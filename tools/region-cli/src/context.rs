//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use region_core::RegionCatalog;

use crate::output::Output;

const CATALOG_NAMES: [&str; 3] = ["regions.toml", ".regions.toml", "regions.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Validated region catalog.
    pub catalog: Arc<RegionCatalog>,
    /// Where the catalog was loaded from.
    pub catalog_path: PathBuf,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load the catalog from an explicit path or the nearest catalog file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let catalog_path = match config_path {
            Some(path) => PathBuf::from(path),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                match find_catalog(&cwd) {
                    Some(path) => path,
                    None => bail!(
                        "No region catalog found (looked for {} from {})",
                        CATALOG_NAMES.join(", "),
                        cwd.display()
                    ),
                }
            }
        };

        output.debug(&format!("Loading catalog from {}", catalog_path.display()));

        let catalog = RegionCatalog::load(&catalog_path)
            .with_context(|| format!("Invalid region catalog: {}", catalog_path.display()))?;

        Ok(Self {
            catalog: Arc::new(catalog),
            catalog_path,
            output,
        })
    }
}

/// Find a catalog file in the directory tree.
fn find_catalog(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CATALOG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../regions.toml");

    #[test]
    fn test_load_explicit_path() {
        let ctx = Context::load(Some(SAMPLE_CATALOG), Output::new(false, true)).unwrap();
        assert!(!ctx.catalog.is_empty());
        assert!(ctx.catalog_path.ends_with("regions.toml"));
    }

    #[test]
    fn test_load_missing_path() {
        let err = Context::load(Some("/nonexistent/regions.toml"), Output::new(false, true));
        assert!(err.is_err());
    }

    #[test]
    fn test_find_catalog_walks_up() {
        let nested = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
        let found = find_catalog(&nested).unwrap();
        assert!(found.is_file());
    }
}
