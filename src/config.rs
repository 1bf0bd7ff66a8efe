//! Site configuration loader describing the base path and assets prefix.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::linker::AssetLinker;
use crate::prefix::AssetsPrefix;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "ssr-assets.config.json",
    "ssr-assets.config.yaml",
    "ssr-assets.config.yml",
];

/// Discoverable site configuration controlling how asset links are rendered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Base path the site is served from, e.g. `/docs`.
    pub base: Option<String>,
    /// Prefix applied to asset links ahead of the base.
    pub assets_prefix: Option<AssetsPrefixConfig>,
}

/// Serialisable form of [`AssetsPrefix`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AssetsPrefixConfig {
    /// One prefix for every asset.
    Literal(String),
    /// Prefix per file extension, with an optional `fallback` entry.
    ByExtension {
        /// Prefix used when no extension entry matches.
        #[serde(default)]
        fallback: Option<String>,
        /// Extension (without dot) to prefix.
        #[serde(flatten)]
        extensions: BTreeMap<String, String>,
    },
}

impl AssetsPrefixConfig {
    /// Convert into the runtime policy.
    pub fn to_assets_prefix(&self) -> AssetsPrefix {
        match self {
            Self::Literal(prefix) => AssetsPrefix::Literal(prefix.clone()),
            Self::ByExtension {
                fallback,
                extensions,
            } => AssetsPrefix::from_extension_map(extensions.clone(), fallback.clone()),
        }
    }
}

impl SiteConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// A missing file yields the defaults. A file that cannot be read or parsed is reported
    /// and the defaults are used, so rendering can continue without asset prefixes.
    pub fn discover(dir: &Path) -> Self {
        for name in DEFAULT_CONFIG_FILES {
            let candidate = dir.join(name);
            if !candidate.is_file() {
                continue;
            }

            return match Self::from_path(&candidate) {
                Ok(config) => {
                    debug!(path = %candidate.display(), "loaded site config");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %candidate.display(),
                        error = %format!("{err:#}"),
                        "ignoring invalid site config"
                    );
                    Self::default()
                }
            };
        }

        Self::default()
    }

    /// Read configuration from a specific JSON or YAML file, chosen by extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read site config {}", path.display()))?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse site config {}", path.display()))
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse site config {}", path.display()))
        }
    }

    /// Runtime prefix policy described by this configuration.
    pub fn assets_prefix(&self) -> AssetsPrefix {
        self.assets_prefix
            .as_ref()
            .map(AssetsPrefixConfig::to_assets_prefix)
            .unwrap_or_default()
    }

    /// Linker applying this configuration.
    pub fn linker(&self) -> AssetLinker {
        AssetLinker::new(self.base.as_deref(), self.assets_prefix())
    }
}
