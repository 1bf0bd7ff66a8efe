//! Loading a page's render manifest and turning it into element sets.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::linker::AssetLinker;
use crate::models::{RenderElement, ScriptDescriptor, StylesheetAsset};

/// Stylesheets and scripts a rendered page depends on.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderManifest {
    /// Stylesheets, inline or external.
    pub styles: Vec<StylesheetAsset>,
    /// Module scripts, inline or external.
    pub scripts: Vec<ScriptDescriptor>,
    /// Bare module script sources.
    pub script_srcs: Vec<String>,
}

/// Element sets ready to be placed in the page head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedAssets {
    /// Stylesheet elements.
    pub styles: BTreeSet<RenderElement>,
    /// Module script elements from both descriptors and bare sources.
    pub scripts: BTreeSet<RenderElement>,
}

impl RenderManifest {
    /// Build the de-duplicated element sets for this manifest.
    pub fn render(&self, linker: &AssetLinker) -> RenderedAssets {
        let styles = linker.stylesheet_elements(&self.styles);
        let mut scripts = linker.module_scripts(&self.scripts);
        scripts.extend(linker.module_script_elements_with_src(&self.script_srcs));

        debug!(
            styles = styles.len(),
            scripts = scripts.len(),
            "rendered manifest assets"
        );

        RenderedAssets { styles, scripts }
    }
}

/// Load a render manifest from disk.
pub fn load_manifest(path: &Path) -> Result<RenderManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("manifest not found at {}", path.display()))?;
    let manifest: RenderManifest =
        serde_json::from_str(&content).context("failed to parse render manifest JSON")?;
    Ok(manifest)
}
