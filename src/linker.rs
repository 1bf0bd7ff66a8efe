//! Render-pass helper bundling the site base with the assets prefix policy.

use std::collections::BTreeSet;

use crate::elements::{
    build_module_script_element, build_module_script_element_with_src,
    build_module_script_elements_with_src, build_module_scripts, build_stylesheet_element,
    build_stylesheet_elements,
};
use crate::link::resolve_asset_link;
use crate::models::{RenderElement, ScriptDescriptor, StylesheetAsset};
use crate::prefix::AssetsPrefix;

/// Site-level link configuration applied to every asset of a render pass.
#[derive(Debug, Clone, Default)]
pub struct AssetLinker {
    base: Option<String>,
    assets_prefix: AssetsPrefix,
}

impl AssetLinker {
    /// Create a linker for the given base path and prefix policy.
    pub fn new(base: Option<&str>, assets_prefix: AssetsPrefix) -> Self {
        Self {
            base: base.map(str::to_string),
            assets_prefix,
        }
    }

    /// Configured site base.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Configured prefix policy.
    pub fn assets_prefix(&self) -> &AssetsPrefix {
        &self.assets_prefix
    }

    /// Replace the site base.
    pub fn with_base(mut self, base: Option<&str>) -> Self {
        self.base = base.map(str::to_string);
        self
    }

    /// Replace the prefix policy.
    pub fn with_assets_prefix(mut self, assets_prefix: AssetsPrefix) -> Self {
        self.assets_prefix = assets_prefix;
        self
    }

    /// See [`resolve_asset_link`].
    pub fn link(&self, href: &str) -> String {
        resolve_asset_link(href, self.base(), &self.assets_prefix)
    }

    /// See [`build_stylesheet_element`].
    pub fn stylesheet_element(&self, stylesheet: &StylesheetAsset) -> RenderElement {
        build_stylesheet_element(stylesheet, self.base(), &self.assets_prefix)
    }

    /// See [`build_stylesheet_elements`].
    pub fn stylesheet_elements<'a, I>(&self, stylesheets: I) -> BTreeSet<RenderElement>
    where
        I: IntoIterator<Item = &'a StylesheetAsset>,
    {
        build_stylesheet_elements(stylesheets, self.base(), &self.assets_prefix)
    }

    /// See [`build_module_script_element`].
    pub fn module_script_element(&self, script: &ScriptDescriptor) -> RenderElement {
        build_module_script_element(script, self.base(), &self.assets_prefix)
    }

    /// See [`build_module_script_element_with_src`].
    pub fn module_script_element_with_src(&self, src: &str) -> RenderElement {
        build_module_script_element_with_src(src, self.base(), &self.assets_prefix)
    }

    /// See [`build_module_script_elements_with_src`].
    pub fn module_script_elements_with_src<I, S>(&self, srcs: I) -> BTreeSet<RenderElement>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        build_module_script_elements_with_src(srcs, self.base(), &self.assets_prefix)
    }

    /// See [`build_module_scripts`].
    pub fn module_scripts<'a, I>(&self, scripts: I) -> BTreeSet<RenderElement>
    where
        I: IntoIterator<Item = &'a ScriptDescriptor>,
    {
        build_module_scripts(scripts, self.base(), &self.assets_prefix)
    }
}
