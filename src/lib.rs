#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(clippy::module_inception)]

pub mod asset_paths;
pub mod config;
pub mod elements;
pub mod link;
pub mod linker;
pub mod manifest;
pub mod models;
pub mod prefix;

pub use config::{AssetsPrefixConfig, SiteConfig};
pub use elements::{
    build_module_script_element, build_module_script_element_with_src,
    build_module_script_elements_with_src, build_module_scripts, build_stylesheet_element,
    build_stylesheet_elements,
};
pub use link::resolve_asset_link;
pub use linker::AssetLinker;
pub use manifest::{RenderManifest, RenderedAssets, load_manifest};
pub use models::{RenderElement, ScriptDescriptor, StylesheetAsset};
pub use prefix::AssetsPrefix;
