//! Builders turning stylesheet and script descriptors into renderable elements.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::link::resolve_asset_link;
use crate::models::{RenderElement, ScriptDescriptor, StylesheetAsset};
use crate::prefix::AssetsPrefix;

/// Element for a single stylesheet.
///
/// Inline CSS becomes the element body with no attributes; external stylesheets become
/// `rel="stylesheet"` links pointing at the resolved href.
pub fn build_stylesheet_element(
    stylesheet: &StylesheetAsset,
    base: Option<&str>,
    assets_prefix: &AssetsPrefix,
) -> RenderElement {
    match stylesheet {
        StylesheetAsset::Inline { content } => RenderElement {
            props: BTreeMap::new(),
            children: content.clone(),
        },
        StylesheetAsset::External { src } => RenderElement::new(
            [
                ("rel", "stylesheet".to_string()),
                ("href", resolve_asset_link(src, base, assets_prefix)),
            ],
            "",
        ),
    }
}

/// De-duplicated elements for every stylesheet in `stylesheets`.
pub fn build_stylesheet_elements<'a, I>(
    stylesheets: I,
    base: Option<&str>,
    assets_prefix: &AssetsPrefix,
) -> BTreeSet<RenderElement>
where
    I: IntoIterator<Item = &'a StylesheetAsset>,
{
    collect_elements(
        "stylesheet",
        stylesheets
            .into_iter()
            .map(|stylesheet| build_stylesheet_element(stylesheet, base, assets_prefix)),
    )
}

/// Element for a single module script.
pub fn build_module_script_element(
    script: &ScriptDescriptor,
    base: Option<&str>,
    assets_prefix: &AssetsPrefix,
) -> RenderElement {
    match script {
        ScriptDescriptor::External { value } => {
            build_module_script_element_with_src(value, base, assets_prefix)
        }
        ScriptDescriptor::Inline { value } => {
            RenderElement::new([("type", "module")], value.as_str())
        }
    }
}

/// `<script type="module">` element loading `src` after link resolution.
pub fn build_module_script_element_with_src(
    src: &str,
    base: Option<&str>,
    assets_prefix: &AssetsPrefix,
) -> RenderElement {
    RenderElement::new(
        [
            ("type", "module".to_string()),
            ("src", resolve_asset_link(src, base, assets_prefix)),
        ],
        "",
    )
}

/// De-duplicated module script elements for a list of bare source paths.
pub fn build_module_script_elements_with_src<I, S>(
    srcs: I,
    site: Option<&str>,
    assets_prefix: &AssetsPrefix,
) -> BTreeSet<RenderElement>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    collect_elements(
        "module script src",
        srcs
            .into_iter()
            .map(|src| build_module_script_element_with_src(src.as_ref(), site, assets_prefix)),
    )
}

/// De-duplicated module script elements for a list of script descriptors.
pub fn build_module_scripts<'a, I>(
    scripts: I,
    base: Option<&str>,
    assets_prefix: &AssetsPrefix,
) -> BTreeSet<RenderElement>
where
    I: IntoIterator<Item = &'a ScriptDescriptor>,
{
    collect_elements(
        "module script",
        scripts
            .into_iter()
            .map(|script| build_module_script_element(script, base, assets_prefix)),
    )
}

fn collect_elements(
    kind: &str,
    elements: impl Iterator<Item = RenderElement>,
) -> BTreeSet<RenderElement> {
    let mut built = 0usize;
    let set: BTreeSet<RenderElement> = elements.inspect(|_| built += 1).collect();
    if set.len() < built {
        debug!(kind, built, unique = set.len(), "collapsed duplicate elements");
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> AssetsPrefix {
        AssetsPrefix::None
    }

    #[test]
    fn inline_stylesheet_keeps_css_verbatim() {
        let element = build_stylesheet_element(
            &StylesheetAsset::inline("body{color:red}"),
            Some("/site"),
            &none(),
        );
        assert!(element.props.is_empty());
        assert_eq!(element.children, "body{color:red}");
    }

    #[test]
    fn external_stylesheet_links_resolved_href() {
        let stylesheet = StylesheetAsset::external("main.css");
        let element = build_stylesheet_element(&stylesheet, Some("/site"), &none());
        assert_eq!(
            element,
            RenderElement::new([("rel", "stylesheet"), ("href", "/site/main.css")], "")
        );
    }

    #[test]
    fn inline_css_is_not_escaped() {
        let css = "a::after{content:\"</style>\"}";
        let element = build_stylesheet_element(&StylesheetAsset::inline(css), None, &none());
        assert_eq!(element.children, css);
    }

    #[test]
    fn external_script_uses_src_builder() {
        let script = ScriptDescriptor::external("app.js");
        let element = build_module_script_element(&script, None, &none());
        assert_eq!(element, RenderElement::new([("type", "module"), ("src", "app.js")], ""));
        assert_eq!(element, build_module_script_element_with_src("app.js", None, &none()));
    }

    #[test]
    fn inline_script_is_module_body() {
        let element = build_module_script_element(
            &ScriptDescriptor::inline("import './a.js';"),
            Some("/site"),
            &AssetsPrefix::Literal("https://cdn".into()),
        );
        assert_eq!(element.props.len(), 1);
        assert_eq!(element.prop("type"), Some("module"));
        assert_eq!(element.children, "import './a.js';");
    }

    #[test]
    fn script_src_honours_prefix() {
        let element = build_module_script_element_with_src(
            "/_assets/app.js",
            Some("/site"),
            &AssetsPrefix::Literal("https://cdn.example.com/".into()),
        );
        assert_eq!(element.prop("src"), Some("https://cdn.example.com/_assets/app.js"));
        assert!(element.children.is_empty());
    }

    #[test]
    fn duplicate_stylesheets_collapse() {
        let stylesheets = vec![
            StylesheetAsset::external("main.css"),
            StylesheetAsset::external("main.css"),
            StylesheetAsset::inline("p{}"),
        ];
        let set = build_stylesheet_elements(&stylesheets, Some("/site"), &none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn distinct_inputs_resolving_to_same_link_collapse() {
        let stylesheets = vec![
            StylesheetAsset::external("/main.css"),
            StylesheetAsset::external("main.css"),
        ];
        let set = build_stylesheet_elements(&stylesheets, Some("/site"), &none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn script_src_batch_deduplicates() {
        let srcs = ["a.js", "b.js", "a.js"];
        let set = build_module_script_elements_with_src(srcs, Some("/site"), &none());
        let resolved: Vec<&str> = set.iter().filter_map(|element| element.prop("src")).collect();
        assert_eq!(resolved, vec!["/site/a.js", "/site/b.js"]);
    }

    #[test]
    fn script_batch_keeps_inline_and_external_apart() {
        let scripts = vec![
            ScriptDescriptor::inline("app.js"),
            ScriptDescriptor::external("app.js"),
            ScriptDescriptor::external("app.js"),
        ];
        let set = build_module_scripts(&scripts, None, &none());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_batches_are_empty() {
        let stylesheets: Vec<StylesheetAsset> = Vec::new();
        assert!(build_stylesheet_elements(&stylesheets, None, &none()).is_empty());
        assert!(build_module_scripts(&Vec::<ScriptDescriptor>::new(), None, &none()).is_empty());
        let srcs: Vec<String> = Vec::new();
        assert!(build_module_script_elements_with_src(srcs, None, &none()).is_empty());
    }

    #[test]
    fn batch_never_grows() {
        let stylesheets: Vec<StylesheetAsset> = (0..5)
            .map(|i| StylesheetAsset::external(format!("s{i}.css")))
            .collect();
        let set = build_stylesheet_elements(&stylesheets, None, &none());
        assert_eq!(set.len(), stylesheets.len());
    }
}
