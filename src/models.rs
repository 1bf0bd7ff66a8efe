//! Descriptors consumed by the element builders and the element records they produce.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A stylesheet attached to a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StylesheetAsset {
    /// CSS text emitted inside a `<style>` element.
    Inline {
        /// Literal stylesheet contents.
        content: String,
    },
    /// A stylesheet loaded through `<link rel="stylesheet">`.
    External {
        /// Asset path as produced by the bundler.
        src: String,
    },
}

impl StylesheetAsset {
    /// Inline stylesheet from literal CSS.
    pub fn inline(content: impl Into<String>) -> Self {
        Self::Inline {
            content: content.into(),
        }
    }

    /// External stylesheet referenced by path.
    pub fn external(src: impl Into<String>) -> Self {
        Self::External { src: src.into() }
    }
}

/// A module script attached to a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptDescriptor {
    /// Script text emitted inside the `<script>` element.
    Inline {
        /// Literal script source.
        value: String,
    },
    /// A script loaded through its `src` attribute.
    External {
        /// Asset path as produced by the bundler.
        value: String,
    },
}

impl ScriptDescriptor {
    /// Inline module script from literal source.
    pub fn inline(value: impl Into<String>) -> Self {
        Self::Inline {
            value: value.into(),
        }
    }

    /// External module script referenced by path.
    pub fn external(value: impl Into<String>) -> Self {
        Self::External {
            value: value.into(),
        }
    }
}

/// Attributes and body of an element ready for the HTML serializer.
///
/// Attributes live in a `BTreeMap` so serialized output is deterministic, and the whole
/// record compares by value so batches can be collected into sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RenderElement {
    /// Attribute name to value.
    pub props: BTreeMap<String, String>,
    /// Element body; empty when the element is fully described by its attributes.
    pub children: String,
}

impl RenderElement {
    /// Element with the given attributes and body.
    pub fn new<I, K, V>(props: I, children: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            props: props
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            children: children.into(),
        }
    }

    /// Look up a single attribute.
    pub fn prop(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_descriptors_use_tagged_json() {
        let inline: StylesheetAsset =
            serde_json::from_str(r#"{"type":"inline","content":"body{margin:0}"}"#).unwrap();
        assert_eq!(inline, StylesheetAsset::inline("body{margin:0}"));

        let external: StylesheetAsset =
            serde_json::from_str(r#"{"type":"external","src":"/_assets/main.css"}"#).unwrap();
        assert_eq!(external, StylesheetAsset::external("/_assets/main.css"));
    }

    #[test]
    fn script_descriptors_share_value_field() {
        let scripts: Vec<ScriptDescriptor> = serde_json::from_str(
            r#"[{"type":"inline","value":"console.log(1)"},{"type":"external","value":"app.js"}]"#,
        )
        .unwrap();
        assert_eq!(scripts, vec![
            ScriptDescriptor::inline("console.log(1)"),
            ScriptDescriptor::external("app.js"),
        ]);
    }

    #[test]
    fn unknown_descriptor_type_is_rejected() {
        let result = serde_json::from_str::<StylesheetAsset>(r#"{"type":"remote","src":"x.css"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn elements_serialize_with_sorted_props() {
        let element = RenderElement::new([("type", "module"), ("src", "/app.js")], "");
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(json, r#"{"props":{"src":"/app.js","type":"module"},"children":""}"#);
        assert_eq!(element.prop("src"), Some("/app.js"));
        assert_eq!(element.prop("href"), None);
    }
}
