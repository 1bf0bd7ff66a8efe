//! Assets prefix policy applied before falling back to the site base.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Prefix lookup keyed by file extension (without the leading dot).
pub type PrefixFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// Where rendered asset links should point.
#[derive(Clone, Default)]
pub enum AssetsPrefix {
    /// No prefix configured; the site base (if any) applies.
    #[default]
    None,
    /// A single prefix such as a CDN origin used for every asset.
    Literal(String),
    /// A prefix chosen per file extension. `None` or an empty string means "no prefix".
    ByExtension(Arc<PrefixFn>),
}

impl AssetsPrefix {
    /// Wrap a closure as an extension-keyed prefix policy.
    pub fn by_extension<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self::ByExtension(Arc::new(lookup))
    }

    /// Build an extension-keyed policy from a lookup table with an optional fallback.
    ///
    /// Keys are compared case-insensitively against the extracted extension.
    pub fn from_extension_map(map: BTreeMap<String, String>, fallback: Option<String>) -> Self {
        let map: BTreeMap<String, String> = map
            .into_iter()
            .map(|(ext, prefix)| (ext.trim_start_matches('.').to_ascii_lowercase(), prefix))
            .collect();

        Self::by_extension(move |ext| map.get(ext).cloned().or_else(|| fallback.clone()))
    }

    /// Whether no prefix is configured.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for AssetsPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Literal(prefix) => f.debug_tuple("Literal").field(prefix).finish(),
            Self::ByExtension(_) => f.write_str("ByExtension(..)"),
        }
    }
}

impl From<String> for AssetsPrefix {
    fn from(prefix: String) -> Self {
        Self::Literal(prefix)
    }
}

impl From<&str> for AssetsPrefix {
    fn from(prefix: &str) -> Self {
        Self::Literal(prefix.to_string())
    }
}

impl<T: Into<AssetsPrefix>> From<Option<T>> for AssetsPrefix {
    fn from(prefix: Option<T>) -> Self {
        prefix.map(Into::into).unwrap_or_default()
    }
}
