//! Resolve the URL an asset reference should have in rendered HTML.

use crate::asset_paths::{file_extension, join_paths, prepend_forward_slash, slash};
use crate::prefix::{AssetsPrefix, PrefixFn};

/// Compute the final link for `href`.
///
/// The first matching rule wins:
/// 1. a literal prefix is joined with the slash-normalised href, ignoring `base`;
/// 2. an extension policy is asked for a prefix based on the href's extension and the
///    answer (empty when it has none) is joined the same way;
/// 3. a non-empty `base` is joined with the href and forced to start with `/`;
/// 4. otherwise `href` is returned untouched.
pub fn resolve_asset_link(href: &str, base: Option<&str>, assets_prefix: &AssetsPrefix) -> String {
    match assets_prefix {
        AssetsPrefix::Literal(prefix) => join_paths([prefix.as_str(), slash(href).as_str()]),
        AssetsPrefix::ByExtension(lookup) => {
            let prefix = extension_prefix(lookup.as_ref(), &file_extension(href));
            join_paths([prefix, slash(href)])
        }
        AssetsPrefix::None => match base.filter(|base| !base.is_empty()) {
            Some(base) => prepend_forward_slash(&join_paths([base, slash(href).as_str()])),
            None => href.to_string(),
        },
    }
}

/// Falsy answers from the lookup collapse to an empty prefix.
fn extension_prefix(lookup: &PrefixFn, extension: &str) -> String {
    lookup(extension).unwrap_or_default()
}
