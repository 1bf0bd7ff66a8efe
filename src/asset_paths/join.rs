/// Replace every backslash with a forward slash.
pub fn slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Prefix `path` with `/` unless it already starts with one.
pub fn prepend_forward_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Join path segments with single forward slashes.
///
/// The first segment loses one trailing slash, the last segment loses one leading slash
/// and segments in between lose one of each. Nothing else is normalised, so an empty
/// first segment yields a root-relative result (`["", "/a.js"]` joins to `/a.js`).
pub fn join_paths<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let segments: Vec<S> = segments.into_iter().collect();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let segment = segment.as_ref();
            if index == 0 {
                strip_trailing_slash(segment)
            } else if index == last {
                strip_leading_slash(segment)
            } else {
                strip_trailing_slash(strip_leading_slash(segment))
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn strip_leading_slash(segment: &str) -> &str {
    segment.strip_prefix('/').unwrap_or(segment)
}

fn strip_trailing_slash(segment: &str) -> &str {
    segment.strip_suffix('/').unwrap_or(segment)
}
