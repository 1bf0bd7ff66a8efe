use std::sync::OnceLock;

use regex::Regex;

fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^/]\.([^./]+)$").expect("invalid extension regex"))
}

/// Extract the lower-cased file extension of the last segment of `path`.
///
/// Query strings and fragments are ignored. Dotfiles such as `.env` and names ending in a
/// dot have no extension, in which case an empty string is returned.
pub fn file_extension(path: &str) -> String {
    let clean = path.split(['?', '#']).next().unwrap_or_default();

    extension_pattern()
        .captures(clean)
        .and_then(|caps| caps.get(1))
        .map(|ext| ext.as_str().to_ascii_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::file_extension;

    #[test]
    fn extracts_simple_extensions() {
        assert_eq!(file_extension("main.css"), "css");
        assert_eq!(file_extension("/_assets/chunks/app.4f2a.js"), "js");
    }

    #[test]
    fn lower_cases_extensions() {
        assert_eq!(file_extension("Logo.SVG"), "svg");
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(file_extension("app.mjs?v=3"), "mjs");
        assert_eq!(file_extension("sprite.svg#icon.home"), "svg");
    }

    #[test]
    fn returns_empty_without_extension() {
        assert_eq!(file_extension("LICENSE"), "");
        assert_eq!(file_extension("/.well-known/.env"), "");
        assert_eq!(file_extension("trailing."), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn only_inspects_last_segment() {
        assert_eq!(file_extension("v1.2/readme"), "");
        assert_eq!(file_extension("bundle.tar.gz"), "gz");
    }
}
