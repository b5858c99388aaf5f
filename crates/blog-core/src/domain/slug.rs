use unicode_normalization::UnicodeNormalization;

/// Turn a human-readable name into a URL-safe slug.
///
/// Accented letters are folded to ASCII through NFKD decomposition. The
/// result is lowercased, keeps ASCII alphanumerics, `_` and `-`, collapses
/// runs of whitespace and hyphens into a single `-` and drops everything
/// else. Leading and trailing `-`/`_` are trimmed.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;

    for c in value.nfkd().filter(char::is_ascii).map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_separator = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}
