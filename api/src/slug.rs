//! URL slug derivation for blog posts.

/// Turn a post title into a URL slug: lowercase, alphanumerics kept,
/// everything else collapsed into single hyphens.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "post".to_string()
    } else {
        slug
    }
}

/// Append `-2`, `-3`, ... until the slug is not in `taken`.
pub fn dedupe_slug(base: &str, taken: &[String]) -> String {
    if !taken.iter().any(|t| t == base) {
        return base.to_string();
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.iter().any(|t| t == &candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  Rust & WASM — notes  "), "rust-wasm-notes");
        assert_eq!(slugify("2024 in review"), "2024-in-review");
    }

    #[test]
    fn slugify_degenerate_titles() {
        assert_eq!(slugify("???"), "post");
        assert_eq!(slugify(""), "post");
    }

    #[test]
    fn dedupe_appends_counter() {
        let taken = vec!["intro".to_string(), "intro-2".to_string()];
        assert_eq!(dedupe_slug("intro", &taken), "intro-3");
        assert_eq!(dedupe_slug("fresh", &taken), "fresh");
    }
}
