/// Trimmed, lower-cased form used for every comparison.
pub(crate) fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Lower-case alphanumerics joined by single dashes.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Display label with only the first character upper-cased.
pub(crate) fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  United Kingdom "), "united-kingdom");
        assert_eq!(slugify("MIT -- Sloan (MBA)"), "mit-sloan-mba");
        assert_eq!(slugify("Türkiye"), "türkiye");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn capitalize_first_leaves_rest_untouched() {
        assert_eq!(capitalize_first("master"), "Master");
        assert_eq!(capitalize_first("phD"), "PhD");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn normalize_key_trims_and_lowercases() {
        assert_eq!(normalize_key("  Turkey "), "turkey");
    }
}
