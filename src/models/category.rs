//! Category normalization
//!
//! Categories are free text, so "food", "Food" and "FOOD" must all land on
//! the same bucket. Normalization happens once, at the boundary where entries
//! and goals are constructed; everything downstream (aggregation, goal
//! lookups, persistence) sees only normalized names.

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "General";

/// Description assigned when none is given
pub const DEFAULT_DESCRIPTION: &str = "(no description)";

/// Normalize a free-text category label: trim surrounding whitespace, then
/// capitalize (first character uppercased, the rest lowercased).
///
/// Empty or whitespace-only input is treated as absent and falls back to
/// [`DEFAULT_CATEGORY`].
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_CATEGORY.to_string();
    }

    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => DEFAULT_CATEGORY.to_string(),
    }
}

/// Resolve an optional category to its normalized form, applying the default
/// when absent.
pub fn resolve_category(category: Option<&str>) -> String {
    match category {
        Some(raw) => normalize_category(raw),
        None => DEFAULT_CATEGORY.to_string(),
    }
}

/// Resolve an optional description, applying the default placeholder when
/// absent or blank.
pub fn resolve_description(description: Option<&str>) -> String {
    match description.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => DEFAULT_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_capitalizes() {
        assert_eq!(normalize_category("food"), "Food");
        assert_eq!(normalize_category("FOOD"), "Food");
        assert_eq!(normalize_category("fOoD"), "Food");
        assert_eq!(normalize_category("Food"), "Food");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_category("  rent "), "Rent");
    }

    #[test]
    fn test_normalize_empty_falls_back() {
        assert_eq!(normalize_category(""), DEFAULT_CATEGORY);
        assert_eq!(normalize_category("   "), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize_category("épicerie"), "Épicerie");
    }

    #[test]
    fn test_resolve_category() {
        assert_eq!(resolve_category(None), "General");
        assert_eq!(resolve_category(Some("housing")), "Housing");
    }

    #[test]
    fn test_resolve_description() {
        assert_eq!(resolve_description(None), DEFAULT_DESCRIPTION);
        assert_eq!(resolve_description(Some("")), DEFAULT_DESCRIPTION);
        assert_eq!(resolve_description(Some("Groceries")), "Groceries");
    }
}
