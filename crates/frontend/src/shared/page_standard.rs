//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{page}--{category}`
//! (e.g. `"a001_product--list"`) and a `data-page-category` attribute.

/// List of records with search and filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Integration and account settings.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{page}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((page, category)) => !page.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_order--list"));
        assert!(!is_valid_page_id("a002_order"));
        assert!(!is_valid_page_id("--list"));
    }
}
