/// Sentinel label of the category filter that disables the category predicate
pub const ALL_CATEGORIES: &str = "All Categories";

/// Categories offered by the "Add Product" form, in display order.
///
/// Product categories stay plain strings on the model; this list only drives
/// the select options and the filter chips.
pub const PRODUCT_CATEGORIES: [&str; 5] = [
    "Personal Care",
    "Kitchen",
    "Shopping",
    "Home Decor",
    "Cleaning",
];

/// Filter chip labels: the sentinel followed by every product category
pub fn category_filter_options() -> Vec<&'static str> {
    std::iter::once(ALL_CATEGORIES)
        .chain(PRODUCT_CATEGORIES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_options_start_with_sentinel() {
        let options = category_filter_options();
        assert_eq!(options.first(), Some(&ALL_CATEGORIES));
        assert_eq!(options.len(), PRODUCT_CATEGORIES.len() + 1);
    }

    #[test]
    fn test_sentinel_is_not_a_product_category() {
        assert!(!PRODUCT_CATEGORIES.contains(&ALL_CATEGORIES));
    }
}
