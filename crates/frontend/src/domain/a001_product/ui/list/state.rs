use contracts::shared::filter::{ProductFilter, Selection};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct ProductListState {
    pub filter: ProductFilter,
}

impl ProductListState {
    pub fn set_search(&mut self, term: String) {
        self.filter.search = term;
    }

    pub fn select_category(&mut self, label: &str) {
        self.filter.category = Selection::from_category_label(label);
    }

    pub fn clear_filters(&mut self) {
        self.filter = ProductFilter::default();
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::product_category::ALL_CATEGORIES;
    use contracts::shared::filter::FilterCriteria;

    #[test]
    fn test_category_chip_round_trip() {
        let mut state = ProductListState::default();
        state.select_category("Kitchen");
        assert_eq!(state.filter.category.category_label(), "Kitchen");
        assert_eq!(state.filter.active_count(), 1);

        state.select_category(ALL_CATEGORIES);
        assert_eq!(state.filter.category, Selection::All);
        assert_eq!(state.filter.active_count(), 0);
    }

    #[test]
    fn test_clear_filters() {
        let mut state = ProductListState::default();
        state.set_search("soap".into());
        state.select_category("Cleaning");
        assert_eq!(state.filter.active_count(), 2);

        state.clear_filters();
        assert_eq!(state.filter, ProductFilter::default());
    }
}
