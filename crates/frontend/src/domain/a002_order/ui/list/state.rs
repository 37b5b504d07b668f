use contracts::shared::filter::{DateRange, OrderFilter, Selection};
use leptos::prelude::*;

/// Orders page state. The date inputs keep the raw `yyyy-mm-dd` text and
/// rebuild the filter's range on every change.
#[derive(Clone, Debug, Default)]
pub struct OrderListState {
    pub filter: OrderFilter,
    pub start_input: String,
    pub end_input: String,
}

impl OrderListState {
    pub fn set_search(&mut self, term: String) {
        self.filter.search = term;
    }

    /// Unknown chip codes leave the current selection alone
    pub fn select_status(&mut self, code: &str) {
        if let Some(selection) = Selection::from_status_code(code) {
            self.filter.status = selection;
        }
    }

    pub fn set_start_input(&mut self, raw: String) {
        self.start_input = raw;
        self.sync_date_range();
    }

    pub fn set_end_input(&mut self, raw: String) {
        self.end_input = raw;
        self.sync_date_range();
    }

    fn sync_date_range(&mut self) {
        self.filter.date_range = DateRange::from_inputs(&self.start_input, &self.end_input);
    }

    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }

    pub fn clear_dates(&mut self) {
        self.start_input.clear();
        self.end_input.clear();
        self.filter.date_range.clear();
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::OrderStatus;
    use contracts::shared::filter::{apply_filter, FilterCriteria};

    #[test]
    fn test_status_chips() {
        let mut state = OrderListState::default();
        state.select_status("shipped");
        assert_eq!(state.filter.status, Selection::Only(OrderStatus::Shipped));

        state.select_status("returned");
        assert_eq!(state.filter.status, Selection::Only(OrderStatus::Shipped));

        state.select_status("all");
        assert_eq!(state.filter.status, Selection::All);
    }

    #[test]
    fn test_dates_filter_as_typed_once_both_set() {
        let mut state = OrderListState::default();
        state.set_start_input("2024-03-14".into());
        assert!(!state.filter.date_range.is_active());
        assert_eq!(state.filter.active_count(), 0);

        state.set_end_input("2024-03-15".into());
        assert!(state.filter.date_range.is_active());
        assert_eq!(state.filter.active_count(), 1);

        state.clear_dates();
        assert!(state.start_input.is_empty());
        assert!(!state.filter.date_range.is_active());
    }

    #[test]
    fn test_date_edit_narrows_orders_immediately() {
        let orders = contracts::sample_data::seed_orders();
        let mut state = OrderListState::default();
        state.set_start_input("2024-03-14".into());
        state.set_end_input("2024-03-14".into());

        let visible = apply_filter(&orders, &state.filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "ORD-002");

        state.set_end_input(String::new());
        assert_eq!(apply_filter(&orders, &state.filter).len(), orders.len());
    }
}
