//! Client-side filtering of list views.
//!
//! Every list page keeps its canonical collection untouched and derives the
//! visible rows with [`apply_filter`]: the ordered subsequence of records that
//! satisfy all active predicates of the page's criteria.

use crate::domain::a001_product::Product;
use crate::domain::a002_order::Order;
use crate::enums::product_category::ALL_CATEGORIES;
use crate::enums::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel code of the status filter that disables the status predicate
pub const ALL_STATUSES: &str = "all";

/// Date format of `<input type="date">` values
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Record capabilities
// ============================================================================

/// Records that take part in free-text search
pub trait Searchable {
    /// Fields the search term is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any search field.
    /// An empty term matches everything.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Records that carry a calendar date
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// A set of predicates over records of type `T`
pub trait FilterCriteria<T> {
    /// `true` when the record passes every active predicate
    fn matches(&self, record: &T) -> bool;

    /// Number of predicates that currently narrow the result
    fn active_count(&self) -> usize;
}

/// Ordered subsequence of `records` accepted by `criteria`.
///
/// The input slice is never modified; no matches yields an empty vector.
pub fn apply_filter<T, C>(records: &[T], criteria: &C) -> Vec<T>
where
    T: Clone,
    C: FilterCriteria<T> + ?Sized,
{
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

// ============================================================================
// Predicate building blocks
// ============================================================================

/// Single-choice selection with an "everything" sentinel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }
}

impl Selection<String> {
    /// Category chip label; the "All Categories" sentinel selects everything
    pub fn from_category_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Selection::All
        } else {
            Selection::Only(label.to_string())
        }
    }

    pub fn category_label(&self) -> &str {
        match self {
            Selection::All => ALL_CATEGORIES,
            Selection::Only(category) => category,
        }
    }
}

impl Selection<OrderStatus> {
    /// Status chip code; `"all"` selects everything, unknown codes yield `None`
    pub fn from_status_code(code: &str) -> Option<Self> {
        if code == ALL_STATUSES {
            return Some(Selection::All);
        }
        OrderStatus::from_code(code).map(Selection::Only)
    }

    pub fn status_code(&self) -> &'static str {
        match self {
            Selection::All => ALL_STATUSES,
            Selection::Only(status) => status.code(),
        }
    }
}

/// Inclusive date range. Filters only when both bounds are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build from raw `yyyy-mm-dd` inputs. Empty or unparsable bounds count as absent.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_date_input(start),
            end: parse_date_input(end),
        }
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Vacuously `true` unless both bounds are present
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}

fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT).ok()
}

// ============================================================================
// Page criteria
// ============================================================================

/// Inventory page criteria: search over name and SKU plus a category chip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub search: String,
    pub category: Selection<String>,
}

impl ProductFilter {
    pub fn new(search: impl Into<String>, category_label: &str) -> Self {
        Self {
            search: search.into(),
            category: Selection::from_category_label(category_label),
        }
    }
}

impl FilterCriteria<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        product.matches_search(&self.search) && self.category.matches(&product.category)
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty()) + usize::from(self.category.is_active())
    }
}

/// Orders page criteria: search over id and customer, status chip, date range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub search: String,
    pub status: Selection<OrderStatus>,
    pub date_range: DateRange,
}

impl FilterCriteria<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        order.matches_search(&self.search)
            && self.status.matches(&order.status)
            && self.date_range.contains(order.date())
    }

    fn active_count(&self) -> usize {
        usize::from(!self.search.is_empty())
            + usize::from(self.status.is_active())
            + usize::from(self.date_range.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order::{OrderId, OrderItem};
    use crate::domain::a001_product::ProductId;
    use crate::sample_data::{seed_orders, seed_products};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(id: &str, status: OrderStatus, day: NaiveDate) -> Order {
        Order {
            id: OrderId::new(id),
            customer_name: format!("Customer {id}"),
            status,
            date: day,
            total: 10.0,
            items: vec![OrderItem {
                product_id: ProductId::new("1"),
                quantity: 1,
                price: 10.0,
            }],
            shipping_address: String::new(),
            tracking_number: None,
        }
    }

    fn first_search_field<T: Searchable>(records: &[T]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.search_fields()[0].to_string())
            .collect()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let products = seed_products();
        assert_eq!(apply_filter(&products, &ProductFilter::default()), products);

        let orders = seed_orders();
        let criteria = OrderFilter {
            search: String::new(),
            status: Selection::from_status_code("all").unwrap(),
            date_range: DateRange::from_inputs("", ""),
        };
        assert_eq!(apply_filter(&orders, &criteria), orders);
        assert_eq!(criteria.active_count(), 0);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_sku() {
        let products = seed_products();

        let by_name = apply_filter(&products, &ProductFilter::new("BAMBOO", ALL_CATEGORIES));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].sku, "BTB001");

        let by_sku = apply_filter(&products, &ProductFilter::new("rwb", ALL_CATEGORIES));
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].name, "Reusable Water Bottle");

        for term in ["o", "B0", "cotton", "zzz"] {
            let result = apply_filter(&products, &ProductFilter::new(term, ALL_CATEGORIES));
            let needle = term.to_lowercase();
            assert!(result.iter().all(|p| {
                p.name.to_lowercase().contains(&needle) || p.sku.to_lowercase().contains(&needle)
            }));
        }
    }

    #[test]
    fn test_category_selection_is_exact() {
        let products = seed_products();
        let kitchen = apply_filter(&products, &ProductFilter::new("", "Kitchen"));
        assert_eq!(first_search_field(&kitchen), vec!["Reusable Water Bottle"]);

        let partial = apply_filter(&products, &ProductFilter::new("", "Kitch"));
        assert!(partial.is_empty());
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let products = seed_products();
        let result = apply_filter(&products, &ProductFilter::new("nothing like this", "Cleaning"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_status_filter_scenario() {
        let orders = vec![
            order("ORD-001", OrderStatus::Processing, date(2024, 3, 15)),
            order("ORD-002", OrderStatus::Shipped, date(2024, 3, 14)),
        ];
        let criteria = OrderFilter {
            status: Selection::from_status_code("shipped").unwrap(),
            ..OrderFilter::default()
        };

        let result = apply_filter(&orders, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "ORD-002");
    }

    #[test]
    fn test_unknown_status_code_is_rejected() {
        assert_eq!(Selection::<OrderStatus>::from_status_code("lost"), None);
        assert_eq!(Selection::<OrderStatus>::from_status_code("SHIPPED"), None);
        assert_eq!(Selection::<OrderStatus>::from_status_code("ALL"), None);
        assert_eq!(Selection::<OrderStatus>::Only(OrderStatus::Shipped).status_code(), "shipped");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let orders = seed_orders();
        let criteria = OrderFilter {
            date_range: DateRange::from_inputs("2024-03-13", "2024-03-14"),
            ..OrderFilter::default()
        };

        let result = apply_filter(&orders, &criteria);
        assert_eq!(result.len(), 2);
        assert!(result
            .iter()
            .all(|o| o.date >= date(2024, 3, 13) && o.date <= date(2024, 3, 14)));
    }

    #[test]
    fn test_half_open_date_range_does_not_filter() {
        let orders = seed_orders();
        for range in [
            DateRange::from_inputs("2024-03-15", ""),
            DateRange::from_inputs("", "2024-03-13"),
            DateRange::from_inputs("not-a-date", "2024-03-13"),
        ] {
            assert!(!range.is_active());
            let criteria = OrderFilter {
                date_range: range,
                ..OrderFilter::default()
            };
            assert_eq!(apply_filter(&orders, &criteria).len(), orders.len());
        }
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let orders = seed_orders();
        let criteria = OrderFilter {
            date_range: DateRange::from_inputs("2024-03-15", "2024-03-13"),
            ..OrderFilter::default()
        };
        assert!(apply_filter(&orders, &criteria).is_empty());
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let orders = seed_orders();
        let criteria = OrderFilter {
            search: "emma".into(),
            status: Selection::Only(OrderStatus::Delivered),
            date_range: DateRange::from_inputs("2024-03-01", "2024-03-31"),
        };
        assert_eq!(criteria.active_count(), 3);

        let result = apply_filter(&orders, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id.as_str(), "ORD-003");

        let mismatched = OrderFilter {
            status: Selection::Only(OrderStatus::Pending),
            ..criteria
        };
        assert!(apply_filter(&orders, &mismatched).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_and_order_preserving() {
        let orders = seed_orders();
        let criteria = OrderFilter {
            search: "ORD-00".into(),
            ..OrderFilter::default()
        };

        let once = apply_filter(&orders, &criteria);
        let twice = apply_filter(&once, &criteria);
        assert_eq!(once, twice);

        let positions: Vec<usize> = once
            .iter()
            .map(|o| orders.iter().position(|c| c.id == o.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_leaves_canonical_collection_untouched() {
        let products = seed_products();
        let before = products.clone();
        let _ = apply_filter(&products, &ProductFilter::new("bag", "Shopping"));
        assert_eq!(products, before);
    }
}
