use contracts::domain::a001_product::ProductCatalog;
use contracts::domain::a002_order::Order;
use contracts::sample_data;
use contracts::shared::config::DashboardConfig;
use contracts::shared::router::{Page, PageRouter};
use leptos::prelude::*;

/// App-wide store: current page, configuration and the in-memory collections.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub router: RwSignal<PageRouter>,
    pub left_open: RwSignal<bool>,
    pub config: StoredValue<DashboardConfig>,
    /// Canonical product collection; only the product form appends to it
    pub catalog: RwSignal<ProductCatalog>,
    /// Seeded orders, read-only
    pub orders: StoredValue<Vec<Order>>,
}

impl AppGlobalContext {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            router: RwSignal::new(PageRouter::new()),
            left_open: RwSignal::new(true),
            config: StoredValue::new(config),
            catalog: RwSignal::new(sample_data::seed_catalog()),
            orders: StoredValue::new(sample_data::seed_orders()),
        }
    }

    /// Current page, tracked
    pub fn page(&self) -> Page {
        self.router.with(|r| r.resolve())
    }

    pub fn select_page(&self, key: &str) {
        leptos::logging::log!("select_page: key='{}'", key);
        self.router.update(|r| {
            r.select_page(key);
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
