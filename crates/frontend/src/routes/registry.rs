//! Page registry: the single place mapping a [`Page`] to its view.

use crate::dashboards::{AnalyticsDashboard, SustainabilityDashboard};
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_order::ui::list::OrderList;
use crate::system::settings::ui::SettingsPage;
use contracts::shared::router::Page;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content area for `page`
pub fn render_page(page: Page) -> AnyView {
    log!("render_page: {}", page);
    match page {
        Page::Dashboard => view! { <SustainabilityDashboard /> }.into_any(),
        Page::Inventory => view! { <ProductList /> }.into_any(),
        Page::Orders => view! { <OrderList /> }.into_any(),
        Page::Analytics => view! { <AnalyticsDashboard /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}
