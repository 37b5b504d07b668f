use crate::shared::components::charts::{BarChart, ChartSeries, HorizontalBarChart, LineChart};
use crate::shared::components::page_header::PageTitle;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::sample_data;
use contracts::shared::router::Page;
use leptos::prelude::*;

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let sales = sample_data::sales_series();
    let months: Vec<String> = sales.iter().map(|p| p.month.clone()).collect();
    let revenue = ChartSeries {
        name: "Sales ($)".into(),
        color: "#10B981",
        values: sales.iter().map(|p| p.sales).collect(),
    };
    let volume: Vec<f64> = sales.iter().map(|p| f64::from(p.orders)).collect();

    let top = sample_data::top_products();
    let top_names: Vec<String> = top.iter().map(|p| p.name.clone()).collect();
    let top_sales: Vec<f64> = top.iter().map(|p| f64::from(p.sales)).collect();

    view! {
        <PageFrame page_id="d401_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageTitle page=Page::Analytics />

            <div class="page__content">
                <div class="dashboard-grid">
                    <div class="dashboard-card">
                        <h2 class="dashboard-card__title">"Sales Overview"</h2>
                        <LineChart labels=months.clone() series=vec![revenue] />
                    </div>
                    <div class="dashboard-card">
                        <h2 class="dashboard-card__title">"Order Volume"</h2>
                        <BarChart labels=months values=volume color="#8B5CF6" />
                    </div>
                    <div class="dashboard-card dashboard-card--wide">
                        <h2 class="dashboard-card__title">"Top Products"</h2>
                        <HorizontalBarChart labels=top_names values=top_sales color="#3B82F6" />
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
