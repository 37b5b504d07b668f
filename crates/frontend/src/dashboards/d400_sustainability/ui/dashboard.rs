use crate::layout::global_context::use_app_context;
use crate::shared::components::badge::Badge;
use crate::shared::components::charts::{ChartSeries, LineChart};
use crate::shared::components::page_header::PageTitle;
use crate::shared::components::stat_card::IndicatorCard;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_sustainability::{EcoRating, RecentOrder, SustainabilityPoint};
use contracts::enums::OrderStatus;
use contracts::sample_data;
use contracts::shared::router::Page;
use leptos::prelude::*;
use thaw::*;

fn metric_series(points: &[SustainabilityPoint]) -> (Vec<String>, Vec<ChartSeries>) {
    let labels = points.iter().map(|p| p.month.clone()).collect();
    let series = vec![
        ChartSeries {
            name: "Carbon Offset (kg)".into(),
            color: "#10B981",
            values: points.iter().map(|p| p.carbon).collect(),
        },
        ChartSeries {
            name: "Water Saved (L)".into(),
            color: "#3B82F6",
            values: points.iter().map(|p| p.water).collect(),
        },
        ChartSeries {
            name: "Energy Saved (kWh)".into(),
            color: "#F59E0B",
            values: points.iter().map(|p| p.energy).collect(),
        },
    ];
    (labels, series)
}

/// Badge variant for a display status; unknown statuses fall back to neutral
fn status_variant(status: &str) -> &'static str {
    OrderStatus::from_display_name(status)
        .map(|s| s.badge_modifier())
        .unwrap_or("neutral")
}

#[component]
fn RecentOrderRow(order: RecentOrder, rating: EcoRating) -> impl IntoView {
    view! {
        <div class="recent-order">
            <div class="recent-order__main">
                <div class="recent-order__customer">{order.customer}</div>
                <div class="recent-order__date">{format_date(order.date)}</div>
            </div>
            <div class="recent-order__side">
                <div class="recent-order__amount">{format_money(order.amount, "$")}</div>
                <div class="recent-order__badges">
                    <Badge variant=status_variant(&order.status).to_string()>{order.status.clone()}</Badge>
                    <Badge variant=rating.badge_modifier().to_string()>
                        {format!("Eco Score: {}", order.eco_score)}
                    </Badge>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SustainabilityDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let thresholds = ctx.config.with_value(|c| c.eco_score.clone());

    let cards = sample_data::dashboard_stats()
        .sustainability_indicators()
        .into_iter()
        .map(|indicator| view! { <IndicatorCard indicator=indicator /> })
        .collect_view();

    let (labels, series) = metric_series(&sample_data::sustainability_series());

    let recent = sample_data::recent_orders()
        .into_iter()
        .map(|order| {
            let rating = EcoRating::from_score(order.eco_score, &thresholds);
            view! { <RecentOrderRow order=order rating=rating /> }
        })
        .collect_view();

    view! {
        <PageFrame page_id="d400_sustainability--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageTitle page=Page::Dashboard />

            <div class="page__content">
                <div class="stat-grid">{cards}</div>

                <div class="dashboard-grid">
                    <div class="dashboard-card">
                        <h2 class="dashboard-card__title">"Sustainability Metrics"</h2>
                        <LineChart labels=labels series=series />
                    </div>

                    <div class="dashboard-card">
                        <div class="dashboard-card__header">
                            <h2 class="dashboard-card__title">"Recent Orders"</h2>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| ctx.select_page(Page::Orders.key())
                            >
                                "View all"
                            </Button>
                        </div>
                        <div class="recent-orders">{recent}</div>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_series_follow_months() {
        let (labels, series) = metric_series(&sample_data::sustainability_series());
        assert_eq!(labels.len(), 6);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|s| s.values.len() == labels.len()));
        assert_eq!(series[0].values[2], 1250.0);
    }

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("Shipped"), "info");
        assert_eq!(status_variant("Delivered"), "success");
        assert_eq!(status_variant("Cancelled"), "neutral");
    }
}
