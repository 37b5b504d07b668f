use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int};
use contracts::shared::indicators::{IndicatorStatus, StatIndicator, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format_money(val, currency),
        ValueFormat::Quantity { unit } => format!("{} {}", format_number_int(val), unit),
        ValueFormat::Integer => format_number_int(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = not available)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into)]
    status: Signal<IndicatorStatus>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Info => "stat-card stat-card--info",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "\u{2014}".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle_view}
            </div>
        </div>
    }
}

/// Static card built from a precomputed indicator
#[component]
pub fn IndicatorCard(indicator: StatIndicator) -> impl IntoView {
    view! {
        <StatCard
            label=indicator.label
            icon_name=indicator.icon
            value=Signal::stored(indicator.value)
            format=indicator.format
            status=Signal::stored(indicator.status)
            subtitle=Signal::stored(indicator.subtitle)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_units() {
        let kg = ValueFormat::Quantity { unit: "kg".into() };
        assert_eq!(format_value(1250.0, &kg), "1,250 kg");
        assert_eq!(format_value(45.0, &ValueFormat::Integer), "45");
        let usd = ValueFormat::Money { currency: "$".into() };
        assert_eq!(format_value(145.5, &usd), "$145.50");
    }
}
