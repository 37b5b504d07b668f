//! Inline SVG charts for the dashboards.
//!
//! Geometry lives in plain functions over a fixed `viewBox`; the components
//! only turn the computed coordinates into SVG nodes.

use crate::shared::number_format::format_number_int;
use leptos::prelude::*;

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 300.0;
const GRID_LINES: usize = 4;

/// Plot area inside the SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn with_left_gutter(left: f64) -> Self {
        Self {
            left,
            top: 16.0,
            width: VIEW_WIDTH - left - 16.0,
            height: VIEW_HEIGHT - 16.0 - 32.0,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self::with_left_gutter(56.0)
    }
}

/// Round the axis maximum up to 1, 2, 2.5 or 5 times a power of ten
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced axis ticks from zero to `axis_max`
pub fn axis_ticks(axis_max: f64) -> Vec<f64> {
    (0..=GRID_LINES)
        .map(|i| axis_max * i as f64 / GRID_LINES as f64)
        .collect()
}

/// X centre of category `index` out of `count` equal bands
pub fn band_center(area: &PlotArea, index: usize, count: usize) -> f64 {
    let band = area.width / count.max(1) as f64;
    area.left + band * (index as f64 + 0.5)
}

pub fn value_to_y(area: &PlotArea, value: f64, axis_max: f64) -> f64 {
    area.bottom() - (value / axis_max).clamp(0.0, 1.0) * area.height
}

/// `points` attribute of a polyline through the series values
pub fn polyline_points(area: &PlotArea, values: &[f64], axis_max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                "{:.1},{:.1}",
                band_center(area, i, values.len()),
                value_to_y(area, *v, axis_max)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn series_max<'a>(values: impl IntoIterator<Item = &'a f64>) -> f64 {
    values.into_iter().copied().fold(0.0, f64::max)
}

/// One line of a [`LineChart`]
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[component]
fn ValueGrid(area: PlotArea, axis_max: f64) -> impl IntoView {
    axis_ticks(axis_max)
        .into_iter()
        .map(|tick| {
            let y = format!("{:.1}", value_to_y(&area, tick, axis_max));
            view! {
                <g class="chart__grid">
                    <line
                        x1=format!("{:.1}", area.left)
                        x2=format!("{:.1}", area.right())
                        y1=y.clone()
                        y2=y.clone()
                        stroke="#e5e7eb"
                        stroke-dasharray="3 3"
                    />
                    <text
                        x=format!("{:.1}", area.left - 8.0)
                        y=y
                        text-anchor="end"
                        dominant-baseline="middle"
                        class="chart__tick"
                    >
                        {format_number_int(tick)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

#[component]
fn CategoryAxis(area: PlotArea, labels: Vec<String>) -> impl IntoView {
    let count = labels.len();
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text
                    x=format!("{:.1}", band_center(&area, i, count))
                    y=format!("{:.1}", area.bottom() + 20.0)
                    text-anchor="middle"
                    class="chart__tick"
                >
                    {label}
                </text>
            }
        })
        .collect_view()
}

/// Multi-series line chart over monthly categories
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<ChartSeries>) -> impl IntoView {
    let area = PlotArea::default();
    let axis_max = nice_ceiling(series_max(series.iter().flat_map(|s| s.values.iter())));
    let legend = series
        .iter()
        .map(|s| {
            view! {
                <span class="chart__legend-item">
                    <span class="chart__legend-swatch" style=format!("background: {};", s.color)></span>
                    {s.name.clone()}
                </span>
            }
        })
        .collect_view();

    let lines = series
        .into_iter()
        .map(|s| {
            let count = s.values.len();
            let dots = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    view! {
                        <circle
                            cx=format!("{:.1}", band_center(&area, i, count))
                            cy=format!("{:.1}", value_to_y(&area, *v, axis_max))
                            r="3"
                            fill=s.color
                        >
                            <title>{format!("{}: {}", s.name, format_number_int(*v))}</title>
                        </circle>
                    }
                })
                .collect_view();
            view! {
                <g class="chart__series">
                    <polyline
                        points=polyline_points(&area, &s.values, axis_max)
                        fill="none"
                        stroke=s.color
                        stroke-width="2"
                    />
                    {dots}
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) preserveAspectRatio="none">
                <ValueGrid area=area axis_max=axis_max />
                <CategoryAxis area=area labels=labels />
                {lines}
            </svg>
            <div class="chart__legend">{legend}</div>
        </div>
    }
}

/// Vertical bars, one per category
#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<f64>, color: &'static str) -> impl IntoView {
    let area = PlotArea::default();
    let axis_max = nice_ceiling(series_max(values.iter()));
    let count = values.len();
    let band = area.width / count.max(1) as f64;
    let bar_width = band * 0.6;

    let bars = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = value_to_y(&area, *v, axis_max);
            view! {
                <rect
                    x=format!("{:.1}", band_center(&area, i, count) - bar_width / 2.0)
                    y=format!("{:.1}", y)
                    width=format!("{:.1}", bar_width)
                    height=format!("{:.1}", area.bottom() - y)
                    fill=color
                >
                    <title>{format_number_int(*v)}</title>
                </rect>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) preserveAspectRatio="none">
                <ValueGrid area=area axis_max=axis_max />
                <CategoryAxis area=area labels=labels />
                {bars}
            </svg>
        </div>
    }
}

/// Horizontal bars with the category names on the left
#[component]
pub fn HorizontalBarChart(
    labels: Vec<String>,
    values: Vec<f64>,
    color: &'static str,
) -> impl IntoView {
    let area = PlotArea::with_left_gutter(160.0);
    let axis_max = nice_ceiling(series_max(values.iter()));
    let count = values.len();
    let band = area.height / count.max(1) as f64;
    let bar_height = band * 0.6;

    let rows = labels
        .into_iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, value))| {
            let center = area.top + band * (i as f64 + 0.5);
            let width = (value / axis_max).clamp(0.0, 1.0) * area.width;
            view! {
                <g class="chart__row">
                    <text
                        x=format!("{:.1}", area.left - 8.0)
                        y=format!("{:.1}", center)
                        text-anchor="end"
                        dominant-baseline="middle"
                        class="chart__tick"
                    >
                        {label}
                    </text>
                    <rect
                        x=format!("{:.1}", area.left)
                        y=format!("{:.1}", center - bar_height / 2.0)
                        width=format!("{:.1}", width)
                        height=format!("{:.1}", bar_height)
                        fill=color
                    >
                        <title>{format_number_int(value)}</title>
                    </rect>
                </g>
            }
        })
        .collect_view();

    let ticks = axis_ticks(axis_max)
        .into_iter()
        .map(|tick| {
            let x = format!("{:.1}", area.left + tick / axis_max * area.width);
            view! {
                <g class="chart__grid">
                    <line
                        x1=x.clone()
                        x2=x.clone()
                        y1=format!("{:.1}", area.top)
                        y2=format!("{:.1}", area.bottom())
                        stroke="#e5e7eb"
                        stroke-dasharray="3 3"
                    />
                    <text x=x y=format!("{:.1}", area.bottom() + 20.0) text-anchor="middle" class="chart__tick">
                        {format_number_int(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT) preserveAspectRatio="none">
                {ticks}
                {rows}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(5200.0), 10000.0);
        assert_eq!(nice_ceiling(410.0), 500.0);
        assert_eq!(nice_ceiling(1200.0), 2000.0);
        assert_eq!(nice_ceiling(6000.0), 10000.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
    }

    #[test]
    fn test_value_to_y_maps_range_onto_plot() {
        let area = PlotArea::default();
        assert_eq!(value_to_y(&area, 0.0, 100.0), area.bottom());
        assert_eq!(value_to_y(&area, 100.0, 100.0), area.top);
        assert_eq!(value_to_y(&area, 250.0, 100.0), area.top);
    }

    #[test]
    fn test_polyline_has_one_point_per_value() {
        let area = PlotArea::default();
        let points = polyline_points(&area, &[1.0, 2.0, 3.0], 4.0);
        assert_eq!(points.split(' ').count(), 3);
    }

    #[test]
    fn test_axis_ticks_start_at_zero() {
        let ticks = axis_ticks(500.0);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&500.0));
        assert_eq!(ticks.len(), GRID_LINES + 1);
    }
}
