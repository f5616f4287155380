use contracts::dashboards::d100_sales_overview::SalesEntry;
use contracts::enums::ChartMode;
use contracts::shared::format::{format_axis_thousands, format_currency};
use leptos::prelude::*;

use super::chart_geometry::{
    bar_layout, category_x, line_points, pie_center, pie_slices, polyline_points, Plot,
    VIEW_HEIGHT, VIEW_WIDTH,
};

const BAR_COLOR: &str = "#0284c7";
const LINE_COLOR: &str = "#0ea5e9";
const THRESHOLD_COLOR: &str = "#f97316";
const GRID_COLOR: &str = "#e5e7eb";
const AXIS_COLOR: &str = "#475569";

const PIE_OUTER_RADIUS: f64 = 90.0;
const PIE_INNER_RADIUS: f64 = 50.0;

/// Sales chart: bar, line or donut, with an empty state when nothing passed the filter
#[component]
pub fn SalesChart(
    /// Entries left after the threshold filter
    #[prop(into)]
    data: Signal<Vec<SalesEntry>>,
    #[prop(into)] year: Signal<String>,
    #[prop(into)] mode: Signal<ChartMode>,
    #[prop(into)] threshold: Signal<f64>,
) -> impl IntoView {
    move || {
        let entries = data.get();
        if entries.is_empty() {
            return view! {
                <div class="sales-chart sales-chart--empty">
                    "No data matches the current filters."
                </div>
            }
            .into_any();
        }

        let year = year.get();
        let threshold = threshold.get();
        let body = match mode.get() {
            ChartMode::Bar => bar_chart(&entries, &year, threshold),
            ChartMode::Line => line_chart(&entries, &year, threshold),
            ChartMode::Pie => pie_chart(&entries, &year),
        };

        view! {
            <div class="sales-chart">
                <svg
                    viewBox={format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)}
                    preserveAspectRatio="xMidYMid meet"
                    role="img"
                    aria-label={format!("Sales in {}", year)}
                >
                    {body}
                </svg>
                <div class="sales-chart__legend">
                    <span class="sales-chart__legend-swatch" style={format!("background: {};", BAR_COLOR)}></span>
                    "Sales"
                </div>
            </div>
        }
        .into_any()
    }
}

/// SVG coordinate
fn n(value: f64) -> String {
    format!("{:.2}", value)
}

fn tooltip(label: &str, year: &str, value: f64) -> String {
    format!("{} {}: {}", label, year, format_currency(value))
}

/// Gridlines, value labels, category labels and the dashed threshold line
fn axes(plot: &Plot, entries: &[SalesEntry], threshold: f64) -> AnyView {
    let grid = plot
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = plot.y(tick);
            view! {
                <g>
                    <line x1={n(plot.left)} y1={n(y)} x2={n(plot.right())} y2={n(y)} stroke=GRID_COLOR stroke-dasharray="3 3" />
                    <text x={n(plot.left - 8.0)} y={n(y + 4.0)} text-anchor="end" font-size="11" fill=AXIS_COLOR>
                        {format_axis_thousands(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let count = entries.len();
    let categories = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            view! {
                <text
                    x={n(category_x(plot, count, i))}
                    y={n(plot.bottom() + 18.0)}
                    text-anchor="middle"
                    font-size="11"
                    fill=AXIS_COLOR
                >
                    {entry.month.clone()}
                </text>
            }
        })
        .collect_view();

    let threshold_y = plot.y(threshold);

    view! {
        <g class="sales-chart__axes">
            {grid}
            <line x1={n(plot.left)} y1={n(plot.bottom())} x2={n(plot.right())} y2={n(plot.bottom())} stroke=AXIS_COLOR />
            {categories}
        </g>
        <g class="sales-chart__threshold">
            <line
                x1={n(plot.left)}
                y1={n(threshold_y)}
                x2={n(plot.right())}
                y2={n(threshold_y)}
                stroke=THRESHOLD_COLOR
                stroke-dasharray="4 4"
            />
            <text x={n(plot.right())} y={n(threshold_y - 4.0)} text-anchor="end" font-size="11" fill=THRESHOLD_COLOR>
                "Threshold"
            </text>
        </g>
    }
    .into_any()
}

fn bar_chart(entries: &[SalesEntry], year: &str, threshold: f64) -> AnyView {
    let plot = Plot::new(entries, threshold);
    let bars = bar_layout(&plot, entries)
        .into_iter()
        .map(|bar| {
            view! {
                <rect x={n(bar.x)} y={n(bar.y)} width={n(bar.width)} height={n(bar.height)} rx="6" fill=BAR_COLOR>
                    <title>{tooltip(&bar.label, year, bar.value)}</title>
                </rect>
            }
        })
        .collect_view();

    view! {
        {axes(&plot, entries, threshold)}
        <g class="sales-chart__bars">{bars}</g>
    }
    .into_any()
}

fn line_chart(entries: &[SalesEntry], year: &str, threshold: f64) -> AnyView {
    let plot = Plot::new(entries, threshold);
    let points = line_points(&plot, entries);
    let polyline = polyline_points(&points);
    let dots = points
        .into_iter()
        .map(|point| {
            view! {
                <circle cx={n(point.x)} cy={n(point.y)} r="4" fill="#fff" stroke=LINE_COLOR stroke-width="2">
                    <title>{tooltip(&point.label, year, point.value)}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        {axes(&plot, entries, threshold)}
        <polyline points=polyline fill="none" stroke=LINE_COLOR stroke-width="3" stroke-linejoin="round" />
        <g class="sales-chart__dots">{dots}</g>
    }
    .into_any()
}

fn pie_chart(entries: &[SalesEntry], year: &str) -> AnyView {
    let (cx, _) = pie_center();
    let slices = pie_slices(entries, PIE_OUTER_RADIUS, PIE_INNER_RADIUS)
        .into_iter()
        .map(|slice| {
            let anchor = if slice.label_x >= cx { "start" } else { "end" };
            view! {
                <g>
                    <path d={slice.path.clone()} fill={slice.color}>
                        <title>{tooltip(&slice.label, year, slice.value)}</title>
                    </path>
                    <text x={n(slice.label_x)} y={n(slice.label_y)} text-anchor=anchor font-size="11" fill=AXIS_COLOR>
                        {slice.caption()}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <g class="sales-chart__pie">{slices}</g>
    }
    .into_any()
}
