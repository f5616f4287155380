//! Coordinates for the SVG sales chart.
//!
//! Everything here is plain arithmetic inside a fixed viewBox so the
//! component only has to map the results onto SVG elements.

use contracts::dashboards::d100_sales_overview::SalesEntry;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 320.0;

const MARGIN_TOP: f64 = 10.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;
const MARGIN_LEFT: f64 = 60.0;

/// Number of gridline intervals on the value axis
const TICK_COUNT: f64 = 5.0;

pub const PIE_COLORS: [&str; 6] = [
    "#0ea5e9", "#38bdf8", "#22c55e", "#f59e0b", "#6366f1", "#ec4899",
];

/// Gap between pie slices, radians
const PIE_PADDING: f64 = 3.0 * PI / 180.0;

/// Plot area of the bar and line charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Value at the top edge of the plot
    pub y_max: f64,
}

impl Plot {
    /// Scale covering every value and the threshold line
    pub fn new(entries: &[SalesEntry], threshold: f64) -> Self {
        let max_value = entries
            .iter()
            .map(|e| e.sales)
            .fold(threshold.max(0.0), f64::max);
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            height: VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
            y_max: nice_max(max_value),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Vertical position of `value`, clamped to the plot
    pub fn y(&self, value: f64) -> f64 {
        let ratio = (value / self.y_max).clamp(0.0, 1.0);
        self.bottom() - ratio * self.height
    }

    /// Gridline values from 0 to `y_max`
    pub fn ticks(&self) -> Vec<f64> {
        let step = self.y_max / TICK_COUNT;
        (0..=TICK_COUNT as usize).map(|i| step * i as f64).collect()
    }

    fn band(&self, count: usize) -> f64 {
        self.width / count.max(1) as f64
    }
}

/// Round `max_value` up so that it splits into [`TICK_COUNT`] steps of 1, 2 or 5 × 10^k
pub fn nice_max(max_value: f64) -> f64 {
    if !max_value.is_finite() || max_value <= 0.0 {
        return TICK_COUNT;
    }
    let raw_step = max_value / TICK_COUNT;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let unit = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = unit * magnitude;
    (max_value / step).ceil() * step
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn bar_layout(plot: &Plot, entries: &[SalesEntry]) -> Vec<BarRect> {
    let band = plot.band(entries.len());
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let y = plot.y(entry.sales);
            BarRect {
                label: entry.month.clone(),
                value: entry.sales,
                x: plot.left + band * i as f64 + band * 0.2,
                y,
                width: band * 0.6,
                height: plot.bottom() - y,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

pub fn line_points(plot: &Plot, entries: &[SalesEntry]) -> Vec<LinePoint> {
    let band = plot.band(entries.len());
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| LinePoint {
            label: entry.month.clone(),
            value: entry.sales,
            x: plot.left + band * (i as f64 + 0.5),
            y: plot.y(entry.sales),
        })
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn polyline_points(points: &[LinePoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// X position of the category label under entry `index`
pub fn category_x(plot: &Plot, count: usize, index: usize) -> f64 {
    plot.left + plot.band(count) * (index as f64 + 0.5)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total, 0..=1
    pub fraction: f64,
    pub path: String,
    pub color: &'static str,
    pub label_x: f64,
    pub label_y: f64,
}

impl PieSlice {
    /// "Jan 8%"
    pub fn caption(&self) -> String {
        format!("{} {:.0}%", self.label, self.fraction * 100.0)
    }
}

/// Donut slices starting at 12 o'clock, clockwise. Zero values get no slice.
pub fn pie_slices(entries: &[SalesEntry], outer: f64, inner: f64) -> Vec<PieSlice> {
    let total: f64 = entries.iter().map(|e| e.sales).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let (cx, cy) = pie_center();
    let visible = entries.iter().filter(|e| e.sales > 0.0).count();
    let padding = if visible > 1 { PIE_PADDING } else { 0.0 };

    let mut start = -FRAC_PI_2;
    let mut slices = Vec::with_capacity(visible);
    for (i, entry) in entries.iter().enumerate() {
        if entry.sales <= 0.0 {
            continue;
        }
        let fraction = entry.sales / total;
        let sweep = fraction * TAU;
        let end = start + sweep;
        let pad = padding.min(sweep / 2.0);
        let mid = start + sweep / 2.0;
        let (label_x, label_y) = polar(cx, cy, outer + 18.0, mid);

        slices.push(PieSlice {
            label: entry.month.clone(),
            value: entry.sales,
            fraction,
            path: donut_path(cx, cy, outer, inner, start + pad / 2.0, end - pad / 2.0),
            color: PIE_COLORS[i % PIE_COLORS.len()],
            label_x,
            label_y,
        });
        start = end;
    }
    slices
}

pub fn pie_center() -> (f64, f64) {
    (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0)
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

fn donut_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // SVG arcs cannot describe a full circle in one command
    if end - start >= TAU - 1e-9 {
        let half = start + PI;
        return format!(
            "{} {}",
            donut_path(cx, cy, outer, inner, start, half),
            donut_path(cx, cy, outer, inner, half, end)
        );
    }

    let large_arc = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);

    format!(
        "M {:.2} {:.2} A {r:.2} {r:.2} 0 {large} 1 {:.2} {:.2} L {:.2} {:.2} A {ir:.2} {ir:.2} 0 {large} 0 {:.2} {:.2} Z",
        ox0,
        oy0,
        ox1,
        oy1,
        ix1,
        iy1,
        ix0,
        iy0,
        r = outer,
        ir = inner,
        large = large_arc,
    )
}
