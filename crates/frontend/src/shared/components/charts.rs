//! Lightweight inline-SVG charts.
//!
//! The views prepare the series (labels, values, colors, axis ceiling);
//! these components only map them onto SVG coordinates.

use leptos::prelude::*;

use crate::shared::number_format::format_currency_int;

/// One point of a prepared line/area series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One bar of a prepared bar series, fill resolved by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub fill: &'static str,
}

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 220.0;

/// Polyline path ("M x,y L x,y ...") for a series scaled into `width` x `height`.
///
/// A non-positive `max_y` is treated as 1 so an all-zero series still
/// produces a flat line at the bottom instead of NaN coordinates.
pub fn line_path(values: &[f64], max_y: f64, width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max_y = if max_y > 0.0 { max_y } else { 1.0 };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    let mut path = String::new();
    for (i, value) in values.iter().enumerate() {
        let x = i as f64 * step;
        let y = height - (value / max_y).clamp(0.0, 1.0) * height;
        if i == 0 {
            path.push_str(&format!("M{:.1},{:.1}", x, y));
        } else {
            path.push_str(&format!(" L{:.1},{:.1}", x, y));
        }
    }
    path
}

/// Like [`line_path`] but closed down to the x-axis for an area fill.
pub fn area_path(values: &[f64], max_y: f64, width: f64, height: f64) -> String {
    let line = line_path(values, max_y, width, height);
    if line.is_empty() {
        return line;
    }
    let last_x = if values.len() > 1 { width } else { 0.0 };
    format!("{} L{:.1},{:.1} L0.0,{:.1} Z", line, last_x, height, height)
}

fn axis_labels(points: &[ChartPoint]) -> (String, String) {
    let first = points.first().map(|p| p.label.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.label.clone()).unwrap_or_default();
    (first, last)
}

/// Filled area chart with its outline, used for the revenue series.
#[component]
pub fn AreaChart(
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    #[prop(into)] max_y: Signal<f64>,
    #[prop(optional)] stroke: Option<&'static str>,
    #[prop(optional)] fill: Option<&'static str>,
) -> impl IntoView {
    let stroke = stroke.unwrap_or("#3b82f6");
    let fill = fill.unwrap_or("rgba(59, 130, 246, 0.25)");

    view! {
        <div class="chart">
            <div class="chart__axis-y">{move || format_currency_int(max_y.get())}</div>
            <svg class="chart__canvas" viewBox=format!("0 0 {} {}", VIEW_W, VIEW_H)>
                {move || {
                    let points = points.get();
                    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
                    let max = max_y.get();
                    view! {
                        <path d=area_path(&values, max, VIEW_W, VIEW_H) fill=fill stroke="none" />
                        <path
                            d=line_path(&values, max, VIEW_W, VIEW_H)
                            fill="none"
                            stroke=stroke
                            stroke-width="2"
                            vector-effect="non-scaling-stroke"
                        />
                    }
                }}
            </svg>
            <div class="chart__axis-x">
                {move || {
                    let (first, last) = axis_labels(&points.get());
                    view! {
                        <span>{first}</span>
                        <span>{last}</span>
                    }
                }}
            </div>
        </div>
    }
}

/// Bar chart; each bar carries its own fill so the caller can band values.
#[component]
pub fn BarChart(
    #[prop(into)] bars: Signal<Vec<ChartBar>>,
    #[prop(into)] max_y: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class="chart">
            <div class="chart__axis-y">{move || format_currency_int(max_y.get())}</div>
            <svg class="chart__canvas" viewBox=format!("0 0 {} {}", VIEW_W, VIEW_H)>
                {move || {
                    let bars = bars.get();
                    let max = {
                        let m = max_y.get();
                        if m > 0.0 { m } else { 1.0 }
                    };
                    let slot = if bars.is_empty() { VIEW_W } else { VIEW_W / bars.len() as f64 };
                    let bar_width = (slot * 0.7).max(1.0);
                    bars.into_iter()
                        .enumerate()
                        .map(|(i, bar)| {
                            let bar_height = (bar.value / max).clamp(0.0, 1.0) * VIEW_H;
                            let x = i as f64 * slot + (slot - bar_width) / 2.0;
                            let y = VIEW_H - bar_height;
                            let tooltip = format!("{}: {}", bar.label, format_currency_int(bar.value));
                            view! {
                                <rect
                                    x=format!("{:.1}", x)
                                    y=format!("{:.1}", y)
                                    width=format!("{:.1}", bar_width)
                                    height=format!("{:.1}", bar_height)
                                    fill=bar.fill
                                    rx="1"
                                >
                                    <title>{tooltip}</title>
                                </rect>
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <div class="chart__axis-x">
                {move || {
                    let bars = bars.get();
                    let first = bars.first().map(|b| b.label.clone()).unwrap_or_default();
                    let last = bars.last().map(|b| b.label.clone()).unwrap_or_default();
                    view! {
                        <span>{first}</span>
                        <span>{last}</span>
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_path_scales_into_viewport() {
        let path = line_path(&[0.0, 50.0, 100.0], 100.0, 100.0, 100.0);
        assert_eq!(path, "M0.0,100.0 L50.0,50.0 L100.0,0.0");
    }

    #[test]
    fn line_path_empty_series() {
        assert_eq!(line_path(&[], 100.0, 100.0, 100.0), "");
    }

    #[test]
    fn line_path_zero_ceiling_stays_finite() {
        let path = line_path(&[0.0, 0.0], 0.0, 100.0, 100.0);
        assert_eq!(path, "M0.0,100.0 L100.0,100.0");
    }

    #[test]
    fn values_above_ceiling_are_clamped() {
        let path = line_path(&[200.0], 100.0, 100.0, 100.0);
        assert_eq!(path, "M0.0,0.0");
    }

    #[test]
    fn area_path_closes_to_baseline() {
        let path = area_path(&[0.0, 100.0], 100.0, 100.0, 100.0);
        assert!(path.starts_with("M0.0,100.0 L100.0,0.0"));
        assert!(path.ends_with("L100.0,100.0 L0.0,100.0 Z"));
    }
}
