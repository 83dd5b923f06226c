use leptos::prelude::*;

use crate::dashboards::overview::trends::{Trend, TrendDirection};
use crate::shared::icons::icon;

/// Metric card with a trend chip comparing against the previous refresh.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Pre-formatted value string
    #[prop(into)]
    value: Signal<String>,
    /// Trend against the previous refresh (None until one is known)
    #[prop(into)]
    trend: Signal<Option<Trend>>,
    /// Makes the card a navigation shortcut
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let clickable = on_click.is_some();
    let card_class = if clickable {
        "stat-card stat-card--clickable"
    } else {
        "stat-card"
    };

    let trend_view = move || match trend.get() {
        Some(Trend {
            direction: TrendDirection::Up,
            magnitude,
        }) => view! {
            <span class="stat-card__trend stat-card__trend--up">
                {icon("arrow-up")}
                {format!("{}% since last refresh", magnitude)}
            </span>
        }
        .into_any(),
        Some(Trend {
            direction: TrendDirection::Down,
            magnitude,
        }) => view! {
            <span class="stat-card__trend stat-card__trend--down">
                {icon("arrow-down")}
                {format!("{}% since last refresh", magnitude)}
            </span>
        }
        .into_any(),
        _ => view! { <span class="stat-card__trend stat-card__trend--flat">"No change"</span> }
            .into_any(),
    };

    view! {
        <div
            class=card_class
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
                {trend_view}
            </div>
        </div>
    }
}
