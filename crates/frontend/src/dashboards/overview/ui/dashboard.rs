use std::collections::HashMap;

use contracts::analytics::SalesSummary;
use contracts::inventory::InventorySummary;
use contracts::orders::TodayOrders;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::stat_card::StatCard;
use crate::dashboards::overview::api;
use crate::dashboards::overview::series::{y_axis_max, ProfitBand};
use crate::dashboards::overview::trends::{Metric, MetricsTracker, Trend};
use crate::domain::inventory::api as inventory_api;
use crate::layout::global_context::{AppGlobalContext, ViewKey};
use crate::shared::components::charts::{AreaChart, BarChart, ChartBar, ChartPoint};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_currency_int, format_number_int};

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let inventory_summary = RwSignal::new(InventorySummary::default());
    let sales_summary = RwSignal::new(SalesSummary::default());
    let today = RwSignal::new(TodayOrders::default());
    let trends: RwSignal<HashMap<Metric, Trend>> = RwSignal::new(HashMap::new());
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Snapshot slots and rolling history live for the whole view session.
    let tracker = StoredValue::new(MetricsTracker::default());
    // Monotonic tag per refresh; stale completions must not apply.
    let fetch_seq = StoredValue::new(0u64);
    // Re-render tick for the trend chips.
    let trend_tick = RwSignal::new(0u32);

    let load_data = move || {
        let seq = fetch_seq.with_value(|v| v + 1);
        fetch_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let inventory = inventory_api::fetch_summary().await;
            let sales = api::fetch_sales_summary().await;
            let today_orders = api::fetch_today_orders().await;
            if fetch_seq.get_value() != seq {
                return;
            }
            match (inventory, sales, today_orders) {
                (Ok(inv), Ok(sal), Ok(tod)) => {
                    // Trends read the previous refresh before it is overwritten.
                    let snapshot = [
                        (Metric::TotalProducts, inv.total_products as f64),
                        (Metric::TotalInventory, inv.total_quantity as f64),
                        (Metric::InventorySold, inv.total_sold_quantity as f64),
                        (Metric::LowStock, inv.low_stock_count as f64),
                        (Metric::TodayOrders, sal.summary.total_orders as f64),
                        (Metric::TodayRevenue, tod.revenue()),
                        (Metric::InventoryValue, inv.inventory_value()),
                    ];
                    let computed = tracker
                        .try_update_value(|t| t.record(&snapshot))
                        .unwrap_or_default();
                    trends.set(computed);
                    inventory_summary.set(inv);
                    sales_summary.set(sal);
                    today.set(tod);
                    set_is_loaded.set(true);
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    log::error!("Error fetching dashboard data: {}", e);
                    inventory_summary.set(InventorySummary::default());
                    sales_summary.set(SalesSummary::default());
                    today.set(TodayOrders::default());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !is_loaded.get_untracked() {
            load_data();
        }
    });

    // Periodic tick that re-renders the trend chips while the view is open.
    Effect::new(move |_| {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(12_000).await;
                if trend_tick.try_update(|tick| *tick += 1).is_none() {
                    break;
                }
            }
        });
    });

    let trend_for = move |metric: Metric| {
        let _ = trend_tick.get();
        trends.with(|t| t.get(&metric).copied())
    };

    let revenue_points = Memo::new(move |_| {
        sales_summary.with(|s| {
            s.daily_sales
                .iter()
                .map(|d| ChartPoint {
                    label: format_date(&d.date),
                    value: d.revenue,
                })
                .collect::<Vec<_>>()
        })
    });

    let chart_max = Memo::new(move |_| {
        let inventory_value = inventory_summary.with(|i| i.inventory_value());
        sales_summary.with(|s| y_axis_max(inventory_value, &s.daily_sales, &s.daily_profits))
    });

    let profit_bars = Memo::new(move |_| {
        let inventory_value = inventory_summary.with(|i| i.inventory_value());
        sales_summary.with(|s| {
            s.daily_profits
                .iter()
                .map(|d| ChartBar {
                    label: format_date(&d.date),
                    value: d.profit,
                    fill: ProfitBand::classify(d.profit, inventory_value).fill(),
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page page--dashboard" id="overview--dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <p class="page__subtitle">
                        "Welcome back! Here's what's happening with your store today."
                    </p>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || {
                    (loading.get() && !is_loaded.get())
                        .then(|| view! { <div class="page__loading">"Loading Dashboard..."</div> })
                }}

                <div class="chip-row">
                    <span class="chip chip--primary">
                        {move || format!("{} Products", inventory_summary.with(|i| i.total_products))}
                    </span>
                    <span class="chip chip--success">
                        {move || format!("{} Orders Today", today.with(|t| t.total_orders))}
                    </span>
                    <span class="chip chip--warning">
                        {move || format!("{} Revenue", format_currency_int(today.with(|t| t.revenue())))}
                    </span>
                    {move || {
                        let count = inventory_summary.with(|i| i.low_stock_count);
                        (count > 0).then(|| view! {
                            <span class="chip chip--error">{format!("{} Low Stock", count)}</span>
                        })
                    }}
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Total Inventory"
                        icon_name="inventory"
                        value=Signal::derive(move || {
                            format_number_int(inventory_summary.with(|i| i.total_quantity as f64))
                        })
                        trend=Signal::derive(move || trend_for(Metric::TotalInventory))
                        on_click=Callback::new(move |_| ctx.activate(ViewKey::Inventory))
                    />
                    <StatCard
                        label="Inventory Sold"
                        icon_name="trending-up"
                        value=Signal::derive(move || {
                            format_number_int(inventory_summary.with(|i| i.total_sold_quantity as f64))
                        })
                        trend=Signal::derive(move || trend_for(Metric::InventorySold))
                        on_click=Callback::new(move |_| ctx.activate(ViewKey::Analytics))
                    />
                    <StatCard
                        label="Low Stock Items"
                        icon_name="warning"
                        value=Signal::derive(move || {
                            inventory_summary.with(|i| i.low_stock_count.to_string())
                        })
                        trend=Signal::derive(move || trend_for(Metric::LowStock))
                        on_click=Callback::new(move |_| ctx.activate(ViewKey::Inventory))
                    />
                    <StatCard
                        label="Total Orders"
                        icon_name="orders"
                        value=Signal::derive(move || {
                            sales_summary.with(|s| s.summary.total_orders.to_string())
                        })
                        trend=Signal::derive(move || trend_for(Metric::TodayOrders))
                        on_click=Callback::new(move |_| ctx.activate(ViewKey::Orders))
                    />
                    <StatCard
                        label="Today's Revenue"
                        icon_name="rupee"
                        value=Signal::derive(move || {
                            format_currency_int(today.with(|t| t.revenue()))
                        })
                        trend=Signal::derive(move || trend_for(Metric::TodayRevenue))
                        on_click=Callback::new(move |_| ctx.activate(ViewKey::Analytics))
                    />
                </div>

                <div class="chart-grid">
                    <div class="card card--chart">
                        <div class="card__header">
                            <h3 class="card__title">"Sales Trend (Last 30 Days)"</h3>
                            <p class="card__subtitle">"Daily revenue scaled to inventory value context"</p>
                        </div>
                        <AreaChart
                            points=Signal::derive(move || revenue_points.get())
                            max_y=Signal::derive(move || chart_max.get())
                        />
                    </div>
                    <div class="card card--chart">
                        <div class="card__header">
                            <h3 class="card__title">"Daily Profit"</h3>
                            <p class="card__subtitle">"Banded by profit as a share of inventory value"</p>
                        </div>
                        <BarChart
                            bars=Signal::derive(move || profit_bars.get())
                            max_y=Signal::derive(move || chart_max.get())
                        />
                    </div>
                </div>

                {move || {
                    let items = inventory_summary.with(|i| i.low_stock_products.clone());
                    (!items.is_empty()).then(|| view! {
                        <div class="card card--low-stock">
                            <div class="card__header">
                                <h3 class="card__title">
                                    {icon("warning")}
                                    " Low Stock Alerts"
                                </h3>
                            </div>
                            <ul class="low-stock-list">
                                {items
                                    .into_iter()
                                    .map(|p| view! {
                                        <li class="low-stock-list__item">
                                            <span>{p.name.clone()}</span>
                                            <span class="low-stock-list__qty">
                                                {format!("{} left (threshold {})", p.available_quantity, p.threshold)}
                                            </span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                }}
            </div>
        </div>
    }
}
