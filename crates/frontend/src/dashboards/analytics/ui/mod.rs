use contracts::analytics::{CategorySales, SalesSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::analytics::api;
use crate::dashboards::overview::series::y_axis_max;
use crate::shared::components::charts::{AreaChart, BarChart, ChartBar, ChartPoint};
use crate::shared::date_utils::{format_date, last_30_days};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;

const PROFIT_BAR_FILL: &str = "#059669";

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let (default_start, default_end) = last_30_days();
    let start_date = RwSignal::new(default_start);
    let end_date = RwSignal::new(default_end);

    let sales: RwSignal<SalesSummary> = RwSignal::new(SalesSummary::default());
    let categories: RwSignal<CategorySales> = RwSignal::new(CategorySales::default());
    let (loading, set_loading) = signal(false);
    let (is_loaded, set_is_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Monotonic tag per refresh; stale completions are dropped.
    let fetch_seq = StoredValue::new(0u64);

    let load_data = move || {
        let seq = fetch_seq.with_value(|v| v + 1);
        fetch_seq.set_value(seq);
        let start = start_date.get_untracked();
        let end = end_date.get_untracked();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let fetched_sales = api::fetch_sales_summary(&start, &end).await;
            let fetched_categories = api::fetch_category_sales(&start, &end).await;
            if fetch_seq.get_value() != seq {
                return;
            }
            match (fetched_sales, fetched_categories) {
                (Ok(s), Ok(c)) => {
                    sales.set(s);
                    categories.set(c);
                    set_is_loaded.set(true);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Error fetching analytics: {}", e);
                    sales.set(SalesSummary::default());
                    categories.set(CategorySales::default());
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

    let revenue_points = Memo::new(move |_| {
        sales.with(|s| {
            s.daily_sales
                .iter()
                .map(|d| ChartPoint {
                    label: format_date(&d.date),
                    value: d.revenue,
                })
                .collect::<Vec<_>>()
        })
    });

    let profit_bars = Memo::new(move |_| {
        sales.with(|s| {
            s.daily_profits
                .iter()
                .map(|d| ChartBar {
                    label: format_date(&d.date),
                    value: d.profit,
                    fill: PROFIT_BAR_FILL,
                })
                .collect::<Vec<_>>()
        })
    });

    let chart_max =
        Memo::new(move |_| sales.with(|s| y_axis_max(0.0, &s.daily_sales, &s.daily_profits)));

    // Share of revenue per category, for the breakdown bars.
    let revenue_share = move |row_revenue: f64| {
        let total: f64 = categories.with(|c| c.category_sales.iter().map(|r| r.total_revenue).sum());
        if total > 0.0 {
            row_revenue / total * 100.0
        } else {
            0.0
        }
    };

    view! {
        <div class="page page--dashboard" id="analytics--dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Analytics"</h1>
                    <p class="page__subtitle">
                        {move || {
                            sales.with(|s| {
                                format!("{} to {}", format_date(&s.period.start_date), format_date(&s.period.end_date))
                            })
                        }}
                    </p>
                </div>
                <div class="page__header-right">
                    <input
                        class="date-input"
                        type="date"
                        prop:value=move || start_date.get()
                        on:change=move |ev| start_date.set(event_target_value(&ev))
                    />
                    <input
                        class="date-input"
                        type="date"
                        prop:value=move || end_date.get()
                        on:change=move |ev| end_date.set(event_target_value(&ev))
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("filter")}
                        {move || if loading.get() { " Loading..." } else { " Apply Filter" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-strip">
                    <div class="stat-strip__item">
                        <span class="stat-strip__label">"Total Orders"</span>
                        <span class="stat-strip__value">
                            {move || sales.with(|s| s.summary.total_orders)}
                        </span>
                    </div>
                    <div class="stat-strip__item">
                        <span class="stat-strip__label">"Total Revenue"</span>
                        <span class="stat-strip__value">
                            {move || format_currency(sales.with(|s| s.summary.revenue()))}
                        </span>
                    </div>
                    <div class="stat-strip__item stat-strip__item--success">
                        <span class="stat-strip__label">"Total Profit"</span>
                        <span class="stat-strip__value">
                            {move || format_currency(sales.with(|s| s.summary.profit()))}
                        </span>
                    </div>
                    <div class="stat-strip__item">
                        <span class="stat-strip__label">"Profit Margin"</span>
                        <span class="stat-strip__value">
                            {move || format!("{:.1}%", sales.with(|s| s.summary.margin()))}
                        </span>
                    </div>
                </div>

                <div class="chart-grid">
                    <div class="card card--chart">
                        <div class="card__header">
                            <h3 class="card__title">"Daily Revenue"</h3>
                        </div>
                        <AreaChart
                            points=Signal::derive(move || revenue_points.get())
                            max_y=Signal::derive(move || chart_max.get())
                        />
                    </div>
                    <div class="card card--chart">
                        <div class="card__header">
                            <h3 class="card__title">"Daily Profit"</h3>
                        </div>
                        <BarChart
                            bars=Signal::derive(move || profit_bars.get())
                            max_y=Signal::derive(move || chart_max.get())
                        />
                    </div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Top Selling Products"</h3>
                    </div>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Quantity Sold"</TableHeaderCell>
                                <TableHeaderCell>"Revenue"</TableHeaderCell>
                                <TableHeaderCell>"Profit"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = sales.with(|s| s.top_products.clone());
                                if rows.is_empty() {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan="4">
                                                <div class="table__empty">"No sales in this period"</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|p| {
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {p.product_name.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{p.total_quantity}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {format_currency(contracts::decimal::or_zero(p.total_revenue))}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {format_currency(contracts::decimal::or_zero(p.total_profit))}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Sales by Category"</h3>
                        <p class="card__subtitle">
                            {move || format!("Total Products Sold: {}", categories.with(|c| c.total_sold))}
                        </p>
                    </div>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Revenue"</TableHeaderCell>
                                <TableHeaderCell>"Profit"</TableHeaderCell>
                                <TableHeaderCell>"Share"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = categories.with(|c| c.category_sales.clone());
                                if rows.is_empty() {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan="5">
                                                <div class="table__empty">"No category sales in this period"</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|row| {
                                            let share = revenue_share(row.total_revenue);
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {row.category_name.clone()}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>{row.total_quantity}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {format_currency(row.total_revenue)}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {format_currency(row.total_profit)}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div class="share-bar">
                                                                <div
                                                                    class="share-bar__fill"
                                                                    style=format!("width: {:.0}%;", share)
                                                                ></div>
                                                                <span class="share-bar__label">
                                                                    {format!("{:.1}%", share)}
                                                                </span>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
