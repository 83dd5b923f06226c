use contracts::inventory::Product;
use contracts::orders::{Order, OrderDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inventory::api as inventory_api;
use crate::domain::orders::api;
use crate::domain::orders::draft::OrderDraft;
use crate::layout::modal_service::use_alerts;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::date_utils::format_datetime;
use crate::shared::export::download_bytes;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let orders: RwSignal<Vec<Order>> = RwSignal::new(Vec::new());
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loaded, set_is_loaded) = signal(false);

    let show_create_form = RwSignal::new(false);
    let selected_order: RwSignal<Option<OrderDetail>> = RwSignal::new(None);
    let order_to_delete: RwSignal<Option<Order>> = RwSignal::new(None);
    let (exporting, set_exporting) = signal(false);

    let alerts = use_alerts();

    // Monotonic tag per refresh; stale completions are dropped.
    let fetch_seq = StoredValue::new(0u64);

    let load_data = move || {
        let seq = fetch_seq.with_value(|v| v + 1);
        fetch_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let fetched_orders = api::fetch_orders().await;
            let fetched_products = inventory_api::fetch_products().await;
            if fetch_seq.get_value() != seq {
                return;
            }
            match (fetched_orders, fetched_products) {
                (Ok(o), Ok(p)) => {
                    orders.set(o);
                    // Only sellable products can go on a new order.
                    products.set(p.into_iter().filter(|x| x.is_sellable()).collect());
                    set_is_loaded.set(true);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Error fetching orders data: {}", e);
                    orders.set(Vec::new());
                    products.set(Vec::new());
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

    let open_order = move |id: i64| {
        spawn_local(async move {
            match api::fetch_order(id).await {
                Ok(detail) => selected_order.set(Some(detail)),
                Err(e) => log::error!("Error fetching order details: {}", e),
            }
        });
    };

    let export = move |_| {
        set_exporting.set(true);
        spawn_local(async move {
            match api::export_csv().await {
                Ok(bytes) => {
                    if let Err(e) = download_bytes(&bytes, "sales_report.csv", "text/csv") {
                        log::error!("Error saving CSV file: {}", e);
                    }
                }
                Err(e) => log::error!("Error exporting CSV: {}", e),
            }
            set_exporting.set(false);
        });
    };

    view! {
        <div class="page" id="orders--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <Badge>{move || orders.with(|o| o.len().to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export
                        disabled=Signal::derive(move || exporting.get())
                    >
                        {icon("download")}
                        {move || if exporting.get() { " Exporting..." } else { " Export CSV" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create_form.set(true)
                    >
                        {icon("plus")}
                        " New Order"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:id="orders-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Items"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Profit"</TableHeaderCell>
                                <TableHeaderCell>"Notes"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || orders.get()
                                key=|o| o.id
                                children=move |order: Order| {
                                    let id = order.id;
                                    let for_delete = order.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-weight: 500;">{format!("#{}", order.id)}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_datetime(&order.order_date)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.items_count}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(order.total_amount_value())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(order.total_profit_value())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {order.notes.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| open_order(id)
                                                    attr:title="View"
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| order_to_delete.set(Some(for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            {move || {
                                if orders.with(|o| o.is_empty()) && !loading.get() {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                <div class="table__empty">"No orders yet"</div>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any()
                                } else {
                                    view! { <></> }.into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                {move || {
                    if show_create_form.get() {
                        view! {
                            <CreateOrderForm
                                products=Signal::derive(move || products.get())
                                on_close=move || show_create_form.set(false)
                                on_created=move || {
                                    show_create_form.set(false);
                                    load_data();
                                }
                            />
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || selected_order.get().map(|detail| view! {
                    <OrderDetailDialog
                        detail=detail
                        on_close=move || selected_order.set(None)
                    />
                })}

                {move || order_to_delete.get().map(|order| {
                    let id = order.id;
                    view! {
                        <ConfirmDialog
                            title="Delete order?".to_string()
                            message=format!("Delete order #{}? Stock is not restored automatically.", id)
                            on_confirm=move || {
                                spawn_local(async move {
                                    match api::delete_order(id).await {
                                        Ok(()) => {
                                            order_to_delete.set(None);
                                            load_data();
                                        }
                                        Err(e) => {
                                            log::error!("Error deleting order: {}", e);
                                            order_to_delete.set(None);
                                            alerts.show("Error deleting order. Please try again.");
                                        }
                                    }
                                });
                            }
                            on_cancel=move || order_to_delete.set(None)
                        />
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn CreateOrderForm<F1, F2>(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_close: F1,
    on_created: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let draft = RwSignal::new(OrderDraft::default());
    let (saving, set_saving) = signal(false);
    let alerts = use_alerts();

    let on_submit = move |_| {
        let Some(payload) = draft.get_untracked().to_payload() else {
            alerts.show("Please add at least one valid item.");
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::create_order(&payload).await {
                Ok(_) => on_created(),
                Err(e) => {
                    set_saving.set(false);
                    alerts.show(e);
                }
            }
        });
    };

    let total = move || {
        let d = draft.get();
        products.with(|p| d.total(p))
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"New Order"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="order-draft">
                        {move || {
                            let current = draft.get();
                            let row_count = current.items.len();
                            current
                                .items
                                .iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let product_value = item.product.clone();
                                    let quantity_value = item.quantity.clone();
                                    let line = products.with(|p| current.line_total(index, p));
                                    let removable = row_count > 1;
                                    view! {
                                        <div class="order-draft__row">
                                            <select
                                                class="order-draft__product"
                                                on:change=move |ev| {
                                                    draft.update(|d| d.set_product(index, event_target_value(&ev)));
                                                }
                                            >
                                                <option value="" selected=product_value.is_empty()>
                                                    "— Select product —"
                                                </option>
                                                {products
                                                    .get()
                                                    .into_iter()
                                                    .map(|p| {
                                                        let id = p.id.to_string();
                                                        let is_selected = id == product_value;
                                                        let label = format!(
                                                            "{} ({}, stock {})",
                                                            p.name,
                                                            format_currency(p.selling_price_value()),
                                                            p.quantity,
                                                        );
                                                        view! {
                                                            <option value=id selected=is_selected>{label}</option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                            <input
                                                class="order-draft__quantity"
                                                type="number"
                                                min="1"
                                                placeholder="Qty"
                                                prop:value=quantity_value
                                                on:input=move |ev| {
                                                    draft.update(|d| d.set_quantity(index, event_target_value(&ev)));
                                                }
                                            />
                                            <span class="order-draft__line-total">
                                                {format_currency(line)}
                                            </span>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| draft.update(|d| d.remove_item(index))
                                                disabled=!removable
                                                attr:title="Remove item"
                                            >
                                                {icon("x")}
                                            </Button>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| draft.update(|d| d.add_item())
                    >
                        {icon("plus")}
                        " Add Item"
                    </Button>

                    <div class="form__group">
                        <Label>"Notes"</Label>
                        <textarea
                            class="order-draft__notes"
                            rows="2"
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.notes = event_target_value(&ev));
                            }
                        ></textarea>
                    </div>

                    <div class="order-draft__total">
                        <span>"Total"</span>
                        <span class="order-draft__total-value">
                            {move || format_currency(total())}
                        </span>
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Creating..." } else { "Create Order" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OrderDetailDialog<F>(detail: OrderDetail, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let title = format!("Order #{}", detail.id);
    let date = format_datetime(&detail.order_date);
    let total = contracts::decimal::or_zero(detail.total_amount);
    let profit = contracts::decimal::or_zero(detail.total_profit);
    let notes = detail.notes.clone().unwrap_or_default();
    let items = detail.order_items.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <p class="order-detail__date">{date}</p>

                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Product"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Unit Price"</TableHeaderCell>
                                <TableHeaderCell>"Subtotal"</TableHeaderCell>
                                <TableHeaderCell>"Profit"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.product_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(contracts::decimal::or_zero(item.unit_price))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(contracts::decimal::or_zero(item.subtotal))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(contracts::decimal::or_zero(item.profit))}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>

                    <div class="order-detail__totals">
                        <span>{format!("Total: {}", format_currency(total))}</span>
                        <span>{format!("Profit: {}", format_currency(profit))}</span>
                    </div>

                    {(!notes.is_empty()).then(|| view! {
                        <p class="order-detail__notes">{notes.clone()}</p>
                    })}
                </div>
            </div>
        </div>
    }
}
