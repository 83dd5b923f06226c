mod state;

use contracts::inventory::{Category, CategoryPayload, Product, ProductPayload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::inventory::api;
use crate::domain::inventory::filter::{process, SortField, SortOrder};
use crate::layout::modal_service::use_alerts;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SearchInput};
use crate::shared::number_format::format_currency;
use state::{create_state, persist_state};

#[component]
pub fn InventoryPage() -> impl IntoView {
    let state = create_state();
    let products: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let categories: RwSignal<Vec<Category>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let show_product_form = RwSignal::new(false);
    let editing_product: RwSignal<Option<Product>> = RwSignal::new(None);
    let show_category_form = RwSignal::new(false);
    let product_to_delete: RwSignal<Option<Product>> = RwSignal::new(None);
    let category_to_delete: RwSignal<Option<Category>> = RwSignal::new(None);

    let alerts = use_alerts();

    // Monotonic tag per refresh; a completion that is no longer the latest
    // must not overwrite newer state.
    let fetch_seq = StoredValue::new(0u64);

    let load_data = move || {
        let seq = fetch_seq.with_value(|v| v + 1);
        fetch_seq.set_value(seq);
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let fetched_products = api::fetch_products().await;
            let fetched_categories = api::fetch_categories().await;
            if fetch_seq.get_value() != seq {
                return;
            }
            match (fetched_products, fetched_categories) {
                (Ok(p), Ok(c)) => {
                    products.set(p);
                    categories.set(c);
                    state.update(|s| s.is_loaded = true);
                }
                (Err(e), _) | (_, Err(e)) => {
                    log::error!("Error fetching inventory data: {}", e);
                    products.set(Vec::new());
                    categories.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    // The visible table is recomputed from the full list on every change.
    let visible = Memo::new(move |_| {
        let query = state.with(|s| s.query());
        products.with(|p| process(p, &query))
    });

    let on_search = Callback::new(move |term: String| {
        state.update(|s| s.search_term = term);
        persist_state(state);
    });

    let category_filter = RwSignal::new(state.with_untracked(|s| {
        s.selected_category
            .map(|id| id.to_string())
            .unwrap_or_default()
    }));
    Effect::new(move |_| {
        let raw = category_filter.get();
        state.update(|s| s.selected_category = raw.parse::<i64>().ok());
        persist_state(state);
    });

    let sort_field_sel = RwSignal::new(state.with_untracked(|s| s.sort_field.key().to_string()));
    let sort_order_sel = RwSignal::new(state.with_untracked(|s| s.sort_order.key().to_string()));
    Effect::new(move |_| {
        let field = SortField::parse(&sort_field_sel.get());
        let order = SortOrder::parse(&sort_order_sel.get());
        state.update(|s| {
            s.sort_field = field;
            s.sort_order = order;
        });
        persist_state(state);
    });

    let toggle_sort = move |field: SortField| {
        move |_| {
            let (current_field, current_order) =
                state.with_untracked(|s| (s.sort_field, s.sort_order));
            if current_field == field {
                sort_order_sel.set(current_order.flipped().key().to_string());
            } else {
                sort_field_sel.set(field.key().to_string());
                sort_order_sel.set(SortOrder::Asc.key().to_string());
            }
        }
    };

    let low_stock_count = move || products.with(|p| p.iter().filter(|x| x.is_low_stock).count());
    let product_count_for = move |category_id: i64| {
        products.with(|p| p.iter().filter(|x| x.category == category_id).count())
    };

    let sortable_header = move |field: SortField| {
        view! {
            <div class="table__sortable-header" style="cursor:pointer;" on:click=toggle_sort(field)>
                {field.label()}
                <span class=move || state.with(|s| get_sort_class(s.sort_field.key(), field.key()))>
                    {move || {
                        state.with(|s| {
                            get_sort_indicator(
                                s.sort_field.key(),
                                field.key(),
                                s.sort_order.is_ascending(),
                            )
                        })
                    }}
                </span>
            </div>
        }
    };

    view! {
        <div class="page" id="inventory--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory Management"</h1>
                    <p class="page__subtitle">"Manage your products, categories, and stock levels"</p>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| show_category_form.set(true)
                    >
                        {icon("plus")}
                        " Add Category"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            editing_product.set(None);
                            show_product_form.set(true);
                        }
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                value=Signal::derive(move || state.with(|s| s.search_term.clone()))
                                on_change=on_search
                                placeholder="Search products, categories, or SKU..."
                            />
                            <div class="filter-panel__field">
                                <Select value=category_filter>
                                    <option value="">"All Categories"</option>
                                    <For
                                        each=move || categories.get()
                                        key=|c| c.id
                                        children=move |category: Category| {
                                            view! {
                                                <option value=category.id.to_string()>
                                                    {category.name.clone()}
                                                </option>
                                            }
                                        }
                                    />
                                </Select>
                            </div>
                            <div class="filter-panel__field">
                                <Select value=sort_field_sel>
                                    {SortField::ALL
                                        .into_iter()
                                        .map(|field| {
                                            view! {
                                                <option value=field.key()>{field.label()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </Select>
                            </div>
                            <div class="filter-panel__field">
                                <Select value=sort_order_sel>
                                    <option value="asc">"Ascending"</option>
                                    <option value="desc">"Descending"</option>
                                </Select>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| load_data()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {icon("refresh")}
                                {move || if loading.get() { " Loading..." } else { " Refresh" }}
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="stat-strip">
                    <div class="stat-strip__item">
                        <span class="stat-strip__label">"Total Products"</span>
                        <span class="stat-strip__value">{move || products.with(|p| p.len())}</span>
                    </div>
                    <div class="stat-strip__item stat-strip__item--warning">
                        <span class="stat-strip__label">"Low Stock Items"</span>
                        <span class="stat-strip__value">{low_stock_count}</span>
                    </div>
                    <div class="stat-strip__item">
                        <span class="stat-strip__label">"Categories"</span>
                        <span class="stat-strip__value">{move || categories.with(|c| c.len())}</span>
                    </div>
                    <div class="stat-strip__item">
                        <span class="stat-strip__label">"Filtered Results"</span>
                        <span class="stat-strip__value">{move || visible.get().len()}</span>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id="inventory-products-table" attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>{sortable_header(SortField::Name)}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header(SortField::Category)}</TableHeaderCell>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>{sortable_header(SortField::CostPrice)}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header(SortField::SellingPrice)}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header(SortField::Quantity)}</TableHeaderCell>
                                <TableHeaderCell>{sortable_header(SortField::Profit)}</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|p| p.id
                                children=move |product: Product| {
                                    let for_edit = product.clone();
                                    let for_delete = product.clone();
                                    let selling = product
                                        .selling_price
                                        .map(format_currency)
                                        .unwrap_or_else(|| "—".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{product.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {product.category_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {product.sku.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(product.cost_price_value())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{selling}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{product.quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format_currency(product.profit_per_unit_value())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if product.is_low_stock {
                                                        view! { <span class="badge badge--warning">"Low Stock"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--success">"In Stock"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| {
                                                        editing_product.set(Some(for_edit.clone()));
                                                        show_product_form.set(true);
                                                    }
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| product_to_delete.set(Some(for_delete.clone()))
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
                                if visible.get().is_empty() {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan="9">
                                                <div class="table__empty">
                                                    "No products match your search criteria"
                                                </div>
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

                <div class="card card--categories">
                    <div class="card__header">
                        <h3 class="card__title">"Categories"</h3>
                        <p class="card__subtitle">"Manage your product categories"</p>
                    </div>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Category Name"</TableHeaderCell>
                                <TableHeaderCell>"Description"</TableHeaderCell>
                                <TableHeaderCell>"Products Count"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || categories.get()
                                key=|c| c.id
                                children=move |category: Category| {
                                    let for_delete = category.clone();
                                    let description = category
                                        .description
                                        .clone()
                                        .filter(|d| !d.is_empty())
                                        .unwrap_or_else(|| "No description".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || product_count_for(category.id)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| category_to_delete.set(Some(for_delete.clone()))
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || {
                    if show_product_form.get() {
                        let product = editing_product.get();
                        view! {
                            <ProductForm
                                product=product
                                categories=Signal::derive(move || categories.get())
                                on_close=move || {
                                    show_product_form.set(false);
                                    editing_product.set(None);
                                }
                                on_saved=move || {
                                    show_product_form.set(false);
                                    editing_product.set(None);
                                    load_data();
                                }
                            />
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || {
                    if show_category_form.get() {
                        view! {
                            <CategoryForm
                                on_close=move || show_category_form.set(false)
                                on_saved=move || {
                                    show_category_form.set(false);
                                    load_data();
                                }
                            />
                        }.into_any()
                    } else {
                        view! { <></> }.into_any()
                    }
                }}

                {move || product_to_delete.get().map(|product| {
                    let id = product.id;
                    view! {
                        <ConfirmDialog
                            title="Delete product?".to_string()
                            message=format!("Delete \"{}\"? This cannot be undone.", product.name)
                            on_confirm=move || {
                                spawn_local(async move {
                                    match api::delete_product(id).await {
                                        Ok(()) => {
                                            product_to_delete.set(None);
                                            load_data();
                                        }
                                        Err(e) => {
                                            log::error!("Error deleting product: {}", e);
                                            product_to_delete.set(None);
                                            alerts.show(
                                                "Error deleting product. It may be referenced in orders.",
                                            );
                                        }
                                    }
                                });
                            }
                            on_cancel=move || product_to_delete.set(None)
                        />
                    }
                })}

                {move || category_to_delete.get().map(|category| {
                    let id = category.id;
                    view! {
                        <ConfirmDialog
                            title="Delete category?".to_string()
                            message=format!("Delete \"{}\"? Products keep their data but lose the grouping.", category.name)
                            on_confirm=move || {
                                spawn_local(async move {
                                    match api::delete_category(id).await {
                                        Ok(()) => {
                                            category_to_delete.set(None);
                                            load_data();
                                        }
                                        Err(e) => {
                                            log::error!("Error deleting category: {}", e);
                                            category_to_delete.set(None);
                                            alerts.show(
                                                "Error deleting category. It may contain products or be referenced elsewhere.",
                                            );
                                        }
                                    }
                                });
                            }
                            on_cancel=move || category_to_delete.set(None)
                        />
                    }
                })}
            </div>
        </div>
    }
}

#[component]
fn ProductForm<F1, F2>(
    product: Option<Product>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    on_close: F1,
    on_saved: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let editing_id = product.as_ref().map(|p| p.id);
    let title = if editing_id.is_some() { "Edit Product" } else { "Add Product" };

    let name = RwSignal::new(product.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let category = RwSignal::new(
        product
            .as_ref()
            .map(|p| p.category.to_string())
            .unwrap_or_default(),
    );
    let cost_price = RwSignal::new(
        product
            .as_ref()
            .and_then(|p| p.cost_price)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let selling_price = RwSignal::new(
        product
            .as_ref()
            .and_then(|p| p.selling_price)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let quantity = RwSignal::new(
        product
            .as_ref()
            .map(|p| p.quantity.to_string())
            .unwrap_or_default(),
    );
    let low_stock_threshold = RwSignal::new(
        product
            .as_ref()
            .map(|p| p.low_stock_threshold.to_string())
            .unwrap_or_else(|| "10".to_string()),
    );
    let description = RwSignal::new(
        product
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let sku = RwSignal::new(
        product
            .as_ref()
            .and_then(|p| p.sku.clone())
            .unwrap_or_default(),
    );

    let (saving, set_saving) = signal(false);
    let alerts = use_alerts();

    let on_save = move |_| {
        let Ok(category_id) = category.get().parse::<i64>() else {
            alerts.show("Please select a category.");
            return;
        };

        // Blank SKU is left out of the payload; the server generates one.
        let sku_value = sku.get();
        let payload = ProductPayload {
            name: name.get(),
            category: category_id,
            cost_price: cost_price.get(),
            selling_price: selling_price.get(),
            quantity: quantity.get(),
            low_stock_threshold: low_stock_threshold.get(),
            description: description.get(),
            sku: if sku_value.trim().is_empty() {
                None
            } else {
                Some(sku_value)
            },
        };

        set_saving.set(true);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api::update_product(id, &payload).await,
                None => api::create_product(&payload).await,
            };
            match result {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_saving.set(false);
                    alerts.show(e);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Product Name"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Category"</Label>
                        <Select value=category>
                            <option value="">"— Select category —"</option>
                            <For
                                each=move || categories.get()
                                key=|c| c.id
                                children=move |c: Category| {
                                    view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                                }
                            />
                        </Select>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Cost Price"</Label>
                            <Input value=cost_price placeholder="0.00" />
                        </div>
                        <div class="form__group">
                            <Label>"Selling Price"</Label>
                            <Input value=selling_price placeholder="Optional" />
                        </div>
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Quantity"</Label>
                            <Input value=quantity placeholder="0" />
                        </div>
                        <div class="form__group">
                            <Label>"Low Stock Threshold"</Label>
                            <Input value=low_stock_threshold />
                        </div>
                    </div>

                    <div class="form__group">
                        <Label>"SKU"</Label>
                        <Input value=sku placeholder="Leave blank to auto-generate" />
                    </div>

                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Textarea value=description attr:rows=3 />
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
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CategoryForm<F1, F2>(on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let alerts = use_alerts();

    let on_save = move |_| {
        let payload = CategoryPayload {
            name: name.get(),
            description: description.get(),
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::create_category(&payload).await {
                Ok(_) => on_saved(),
                Err(e) => {
                    set_saving.set(false);
                    alerts.show(e);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"Add Category"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    <div class="form__group">
                        <Label>"Category Name"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Textarea value=description attr:rows=3 />
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
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
