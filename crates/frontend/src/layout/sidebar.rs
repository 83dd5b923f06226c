//! Sidebar with the four top-level navigation entries.

use crate::layout::global_context::{AppGlobalContext, ViewKey};
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let theme = use_theme();

    view! {
        <aside class=move || {
            if ctx.sidebar_open.get() {
                "sidebar"
            } else {
                "sidebar sidebar--collapsed"
            }
        }>
            <div class="sidebar__brand">
                {icon("store")}
                <span class="sidebar__brand-name">"Store Manager"</span>
                <button
                    class="sidebar__toggle"
                    on:click=move |_| ctx.sidebar_open.update(|open| *open = !*open)
                    title="Toggle sidebar"
                >
                    {icon("menu")}
                </button>
            </div>

            <nav class="sidebar__nav">
                {ViewKey::ALL
                    .into_iter()
                    .map(|view| {
                        let is_active = move || ctx.active_view.get() == view;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| ctx.activate(view)
                            >
                                {icon(view.icon_name())}
                                <span class="sidebar__item-label">{view.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <button
                    class="sidebar__item"
                    on:click=move |_| theme.toggle()
                    title="Toggle theme"
                >
                    {move || icon(theme.get_theme().toggle_icon())}
                    <span class="sidebar__item-label">"Theme"</span>
                </button>
            </div>
        </aside>
    }
}
