pub mod global_context;
pub mod modal_service;
pub mod sidebar;

use global_context::{AppGlobalContext, ViewKey};
use leptos::prelude::*;
use sidebar::Sidebar;

use crate::dashboards::analytics::ui::AnalyticsDashboard;
use crate::dashboards::overview::ui::OverviewDashboard;
use crate::domain::inventory::ui::InventoryPage;
use crate::domain::orders::ui::OrdersPage;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |        Active view           |
/// |  (Left)   |        (Center)              |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {move || match ctx.active_view.get() {
                        ViewKey::Dashboard => view! { <OverviewDashboard /> }.into_any(),
                        ViewKey::Inventory => view! { <InventoryPage /> }.into_any(),
                        ViewKey::Orders => view! { <OrdersPage /> }.into_any(),
                        ViewKey::Analytics => view! { <AnalyticsDashboard /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
