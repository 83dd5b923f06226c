use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::{AlertHost, AlertService};
use crate::layout::AppShell;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide AlertService for centralized blocking error dialogs
    provide_context(AlertService::new());

    view! {
        <ThemeProvider>
            <AppShell />
            <AlertHost />
        </ThemeProvider>
    }
}
