use leptos::prelude::*;
use web_sys::window;

/// The four top-level views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKey {
    #[default]
    Dashboard,
    Inventory,
    Orders,
    Analytics,
}

impl ViewKey {
    pub const ALL: [ViewKey; 4] = [
        ViewKey::Dashboard,
        ViewKey::Inventory,
        ViewKey::Orders,
        ViewKey::Analytics,
    ];

    /// Key used in the URL query string and as a stable DOM id part.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewKey::Dashboard => "dashboard",
            ViewKey::Inventory => "inventory",
            ViewKey::Orders => "orders",
            ViewKey::Analytics => "analytics",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(ViewKey::Dashboard),
            "inventory" => Some(ViewKey::Inventory),
            "orders" => Some(ViewKey::Orders),
            "analytics" => Some(ViewKey::Analytics),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKey::Dashboard => "Dashboard",
            ViewKey::Inventory => "Inventory",
            ViewKey::Orders => "Orders",
            ViewKey::Analytics => "Analytics",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            ViewKey::Dashboard => "layout-dashboard",
            ViewKey::Inventory => "inventory",
            ViewKey::Orders => "orders",
            ViewKey::Analytics => "bar-chart",
        }
    }
}

/// Global UI store: the active view plus sidebar visibility.
///
/// Owned by the app root and handed to components via context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<ViewKey>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(ViewKey::Dashboard),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn activate(&self, view: ViewKey) {
        self.active_view.set(view);
    }

    /// Restore the active view from `?view=` and keep the URL in sync with it.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(view) = view_from_query(&search) {
            self.active_view.set(view);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active_view.get();
            let new_search = format!("?view={}", active.as_str());

            // Use untracked to avoid creating unnecessary reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_search {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_search),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn view_from_query(search: &str) -> Option<ViewKey> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("view="))
        .and_then(ViewKey::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_view_from_query_string() {
        assert_eq!(view_from_query("?view=orders"), Some(ViewKey::Orders));
        assert_eq!(
            view_from_query("?foo=1&view=analytics"),
            Some(ViewKey::Analytics)
        );
        assert_eq!(view_from_query("?view=unknown"), None);
        assert_eq!(view_from_query(""), None);
    }
}
