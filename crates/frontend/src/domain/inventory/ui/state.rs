use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::inventory::filter::{ProductQuery, SortField, SortOrder};

const STORAGE_KEY: &str = "inventory_list_state_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub search_term: String,
    pub selected_category: Option<i64>,
    pub sort_by: String,
    pub sort_order: String,
}

#[derive(Clone, Debug)]
pub struct InventoryListState {
    // Filters
    pub search_term: String,
    pub selected_category: Option<i64>,

    // Sorting
    pub sort_field: SortField,
    pub sort_order: SortOrder,

    // Load flag
    pub is_loaded: bool,
}

impl Default for InventoryListState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: None,
            sort_field: SortField::Name,
            sort_order: SortOrder::Asc,
            is_loaded: false,
        }
    }
}

impl InventoryListState {
    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            search_term: self.search_term.clone(),
            category: self.selected_category,
            sort_field: self.sort_field,
            sort_order: self.sort_order,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedState> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else { return };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

pub fn persist_state(signal: RwSignal<InventoryListState>) {
    let st = signal.get_untracked();
    let persisted = PersistedState {
        search_term: st.search_term,
        selected_category: st.selected_category,
        sort_by: st.sort_field.key().to_string(),
        sort_order: st.sort_order.key().to_string(),
    };
    save_persisted(&persisted);
}

pub fn create_state() -> RwSignal<InventoryListState> {
    let mut st = InventoryListState::default();
    if let Some(p) = load_persisted() {
        st.search_term = p.search_term;
        st.selected_category = p.selected_category;
        st.sort_field = SortField::parse(&p.sort_by);
        st.sort_order = SortOrder::parse(&p.sort_order);
    }
    RwSignal::new(st)
}
