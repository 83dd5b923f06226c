use leptos::prelude::*;
use thaw::*;

/// Centralized channel for blocking alert dialogs.
///
/// Validation failures on create/update and constraint failures on delete
/// surface here; the host renders a modal the user has to dismiss before
/// continuing.
#[derive(Clone, Copy)]
pub struct AlertService {
    message: RwSignal<Option<String>>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// Show a blocking alert with the given message.
    pub fn show(&self, message: impl Into<String>) {
        self.message.set(Some(message.into()));
    }

    pub fn dismiss(&self) {
        self.message.set(None);
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_alerts() -> AlertService {
    use_context::<AlertService>().expect("AlertService not provided in context")
}

/// Renders the pending alert, if any. Mounted once at the app root.
#[component]
pub fn AlertHost() -> impl IntoView {
    let alerts = use_alerts();

    view! {
        {move || {
            alerts.message.get().map(|message| {
                view! {
                    <div class="modal-overlay">
                        <div class="modal modal--alert" on:click=move |ev| ev.stop_propagation()>
                            <div class="modal-header">
                                <h2 class="modal-title">"Something went wrong"</h2>
                            </div>
                            <div class="modal-body">
                                <div class="alert alert--error">{message}</div>
                            </div>
                            <div class="modal-footer">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| alerts.dismiss()
                                >
                                    "OK"
                                </Button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}
