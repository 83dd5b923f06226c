use leptos::prelude::*;
use thaw::*;

/// Blocking confirmation dialog for destructive actions.
///
/// Rendered conditionally by the owning view (`signal.get().map(|item| ...)`),
/// so the props are plain values captured at open time.
#[component]
pub fn ConfirmDialog<F1, F2>(
    title: String,
    message: String,
    #[prop(optional)] confirm_label: Option<&'static str>,
    on_confirm: F1,
    on_cancel: F2,
) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let confirm_label = confirm_label.unwrap_or("Delete");

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel()>
            <div class="modal modal--confirm" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                </div>
                <div class="modal-body">
                    <p class="modal-message">{message}</p>
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel()
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm()
                        attr:class="button--danger"
                    >
                        {confirm_label}
                    </Button>
                </div>
            </div>
        </div>
    }
}
