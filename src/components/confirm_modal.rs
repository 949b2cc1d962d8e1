//! Confirmation Modal Component
//!
//! Reusable destructive-action gate. Hidden while `message` is None.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="modal-backdrop">
                <div class="modal confirm-modal">
                    <h2 class="modal-title">"Confirm Deletion"</h2>
                    <p class="confirm-text">{msg}</p>
                    <div class="modal-actions">
                        <button class="secondary-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="danger-btn" on:click=move |_| on_confirm.run(())>
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        })}
    }
}
