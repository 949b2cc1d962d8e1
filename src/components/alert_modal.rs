//! Alert Modal Component
//!
//! Transient success/error notification. Auto-dismisses via the context
//! timer; the OK button dismisses early.

use leptos::prelude::*;

use crate::context::{AlertKind, AppContext};

#[component]
pub fn AlertModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.alert.get().map(|alert| {
            let kind_class = match alert.kind {
                AlertKind::Success => "alert-modal success",
                AlertKind::Error => "alert-modal error",
            };
            view! {
                <div class="modal-backdrop">
                    <div class=kind_class>
                        <p class="alert-message">{alert.message}</p>
                        <button class="primary-btn" on:click=move |_| ctx.dismiss_alert()>
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
