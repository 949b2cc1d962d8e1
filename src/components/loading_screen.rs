//! Loading Screen Component
//!
//! Full-screen overlay driven by the loading slot in [`AppContext`].

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.loading.get().map(|message| view! {
            <div class="loading-overlay">
                <div class="spinner"></div>
                <p class="loading-message">{message}</p>
            </div>
        })}
    }
}
