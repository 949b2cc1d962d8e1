//! Sidebar Component
//!
//! Navigation between screens plus the signed-in profile block with
//! account settings and logout.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::store::{clear_session, use_session, SessionStateStoreFields};

#[component]
pub fn Sidebar(set_show_profile: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let display_name = move || {
        session
            .profile()
            .get()
            .map(|p| p.username)
            .unwrap_or_else(|| "Admin".to_string())
    };
    let role = move || {
        session
            .profile()
            .get()
            .map(|p| p.role)
            .unwrap_or_default()
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"Admin Console"</div>

            <nav class="sidebar-nav">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        let is_active = move || ctx.page.get() == page;
                        view! {
                            <button
                                class=move || if is_active() { "nav-item active" } else { "nav-item" }
                                on:click=move |_| ctx.go_to(page)
                            >
                                {page.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-profile">
                <div class="profile-name">{display_name}</div>
                <div class="profile-role">{role}</div>
                <button class="nav-item" on:click=move |_| set_show_profile.set(true)>
                    "Account Settings"
                </button>
                <button class="nav-item logout" on:click=move |_| clear_session(&session)>
                    "Log Out"
                </button>
            </div>
        </aside>
    }
}
