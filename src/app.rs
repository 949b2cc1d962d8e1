//! Admin Console App
//!
//! Root component: builds the session store, context, and api client, then
//! renders either the login screen or the sidebar layout with the current
//! page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{self, ApiClient, Document};
use crate::components::{
    AdminsPage, AlertModal, ContentPage, DashboardPage, LoadingScreen, LoginPage, ProfileModal,
    SessionsPage, Sidebar, UsersPage,
};
use crate::context::{AppContext, Page};
use crate::store::{self, SessionStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Session restored from localStorage before the first render
    let session = Store::new(store::load_session());
    provide_context(session);

    let ctx = AppContext::new();
    provide_context(ctx);

    provide_context(ApiClient::new(api::base_url(), session));

    let (show_profile, set_show_profile) = signal(false);

    view! {
        <Show
            when=move || session.authenticated().get()
            fallback=|| view! { <LoginPage /> }
        >
            <div class="app-layout">
                <Sidebar set_show_profile=set_show_profile />
                <main class="main-content">
                    {move || match ctx.page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Users => view! { <UsersPage /> }.into_any(),
                        Page::Administrators => view! { <AdminsPage /> }.into_any(),
                        Page::Sessions => view! { <SessionsPage /> }.into_any(),
                        Page::PrivacyPolicy => {
                            view! { <ContentPage doc=Document::PrivacyPolicy /> }.into_any()
                        }
                        Page::Terms => view! { <ContentPage doc=Document::Terms /> }.into_any(),
                    }}
                </main>
            </div>
            <ProfileModal show=show_profile set_show=set_show_profile />
        </Show>
        <AlertModal />
        <LoadingScreen />
    }
}
