//! Users Page Component
//!
//! Paginated end-user table with subscription tier tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api, SubscriptionFilter};
use crate::components::PageControls;
use crate::models::UserAccount;

const TABS: [SubscriptionFilter; 3] = [
    SubscriptionFilter::All,
    SubscriptionFilter::Free,
    SubscriptionFilter::Subscribers,
];

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = use_api();

    let (tab, set_tab) = signal(SubscriptionFilter::All);
    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (users, set_users) = signal(Vec::<UserAccount>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retry, set_retry) = signal(0u32);

    // Refetch on page change, tab change, or manual retry
    Effect::new(move |_| {
        let page = current_page.get();
        let filter = tab.get();
        let _ = retry.get();
        set_loading.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api::list_users(&api, page, filter).await {
                Ok(loaded) => {
                    set_users.set(loaded.users);
                    set_total_pages.set(loaded.total_pages.max(1));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let change_tab = move |next: SubscriptionFilter| {
        set_tab.set(next);
        set_current_page.set(1);
    };

    view! {
        <div class="page users-page">
            <div class="card">
                <div class="tab-row">
                    {TABS
                        .into_iter()
                        .map(|t| {
                            let is_active = move || tab.get() == t;
                            view! {
                                <button
                                    class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                                    on:click=move |_| change_tab(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || if loading.get() {
                    view! { <div class="spinner"></div> }.into_any()
                } else if let Some(message) = error.get() {
                    view! {
                        <div class="inline-error">
                            <p>{message}</p>
                            <button class="secondary-btn" on:click=move |_| set_retry.update(|r| *r += 1)>
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any()
                } else if users.get().is_empty() {
                    view! { <p class="empty-state">"No users found."</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"SL no."</th>
                                    <th>"User"</th>
                                    <th>"Email"</th>
                                    <th>"Subscription"</th>
                                    <th>"Phone Number"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || users.get()
                                    key=|user| user.id
                                    children=move |user| view! {
                                        <tr>
                                            <td>{format!("#{}", user.id)}</td>
                                            <td class="user-name">{user.name}</td>
                                            <td>{user.email}</td>
                                            <td>{user.subscription}</td>
                                            <td>{user.phone}</td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}

                <div class="table-footer">
                    <span class="page-status">
                        {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                    </span>
                    <PageControls
                        current_page=current_page
                        set_current_page=set_current_page
                        total_pages=total_pages
                    />
                </div>
            </div>
        </div>
    }
}
