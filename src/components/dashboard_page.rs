//! Dashboard Page Component
//!
//! Greeting card plus the user overview counters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api};
use crate::models::DashboardSummary;
use crate::store::{use_session, SessionStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();

    let (summary, set_summary) = signal(DashboardSummary::default());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retry, set_retry) = signal(0u32);

    Effect::new(move |_| {
        let _ = retry.get();
        set_loading.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api::dashboard_summary(&api).await {
                Ok(loaded) => set_summary.set(loaded),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let greeting_name = move || {
        session
            .profile()
            .get()
            .map(|p| p.username)
            .unwrap_or_else(|| "Admin".to_string())
    };

    view! {
        <div class="page dashboard-page">
            <div class="card greeting-card">
                <p class="greeting-hint">"Hi, Good Morning"</p>
                <h1 class="greeting-name">{greeting_name}</h1>
            </div>

            <div class="card">
                <h2 class="card-title">"User's Overview"</h2>
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
                } else {
                    let s = summary.get();
                    view! {
                        <div class="stat-grid">
                            <div class="stat-card">
                                <p class="stat-value">{s.total_users}</p>
                                <p class="stat-title">"Total Users"</p>
                            </div>
                            <div class="stat-card">
                                <p class="stat-value">{s.new_users_today}</p>
                                <p class="stat-title">"Today's New Users"</p>
                            </div>
                            <div class="stat-card">
                                <p class="stat-value">{s.positive_reviews}</p>
                                <p class="stat-title">"Total Positive Review"</p>
                            </div>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
