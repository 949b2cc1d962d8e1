//! Login Page Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api};
use crate::store::{login_session, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api::login(&api, &email_value, &password_value).await {
                Ok((token, profile)) => {
                    web_sys::console::log_1(
                        &format!("[APP] signed in as {}", profile.email).into(),
                    );
                    login_session(&session, token, profile);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="login-layout">
            <form class="login-card" on:submit=on_submit>
                <h1 class="login-title">"Admin Console"</h1>
                <p class="login-subtitle">"Sign in to continue"</p>

                <label class="field-label">"Email"</label>
                <input
                    type="email"
                    class="field-input"
                    placeholder="admin@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="field-label">"Password"</label>
                <input
                    type="password"
                    class="field-input"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|message| view! {
                    <p class="field-error">{message}</p>
                })}

                <button class="primary-btn login-btn" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
