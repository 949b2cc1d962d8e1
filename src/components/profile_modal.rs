//! Profile Modal Component
//!
//! Account settings: edit the signed-in administrator's name and email.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api};
use crate::context::AppContext;
use crate::models::Profile;
use crate::store::{update_profile, use_session, SessionStateStoreFields};

#[component]
pub fn ProfileModal(show: ReadSignal<bool>, set_show: WriteSignal<bool>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());

    // Refill the form every time the modal opens
    Effect::new(move |_| {
        if show.get() {
            if let Some(profile) = session.profile().get_untracked() {
                set_username.set(profile.username);
                set_email.set(profile.email);
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username_value = username.get().trim().to_string();
        let email_value = email.get().trim().to_string();
        if username_value.is_empty() || email_value.is_empty() {
            return;
        }

        let api = api.get_value();
        ctx.begin_loading("Updating profile");
        spawn_local(async move {
            match api::update_profile(&api, &username_value, &email_value).await {
                Ok(()) => {
                    let role = session
                        .profile()
                        .get_untracked()
                        .map(|p| p.role)
                        .unwrap_or_else(|| "Admin".to_string());
                    update_profile(
                        &session,
                        Profile {
                            username: username_value,
                            email: email_value,
                            role,
                        },
                    );
                    ctx.notify_success("Profile updated");
                    set_show.set(false);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
            ctx.end_loading();
        });
    };

    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop">
                <form class="modal" on:submit=on_submit>
                    <div class="modal-header">
                        <h2 class="modal-title">"Account Settings"</h2>
                        <button type="button" class="close-btn" on:click=move |_| set_show.set(false)>
                            "×"
                        </button>
                    </div>

                    <label class="field-label">"Name"</label>
                    <input
                        type="text"
                        class="field-input"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />

                    <label class="field-label">"Email"</label>
                    <input
                        type="email"
                        class="field-input"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <div class="modal-actions">
                        <button type="button" class="secondary-btn" on:click=move |_| set_show.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="primary-btn">"Save Changes"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
