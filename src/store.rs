//! Session Store
//!
//! Global auth session state with reactive_stores, mirrored into browser
//! localStorage so a reload keeps the administrator signed in. Expiry is the
//! server's job: a 401 from any endpoint clears this store via the api layer.

use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::Storage;

use crate::models::Profile;

const KEY_AUTHENTICATED: &str = "is_authenticated";
const KEY_TOKEN: &str = "auth_token";
const KEY_PROFILE: &str = "user_data";

/// Global session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub authenticated: bool,
    pub token: String,
    pub profile: Option<Profile>,
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Restore the persisted session, if any. Called once at startup.
pub fn load_session() -> SessionState {
    let Some(storage) = local_storage() else {
        return SessionState::default();
    };

    let authenticated = storage
        .get_item(KEY_AUTHENTICATED)
        .ok()
        .flatten()
        .is_some_and(|v| v == "true");
    let token = storage.get_item(KEY_TOKEN).ok().flatten().unwrap_or_default();

    if !authenticated || token.is_empty() {
        return SessionState::default();
    }

    let profile = storage
        .get_item(KEY_PROFILE)
        .ok()
        .flatten()
        .and_then(|json| serde_json::from_str(&json).ok());

    SessionState {
        authenticated: true,
        token,
        profile,
    }
}

/// Store credentials after a successful login
pub fn login_session(store: &SessionStore, token: String, profile: Profile) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(KEY_AUTHENTICATED, "true");
        let _ = storage.set_item(KEY_TOKEN, &token);
        if let Ok(json) = serde_json::to_string(&profile) {
            let _ = storage.set_item(KEY_PROFILE, &json);
        }
    }
    store.authenticated().set(true);
    store.token().set(token);
    store.profile().set(Some(profile));
}

/// Clear the session. Idempotent: concurrent 401s clear storage once.
pub fn clear_session(store: &SessionStore) {
    if !store.authenticated().get_untracked() {
        return;
    }
    web_sys::console::log_1(&"[SESSION] clearing session".into());
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(KEY_AUTHENTICATED);
        let _ = storage.remove_item(KEY_TOKEN);
        let _ = storage.remove_item(KEY_PROFILE);
    }
    store.authenticated().set(false);
    store.token().set(String::new());
    store.profile().set(None);
}

/// Patch the stored profile after an account settings update
pub fn update_profile(store: &SessionStore, profile: Profile) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(&profile) {
            let _ = storage.set_item(KEY_PROFILE, &json);
        }
    }
    store.profile().set(Some(profile));
}
