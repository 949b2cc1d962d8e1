//! Sessions Page Component
//!
//! Left: the paginated session table. Right: the configuration panels for
//! background sounds, moods, and voices. Mood chips open the question
//! editor; deletions are eager and confirmed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api};
use crate::components::{ConfirmModal, MoodQuestionsModal, PageControls, SoundPanel};
use crate::context::AppContext;
use crate::models::{Mood, SessionRow};

#[component]
pub fn SessionsPage() -> impl IntoView {
    view! {
        <div class="page sessions-page">
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"Session Details"</h2>
                </div>
                <div class="sessions-grid">
                    <SessionTable />
                    <div class="config-column">
                        <SoundPanel />
                        <MoodPanel />
                        <VoicePanel />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SessionTable() -> impl IntoView {
    let api = use_api();

    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (rows, set_rows) = signal(Vec::<SessionRow>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (retry, set_retry) = signal(0u32);

    Effect::new(move |_| {
        let page = current_page.get();
        let _ = retry.get();
        set_loading.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api::list_sessions(&api, page).await {
                Ok(loaded) => {
                    set_rows.set(loaded.rows);
                    set_total_pages.set(loaded.total_pages.max(1));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="session-table">
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
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"User name"</th>
                                <th>"Average mood"</th>
                                <th>"After session"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || { rows.get().into_iter().enumerate().collect::<Vec<_>>() }
                                key=|(slot, _)| *slot
                                children=move |(_, row)| view! {
                                    <tr>
                                        <td>{row.user_name}</td>
                                        <td>{row.average_mood}</td>
                                        <td>{row.after_session}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_any()
            }}
            <PageControls
                current_page=current_page
                set_current_page=set_current_page
                total_pages=total_pages
            />
        </div>
    }
}

#[component]
fn MoodPanel() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (moods, set_moods) = signal(Vec::<Mood>::new());
    let (reload, set_reload) = signal(0u32);
    let (show_add, set_show_add) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (pending_delete, set_pending_delete) = signal::<Option<Mood>>(None);
    let (editing_mood, set_editing_mood) = signal::<Option<Mood>>(None);

    Effect::new(move |_| {
        let _ = reload.get();
        let api = api.get_value();
        spawn_local(async move {
            match api::list_moods(&api).await {
                Ok(loaded) => set_moods.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] mood load failed: {err}").into())
                }
            }
        });
    });

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        set_new_name.set(String::new());
        set_show_add.set(false);
        let api = api.get_value();
        spawn_local(async move {
            match api::add_mood(&api, &name).await {
                Ok(()) => {
                    ctx.notify_success("Mood added");
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
        });
    };

    let on_confirm_delete = move |_| {
        let Some(mood) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api::delete_mood(&api, mood.id).await {
                Ok(()) => {
                    ctx.notify_success("Mood deleted");
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
        });
    };

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|mood| format!("Delete the \"{}\" mood and all of its questions?", mood.name))
    });

    view! {
        <div class="config-panel">
            <div class="panel-header">
                <span class="panel-badge">"Total Mood"</span>
                <button class="primary-btn" on:click=move |_| set_show_add.set(true)>
                    "+ Add Mood"
                </button>
            </div>

            <div class="chip-row">
                <For
                    each=move || moods.get()
                    key=|mood| mood.id
                    children=move |mood| {
                        let open_target = mood.clone();
                        let delete_target = mood.clone();
                        view! {
                            <span class="chip-wrap">
                                <button
                                    class="chip"
                                    on:click=move |_| set_editing_mood.set(Some(open_target.clone()))
                                >
                                    {mood.name.clone()}
                                </button>
                                <button
                                    class="chip-delete"
                                    on:click=move |_| set_pending_delete.set(Some(delete_target.clone()))
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>

            <Show when=move || show_add.get()>
                <div class="modal-backdrop">
                    <form class="modal" on:submit=on_add>
                        <div class="modal-header">
                            <h2 class="modal-title">"Add New Mood"</h2>
                            <button type="button" class="close-btn" on:click=move |_| set_show_add.set(false)>
                                "×"
                            </button>
                        </div>
                        <label class="field-label">"Mood Name"</label>
                        <input
                            type="text"
                            class="field-input"
                            placeholder="Enter mood name (e.g., Happy, Anxious)"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| set_show_add.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">"Add Mood"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <ConfirmModal
                message=delete_message
                on_confirm=on_confirm_delete
                on_cancel=move |_| set_pending_delete.set(None)
            />
            <MoodQuestionsModal
                mood=editing_mood
                set_mood=set_editing_mood
                on_saved=Callback::new(move |_| set_reload.update(|r| *r += 1))
            />
        </div>
    }
}

/// Static voice list, display only
#[component]
fn VoicePanel() -> impl IntoView {
    view! {
        <div class="config-panel">
            <span class="panel-badge">"Total Voice"</span>
            <div class="chip-row">
                <span class="chip">"Male"</span>
                <span class="chip">"Female"</span>
            </div>
        </div>
    }
}
