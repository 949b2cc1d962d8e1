//! Sound Panel Component
//!
//! Background sound grid with single-clip preview, multipart upload, and
//! confirmed delete. Leaving the page stops whatever is playing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api};
use crate::audio::{self, PreviewState};
use crate::components::ConfirmModal;
use crate::context::AppContext;
use crate::models::BackgroundSound;

#[component]
pub fn SoundPanel() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (sounds, set_sounds) = signal(Vec::<BackgroundSound>::new());
    let (reload, set_reload) = signal(0u32);
    let (show_upload, set_show_upload) = signal(false);
    let (pending_delete, set_pending_delete) = signal::<Option<BackgroundSound>>(None);
    // Sound currently playing; paused previews drop back to None
    let (playing, set_playing) = signal::<Option<u64>>(None);

    let file_input = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let _ = reload.get();
        let api = api.get_value();
        spawn_local(async move {
            match api::list_sounds(&api).await {
                Ok(loaded) => set_sounds.set(loaded),
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] sound load failed: {err}").into())
                }
            }
        });
    });

    on_cleanup(|| audio::stop());

    let toggle_preview = move |id: u64, url: String| {
        match audio::toggle(id, &url) {
            Some(PreviewState::Playing(id)) => set_playing.set(Some(id)),
            Some(PreviewState::Paused(_)) => set_playing.set(None),
            None => ctx.notify_error("Unable to play this sound."),
        }
    };

    let on_upload = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = file_input.get() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        set_show_upload.set(false);
        ctx.begin_loading("Uploading sound");
        let api = api.get_value();
        spawn_local(async move {
            match api::upload_sound(&api, &file).await {
                Ok(()) => {
                    ctx.notify_success("Background sound uploaded");
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
            ctx.end_loading();
        });
    };

    let on_confirm_delete = move |_| {
        let Some(sound) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        if audio::active_id() == Some(sound.id) {
            audio::stop();
            set_playing.set(None);
        }
        let api = api.get_value();
        spawn_local(async move {
            match api::delete_sound(&api, sound.id).await {
                Ok(()) => {
                    ctx.notify_success("Background sound deleted");
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
        });
    };

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|sound| format!("Delete the \"{}\" background sound?", sound.name))
    });

    view! {
        <div class="config-panel">
            <div class="panel-header">
                <span class="panel-badge">"Total Background"</span>
                <button class="primary-btn" on:click=move |_| set_show_upload.set(true)>
                    "+ Add Background"
                </button>
            </div>

            <div class="sound-grid">
                <For
                    each=move || sounds.get()
                    key=|sound| sound.id
                    children=move |sound| {
                        let id = sound.id;
                        let url = sound.url.clone();
                        let delete_target = sound.clone();
                        let is_playing = move || playing.get() == Some(id);
                        view! {
                            <div class="sound-tile">
                                <button
                                    class="chip-delete"
                                    on:click=move |_| set_pending_delete.set(Some(delete_target.clone()))
                                >
                                    "×"
                                </button>
                                <button
                                    class="play-btn"
                                    on:click=move |_| toggle_preview(id, url.clone())
                                >
                                    {move || if is_playing() { "⏸" } else { "▶" }}
                                </button>
                                <span class="sound-name">{sound.name.clone()}</span>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || show_upload.get()>
                <div class="modal-backdrop">
                    <form class="modal" on:submit=on_upload>
                        <div class="modal-header">
                            <h2 class="modal-title">"Add Background"</h2>
                            <button type="button" class="close-btn" on:click=move |_| set_show_upload.set(false)>
                                "×"
                            </button>
                        </div>
                        <label class="upload-zone">
                            <span>"Add new music"</span>
                            <input type="file" accept="audio/*" node_ref=file_input />
                        </label>
                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| set_show_upload.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">"Upload"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <ConfirmModal
                message=delete_message
                on_confirm=on_confirm_delete
                on_cancel=move |_| set_pending_delete.set(None)
            />
        </div>
    }
}
