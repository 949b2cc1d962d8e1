//! Content Page Component
//!
//! Shared editor for the privacy policy and terms documents. Stored HTML
//! renders as-is; legacy plain text goes through the markup heuristic
//! first. Saving posts the live rendered markup back verbatim.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api, Document};
use crate::context::AppContext;
use crate::markup::{is_plain_text, plain_text_to_html};

#[component]
pub fn ContentPage(doc: Document) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (content, set_content) = signal(String::new());
    let (last_updated, set_last_updated) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (editing, set_editing) = signal(false);
    let (retry, set_retry) = signal(0u32);

    let editor_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        let _ = retry.get();
        set_loading.set(true);
        set_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api::fetch_content(&api, doc).await {
                Ok(loaded) => {
                    let html = if is_plain_text(&loaded.content) {
                        web_sys::console::log_1(
                            &"[APP] plain text content detected, auto-formatting".into(),
                        );
                        plain_text_to_html(&loaded.content)
                    } else {
                        loaded.content
                    };
                    set_content.set(html);
                    set_last_updated.set(loaded.updated_at);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    // Re-run the heuristic over whatever is currently in the editor
    let on_reformat = move |_| {
        if let Some(div) = editor_ref.get() {
            let text = div.inner_text();
            div.set_inner_html(&plain_text_to_html(&text));
        }
    };

    let on_save = move |_| {
        let Some(div) = editor_ref.get() else {
            return;
        };
        let markup = div.inner_html();
        set_editing.set(false);

        ctx.begin_loading("Saving");
        let api = api.get_value();
        spawn_local(async move {
            match api::update_content(&api, doc, &markup).await {
                Ok(updated_at) => {
                    set_content.set(markup);
                    if updated_at.is_some() {
                        set_last_updated.set(updated_at);
                    }
                    ctx.notify_success(format!("{} saved", doc.title()));
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
            ctx.end_loading();
        });
    };

    view! {
        <div class="page content-page">
            <div class="card">
                <div class="card-header">
                    <div>
                        <h2 class="card-title">{doc.title()}</h2>
                        {move || last_updated.get().map(|date| view! {
                            <p class="content-updated">{format!("Last updated: {date}")}</p>
                        })}
                    </div>
                    <div class="row-actions">
                        <Show when=move || editing.get()>
                            <button class="secondary-btn" on:click=on_reformat>
                                "Re-format"
                            </button>
                        </Show>
                        {move || if editing.get() {
                            view! {
                                <button class="primary-btn" on:click=on_save>"Save"</button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <button class="primary-btn" on:click=move |_| set_editing.set(true)>
                                    "Edit"
                                </button>
                            }
                            .into_any()
                        }}
                    </div>
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
                } else {
                    view! {
                        <div
                            class="content-editor"
                            node_ref=editor_ref
                            contenteditable=move || if editing.get() { "true" } else { "false" }
                            inner_html=move || content.get()
                        ></div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
