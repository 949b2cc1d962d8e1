//! Mood Questions Modal
//!
//! Editor for a mood's question/option tree. Edits mutate a local working
//! copy; Save runs the copy through the reconciler and issues the resulting
//! calls concurrently. Removing a server-persisted question or option is an
//! eager DELETE behind a confirmation; removing a draft is local only.

use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api};
use crate::components::ConfirmModal;
use crate::context::AppContext;
use crate::models::{AnswerOption, EntityId, Mood, Question};
use crate::reconcile::plan_mood_save;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PendingRemoval {
    Question(EntityId),
    Option(EntityId, EntityId),
}

#[component]
pub fn MoodQuestionsModal(
    mood: ReadSignal<Option<Mood>>,
    set_mood: WriteSignal<Option<Mood>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let questions = RwSignal::new(Vec::<Question>::new());
    let (pending_removal, set_pending_removal) = signal::<Option<PendingRemoval>>(None);

    // Fresh working copy whenever a mood is opened
    Effect::new(move |_| {
        if let Some(m) = mood.get() {
            questions.set(m.questions.clone());
        }
    });

    let update_question_text = move |id: EntityId, text: String| {
        questions.update(|qs| {
            if let Some(q) = qs.iter_mut().find(|q| q.id == id) {
                q.text = text;
            }
        });
    };

    let update_option_text = move |question_id: EntityId, option_id: EntityId, text: String| {
        questions.update(|qs| {
            if let Some(q) = qs.iter_mut().find(|q| q.id == question_id) {
                if let Some(o) = q.options.iter_mut().find(|o| o.id == option_id) {
                    o.text = text;
                }
            }
        });
    };

    let add_question = move |_| questions.update(|qs| qs.push(Question::draft()));

    let add_option = move |question_id: EntityId| {
        questions.update(|qs| {
            if let Some(q) = qs.iter_mut().find(|q| q.id == question_id) {
                q.options.push(AnswerOption::draft());
            }
        });
    };

    let remove_locally = move |removal: PendingRemoval| {
        questions.update(|qs| match removal {
            PendingRemoval::Question(id) => qs.retain(|q| q.id != id),
            PendingRemoval::Option(question_id, option_id) => {
                if let Some(q) = qs.iter_mut().find(|q| q.id == question_id) {
                    if q.options.len() > 1 {
                        q.options.retain(|o| o.id != option_id);
                    }
                }
            }
        });
    };

    let on_confirm_removal = move |_| {
        let Some(removal) = pending_removal.get_untracked() else {
            return;
        };
        set_pending_removal.set(None);

        let server_id = match removal {
            PendingRemoval::Question(id) => id.server_id(),
            PendingRemoval::Option(_, id) => id.server_id(),
        };
        match server_id {
            // Draft entities only exist locally
            None => remove_locally(removal),
            Some(id) => {
                let api = api.get_value();
                spawn_local(async move {
                    let result = match removal {
                        PendingRemoval::Question(_) => api::delete_question(&api, id).await,
                        PendingRemoval::Option(_, _) => api::delete_option(&api, id).await,
                    };
                    match result {
                        Ok(()) => remove_locally(removal),
                        Err(err) => ctx.notify_error(err.to_string()),
                    }
                });
            }
        }
    };

    let on_save = move |_| {
        let Some(current) = mood.get_untracked() else {
            return;
        };
        let edited = Mood {
            questions: questions.get_untracked(),
            ..current
        };
        let calls = plan_mood_save(&edited);
        if calls.is_empty() {
            set_mood.set(None);
            return;
        }

        web_sys::console::log_1(
            &format!("[APP] saving mood {} with {} calls", edited.id, calls.len()).into(),
        );
        ctx.begin_loading("Saving questions");
        let api = api.get_value();
        spawn_local(async move {
            let results = join_all(calls.into_iter().map(|call| {
                let api = api.clone();
                async move { api::run_save_call(&api, call).await }
            }))
            .await;
            ctx.end_loading();

            if results.iter().all(|r| r.is_ok()) {
                ctx.notify_success("Questions saved");
                on_saved.run(());
                set_mood.set(None);
            } else {
                // Applied siblings stay applied; the refetch after the next
                // successful save picks them up
                ctx.notify_error("Some changes could not be saved. Please try again.");
            }
        });
    };

    let removal_message = Signal::derive(move || {
        pending_removal.get().map(|removal| match removal {
            PendingRemoval::Question(_) => {
                "Remove this question and all of its options?".to_string()
            }
            PendingRemoval::Option(_, _) => "Remove this option?".to_string(),
        })
    });

    view! {
        {move || mood.get().map(|m| view! {
            <div class="modal-backdrop">
                <div class="modal questions-modal">
                    <div class="modal-header">
                        <h2 class="modal-title">{format!("Manage Questions - {}", m.name)}</h2>
                        <button class="close-btn" on:click=move |_| set_mood.set(None)>"×"</button>
                    </div>

                    <div class="questions-body">
                        <Show when=move || questions.with(Vec::is_empty)>
                            <p class="empty-state">
                                "No questions yet. Click \"Add Question\" to get started."
                            </p>
                        </Show>

                        <For
                            each=move || questions.get()
                            key=|q| q.id
                            children=move |q| {
                                let question_id = q.id;
                                let number = move || {
                                    questions
                                        .with(|qs| qs.iter().position(|q| q.id == question_id))
                                        .map(|i| i + 1)
                                        .unwrap_or_default()
                                };
                                let text = move || {
                                    questions.with(|qs| {
                                        qs.iter()
                                            .find(|q| q.id == question_id)
                                            .map(|q| q.text.clone())
                                            .unwrap_or_default()
                                    })
                                };
                                let options = move || {
                                    questions.with(|qs| {
                                        qs.iter()
                                            .find(|q| q.id == question_id)
                                            .map(|q| q.options.clone())
                                            .unwrap_or_default()
                                    })
                                };
                                let removable = move || options().len() > 1;

                                view! {
                                    <div class="question-block">
                                        <div class="question-row">
                                            <label class="field-label">
                                                {move || format!("Question {}", number())}
                                            </label>
                                            <input
                                                type="text"
                                                class="field-input"
                                                placeholder="Enter your question"
                                                prop:value=text
                                                on:input=move |ev| update_question_text(
                                                    question_id,
                                                    event_target_value(&ev),
                                                )
                                            />
                                            <button
                                                class="icon-btn danger"
                                                on:click=move |_| set_pending_removal
                                                    .set(Some(PendingRemoval::Question(question_id)))
                                            >
                                                "Remove"
                                            </button>
                                        </div>

                                        <label class="field-label">"Options"</label>
                                        <For
                                            each=options
                                            key=|o| o.id
                                            children=move |o| {
                                                let option_id = o.id;
                                                let option_text = move || {
                                                    questions.with(|qs| {
                                                        qs.iter()
                                                            .find(|q| q.id == question_id)
                                                            .and_then(|q| {
                                                                q.options
                                                                    .iter()
                                                                    .find(|o| o.id == option_id)
                                                            })
                                                            .map(|o| o.text.clone())
                                                            .unwrap_or_default()
                                                    })
                                                };
                                                view! {
                                                    <div class="option-row">
                                                        <input
                                                            type="text"
                                                            class="field-input"
                                                            placeholder="Option text"
                                                            prop:value=option_text
                                                            on:input=move |ev| update_option_text(
                                                                question_id,
                                                                option_id,
                                                                event_target_value(&ev),
                                                            )
                                                        />
                                                        <Show when=removable>
                                                            <button
                                                                class="icon-btn danger"
                                                                on:click=move |_| set_pending_removal
                                                                    .set(Some(PendingRemoval::Option(
                                                                        question_id,
                                                                        option_id,
                                                                    )))
                                                            >
                                                                "×"
                                                            </button>
                                                        </Show>
                                                    </div>
                                                }
                                            }
                                        />
                                        <button
                                            class="link-btn"
                                            on:click=move |_| add_option(question_id)
                                        >
                                            "+ Add option"
                                        </button>
                                    </div>
                                }
                            }
                        />

                        <button class="primary-btn wide" on:click=add_question>
                            "+ Add Question"
                        </button>
                    </div>

                    <div class="modal-actions">
                        <button class="secondary-btn" on:click=move |_| set_mood.set(None)>
                            "Cancel"
                        </button>
                        <button class="primary-btn" on:click=on_save>
                            "Save Changes"
                        </button>
                    </div>
                </div>
            </div>
        })}

        <ConfirmModal
            message=removal_message
            on_confirm=on_confirm_removal
            on_cancel=move |_| set_pending_removal.set(None)
        />
    }
}
