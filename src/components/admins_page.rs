//! Administrators Page Component
//!
//! Paginated administrator table with create/edit modals and delete
//! confirmation. Server-side permission refusals (super admins cannot be
//! edited or deleted) surface with the backend's own message.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_api, AdminForm};
use crate::components::{ConfirmModal, PageControls};
use crate::context::AppContext;
use crate::models::Administrator;

/// None = hidden, Some(None) = create, Some(Some(admin)) = edit
type FormTarget = Option<Option<Administrator>>;

#[component]
pub fn AdminsPage() -> impl IntoView {
    let api = use_api();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (admins, set_admins) = signal(Vec::<Administrator>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (reload, set_reload) = signal(0u32);

    let (form_target, set_form_target) = signal::<FormTarget>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<Administrator>>(None);

    Effect::new(move |_| {
        let page = current_page.get();
        let _ = reload.get();
        set_loading.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            match api::list_admins(&api, page).await {
                Ok(loaded) => {
                    set_admins.set(loaded.admins);
                    set_total_pages.set(loaded.total_pages.max(1));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let api_delete = use_api();
    let on_confirm_delete = move |_| {
        let Some(admin) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        let api = api_delete.clone();
        ctx.begin_loading("Deleting administrator");
        spawn_local(async move {
            match api::delete_admin(&api, admin.id).await {
                Ok(()) => {
                    ctx.notify_success("Administrator deleted");
                    set_reload.update(|r| *r += 1);
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
            ctx.end_loading();
        });
    };

    let delete_message = Signal::derive(move || {
        pending_delete.get().map(|admin| {
            format!(
                "Are you sure you want to delete {}'s account? This action cannot be undone.",
                admin.name
            )
        })
    });

    view! {
        <div class="page admins-page">
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"Administrators"</h2>
                    <button class="primary-btn" on:click=move |_| set_form_target.set(Some(None))>
                        "+ New Administrator"
                    </button>
                </div>

                {move || if loading.get() {
                    view! { <div class="spinner"></div> }.into_any()
                } else if let Some(message) = error.get() {
                    view! {
                        <div class="inline-error">
                            <p>{message}</p>
                            <button class="secondary-btn" on:click=move |_| set_reload.update(|r| *r += 1)>
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any()
                } else if admins.get().is_empty() {
                    view! { <p class="empty-state">"No administrators found."</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Phone"</th>
                                    <th>"Access Level"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || admins.get()
                                    key=|admin| admin.id
                                    children=move |admin| {
                                        let edit_target = admin.clone();
                                        let delete_target = admin.clone();
                                        view! {
                                            <tr>
                                                <td class="user-name">{admin.name.clone()}</td>
                                                <td>{admin.email.clone()}</td>
                                                <td>{admin.phone.clone()}</td>
                                                <td>{admin.access_level.clone()}</td>
                                                <td class="row-actions">
                                                    <button
                                                        class="icon-btn"
                                                        on:click=move |_| set_form_target.set(Some(Some(edit_target.clone())))
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="icon-btn danger"
                                                        on:click=move |_| set_pending_delete.set(Some(delete_target.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
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

            <AdminFormModal
                target=form_target
                set_target=set_form_target
                on_saved=Callback::new(move |_| set_reload.update(|r| *r += 1))
            />
            <ConfirmModal
                message=delete_message
                on_confirm=on_confirm_delete
                on_cancel=move |_| set_pending_delete.set(None)
            />
        </div>
    }
}

/// Create/edit form shared by both flows. Password is required when
/// creating and left blank to keep the current one when editing.
#[component]
fn AdminFormModal(
    target: ReadSignal<FormTarget>,
    set_target: WriteSignal<FormTarget>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (access_level, set_access_level) = signal("admin".to_string());

    // Refill fields whenever the modal target changes
    Effect::new(move |_| match target.get() {
        Some(Some(admin)) => {
            set_name.set(admin.name);
            set_email.set(admin.email);
            set_password.set(String::new());
            set_phone.set(admin.phone);
            set_access_level.set(admin.access_level);
        }
        Some(None) => {
            set_name.set(String::new());
            set_email.set(String::new());
            set_password.set(String::new());
            set_phone.set(String::new());
            set_access_level.set("admin".to_string());
        }
        None => {}
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(editing) = target.get_untracked() else {
            return;
        };
        let name_value = name.get().trim().to_string();
        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        let phone_value = phone.get().trim().to_string();
        let access_value = access_level.get();
        if name_value.is_empty() || email_value.is_empty() {
            return;
        }
        if editing.is_none() && password_value.is_empty() {
            return;
        }

        let api = api.get_value();
        ctx.begin_loading("Saving administrator");
        spawn_local(async move {
            let form = AdminForm {
                name: &name_value,
                email: &email_value,
                password: (!password_value.is_empty()).then_some(password_value.as_str()),
                phone: &phone_value,
                access_level: &access_value,
            };
            let result = match &editing {
                Some(admin) => api::edit_admin(&api, admin.id, &form).await,
                None => api::add_admin(&api, &form).await,
            };
            ctx.end_loading();
            match result {
                Ok(()) => {
                    ctx.notify_success(if editing.is_some() {
                        "Administrator updated"
                    } else {
                        "Administrator created"
                    });
                    set_target.set(None);
                    on_saved.run(());
                }
                Err(err) => ctx.notify_error(err.to_string()),
            }
        });
    };

    view! {
        {move || target.get().map(|editing| {
            let title = if editing.is_some() {
                "Edit Administrator Profile"
            } else {
                "New Administrator Profile"
            };
            view! {
                <div class="modal-backdrop">
                    <form class="modal" on:submit=on_submit>
                        <div class="modal-header">
                            <h2 class="modal-title">{title}</h2>
                            <button type="button" class="close-btn" on:click=move |_| set_target.set(None)>
                                "×"
                            </button>
                        </div>

                        <label class="field-label">"Name"</label>
                        <input
                            type="text"
                            class="field-input"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />

                        <label class="field-label">"Email"</label>
                        <input
                            type="email"
                            class="field-input"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />

                        <label class="field-label">"Password"</label>
                        <input
                            type="password"
                            class="field-input"
                            placeholder=move || if editing.is_some() { "Leave blank to keep current" } else { "" }
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />

                        <label class="field-label">"Phone"</label>
                        <input
                            type="tel"
                            class="field-input"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />

                        <label class="field-label">"Access Level"</label>
                        <select
                            class="field-input"
                            prop:value=move || access_level.get()
                            on:change=move |ev| set_access_level.set(event_target_value(&ev))
                        >
                            <option value="admin">"Admin"</option>
                            <option value="super_admin">"Super Admin"</option>
                        </select>

                        <div class="modal-actions">
                            <button type="button" class="secondary-btn" on:click=move |_| set_target.set(None)>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">"Save"</button>
                        </div>
                    </form>
                </div>
            }
        })}
    }
}
