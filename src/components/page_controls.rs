//! Page Controls Component
//!
//! Prev/next buttons around the windowed page-number strip.

use leptos::prelude::*;

use crate::pagination::{page_numbers, PageItem};

#[component]
pub fn PageControls(
    current_page: ReadSignal<u32>,
    set_current_page: WriteSignal<u32>,
    total_pages: ReadSignal<u32>,
) -> impl IntoView {
    view! {
        <div class="page-controls">
            <button
                class="page-btn"
                disabled=move || current_page.get() <= 1
                on:click=move |_| set_current_page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "< Prev"
            </button>
            <For
                each=move || {
                    page_numbers(total_pages.get(), current_page.get())
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<_>>()
                }
                key=|(slot, item)| (*slot, *item)
                children=move |(_, item)| match item {
                    PageItem::Page(page) => {
                        let active = move || current_page.get() == page;
                        view! {
                            <button
                                class=move || if active() { "page-btn active" } else { "page-btn" }
                                on:click=move |_| set_current_page.set(page)
                            >
                                {page}
                            </button>
                        }
                        .into_any()
                    }
                    PageItem::Ellipsis => view! {
                        <span class="page-ellipsis">"..."</span>
                    }
                    .into_any(),
                }
            />
            <button
                class="page-btn"
                disabled=move || current_page.get() >= total_pages.get()
                on:click=move |_| {
                    let last = total_pages.get();
                    set_current_page.update(|p| *p = (*p + 1).min(last));
                }
            >
                "Next >"
            </button>
        </div>
    }
}
