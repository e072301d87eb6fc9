//! Transient success/error message and the collection load banner

use leptos::prelude::*;

use crate::context::{use_app_context, NoticeKind};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Error => "notice error",
            };
            view! {
                <div class=class role="status">
                    <span>{notice.text}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}

/// Loading indicator, or the last load error with a Retry button
#[component]
pub fn LoadBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <Show when=move || store.loading().get()>
            <div class="loading">"Loading…"</div>
        </Show>
        {move || store.load_error().get().map(|message| view! {
            <div class="load-error">
                <span>{message}</span>
                <button on:click=move |_| ctx.reload()>"Retry"</button>
            </div>
        })}
    }
}
