//! Session Gate
//!
//! Shown while nobody is signed in: pick a display name and continue as
//! a user or as an administrator.

use feedhub_core::domain::Role;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SessionGate() -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let continue_as = move |role: Role| {
        match ctx.sign_in(&name.get(), role) {
            Ok(()) => set_error.set(None),
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="session-gate">
            <form class="card gate-card" on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                continue_as(Role::User);
            }>
                <h1>"FeedHub"</h1>
                <p class="gate-subtitle">"Share feedback, raise complaints, track their resolution."</p>
                <label>
                    "Your name"
                    <input
                        type="text"
                        placeholder="e.g. Asha"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <div class="gate-actions">
                    <button type="submit" class="primary-btn">"Continue as user"</button>
                    <button type="button" on:click=move |_| continue_as(Role::Admin)>"Continue as admin"</button>
                </div>
                <p class="gate-source">
                    {move || format!("Data source: {}", ctx.config.get().data_source)}
                </p>
            </form>
        </div>
    }
}
