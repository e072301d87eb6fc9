//! Feedback submission form

use chrono::Utc;
use feedhub_core::domain::FeedbackDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SubmitFeedbackPanel(#[prop(into)] on_submitted: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (rating, set_rating) = signal::<Option<u8>>(None);
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = ctx.session.get_untracked() else {
            return;
        };
        let draft = FeedbackDraft {
            title: title.get_untracked(),
            message: message.get_untracked(),
            category: category.get_untracked(),
            rating: rating.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            set_form_error.set(Some(e.to_string()));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let result = ctx
                .service()
                .submit_feedback(&session.author(), &draft, Utc::now())
                .await;
            set_submitting.set(false);
            match result {
                Ok(created) => {
                    store.feedbacks().write().insert(0, created);
                    set_title.set(String::new());
                    set_message.set(String::new());
                    set_category.set(String::new());
                    set_rating.set(None);
                    set_form_error.set(None);
                    ctx.success("Feedback submitted");
                    on_submitted.run(());
                }
                Err(e) => set_form_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class="panel form-panel">
            <form class="card submit-form" on:submit=submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Message"
                    <textarea
                        rows="5"
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        <For
                            each=move || store.categories().get()
                            key=|cat| cat.id.clone()
                            children=|cat| view! { <option value=cat.name.clone()>{cat.name.clone()}</option> }
                        />
                    </select>
                </label>
                <label>
                    "Rating"
                    <select
                        prop:value=move || rating.get().map(|r| r.to_string()).unwrap_or_default()
                        on:change=move |ev| set_rating.set(event_target_value(&ev).parse().ok())
                    >
                        <option value="">"No rating"</option>
                        {(1..=5u8).map(|r| view! {
                            <option value=r.to_string()>{"★".repeat(r as usize)}</option>
                        }).collect_view()}
                    </select>
                </label>
                {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting…" } else { "Submit feedback" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
