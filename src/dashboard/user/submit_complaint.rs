//! Complaint submission form

use chrono::Utc;
use feedhub_core::domain::{ComplaintDraft, Priority};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SubmitComplaintPanel(#[prop(into)] on_submitted: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (form_error, set_form_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(session) = ctx.session.get_untracked() else {
            return;
        };
        let draft = ComplaintDraft {
            subject: subject.get_untracked(),
            message: message.get_untracked(),
            category: category.get_untracked(),
            priority: priority.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            set_form_error.set(Some(e.to_string()));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let result = ctx
                .service()
                .submit_complaint(&session.author(), &draft, Utc::now())
                .await;
            set_submitting.set(false);
            match result {
                Ok(created) => {
                    store.complaints().write().insert(0, created);
                    set_subject.set(String::new());
                    set_message.set(String::new());
                    set_category.set(String::new());
                    set_priority.set(Priority::default());
                    set_form_error.set(None);
                    ctx.success("Complaint submitted");
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
                    "Subject"
                    <input
                        type="text"
                        prop:value=move || subject.get()
                        on:input=move |ev| set_subject.set(event_target_value(&ev))
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
                <div class="form-row">
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
                        "Priority"
                        <select
                            prop:value=move || priority.get().as_str()
                            on:change=move |ev| {
                                if let Some(parsed) = Priority::parse(&event_target_value(&ev)) {
                                    set_priority.set(parsed);
                                }
                            }
                        >
                            {Priority::ALL.iter().map(|p| view! {
                                <option value=p.as_str()>{p.as_str()}</option>
                            }).collect_view()}
                        </select>
                    </label>
                </div>
                {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <div class="form-actions">
                    <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting…" } else { "Submit complaint" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
