//! Status / remark editor shown over a list panel

use feedhub_core::domain::{Status, StatusFilter};
use leptos::prelude::*;

/// Modal with a status select and an optional admin remark
#[component]
pub fn StatusModal(
    #[prop(into)] title: String,
    status: Status,
    #[prop(into)] remark: String,
    #[prop(into)] on_save: Callback<(Status, String)>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (status, set_status) = signal(status);
    let (remark, set_remark) = signal(remark);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run((status.get(), remark.get()));
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="modal" on:submit=save on:click=|ev| ev.stop_propagation()>
                <h3>{title}</h3>
                <label>
                    "Status"
                    <select
                        prop:value=move || status.get().as_str()
                        on:change=move |ev| {
                            if let Some(parsed) = Status::parse(&event_target_value(&ev)) {
                                set_status.set(parsed);
                            }
                        }
                    >
                        {Status::ALL.iter().map(|s| view! {
                            <option value=s.as_str()>{s.as_str()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Admin remark"
                    <textarea
                        rows="3"
                        placeholder="Optional"
                        prop:value=move || remark.get()
                        on:input=move |ev| set_remark.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button type="submit" class="primary-btn">"Save"</button>
                </div>
            </form>
        </div>
    }
}

/// Single-field prompt (used for complaint assignment)
#[component]
pub fn PromptModal(
    #[prop(into)] title: String,
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (value, set_value) = signal(value);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(value.get());
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="modal" on:submit=save on:click=|ev| ev.stop_propagation()>
                <h3>{title}</h3>
                <label>
                    {label}
                    <input
                        type="text"
                        prop:value=move || value.get()
                        on:input=move |ev| set_value.set(event_target_value(&ev))
                    />
                </label>
                <div class="modal-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button type="submit" class="primary-btn">"Save"</button>
                </div>
            </form>
        </div>
    }
}

/// Status filter select for the list panels
#[component]
pub fn StatusFilterSelect(filter: RwSignal<StatusFilter>) -> impl IntoView {
    view! {
        <label class="status-filter">
            "Status"
            <select
                prop:value=move || filter.get().as_str()
                on:change=move |ev| filter.set(StatusFilter::parse(&event_target_value(&ev)))
            >
                {StatusFilter::OPTIONS.iter().map(|option| view! {
                    <option value=option.as_str()>{option.label()}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

/// Colored status pill
#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    let class = match status {
        Status::Pending => "badge pending",
        Status::InProcess => "badge in-process",
        Status::Resolved => "badge resolved",
        Status::Unresolved => "badge unresolved",
    };
    view! { <span class=class>{status.as_str()}</span> }
}
