//! Admin feedback triage: filter by status, update status/remark, delete

use feedhub_core::domain::{Feedback, Status, StatusFilter};
use feedhub_core::query::filter_by_status;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, StatusBadge, StatusFilterSelect, StatusModal};
use crate::context::use_app_context;
use crate::store::{store_remove_feedback, store_update_feedback, use_app_store, AppStateStoreFields};

#[component]
pub fn FeedbacksPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let filter = RwSignal::new(StatusFilter::All);
    let editing = RwSignal::new(None::<Feedback>);

    let visible = move || filter_by_status(&store.feedbacks().read(), filter.get());

    let save_status = move |(status, remark): (Status, String)| {
        let Some(target) = editing.get_untracked() else {
            return;
        };
        editing.set(None);
        spawn_local(async move {
            match ctx.service().set_feedback_status(&target.id, status, &remark).await {
                Ok(updated) => {
                    store_update_feedback(&store, updated);
                    ctx.success("Feedback updated");
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let delete = move |id: String| {
        spawn_local(async move {
            match ctx.service().delete_feedback(&id).await {
                Ok(()) => {
                    store_remove_feedback(&store, &id);
                    ctx.success("Feedback removed");
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    view! {
        <section class="panel feedbacks-panel">
            <div class="panel-toolbar">
                <StatusFilterSelect filter=filter />
                <span class="count">{move || format!("{} shown", visible().len())}</span>
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty">"No feedback matches this filter"</p> }
            >
                <div class="item-list">
                    <For
                        each=visible
                        key=|fb| (fb.id.clone(), fb.status, fb.admin_remark.clone())
                        children=move |fb| {
                            let edit_target = fb.clone();
                            let delete_id = fb.id.clone();
                            view! {
                                <article class="item-card">
                                    <header class="item-header">
                                        <h4>{fb.label()}</h4>
                                        <StatusBadge status=fb.status />
                                    </header>
                                    <p class="item-message">{fb.message.clone()}</p>
                                    <div class="item-meta">
                                        <span>{fb.author_name().to_string()}</span>
                                        <span>{fb.display_date()}</span>
                                        <span>{fb.category_label().to_string()}</span>
                                        <span>{fb.rating.map_or("-".to_string(), |r| format!("{r}★"))}</span>
                                    </div>
                                    {fb.admin_remark.clone().map(|remark| view! {
                                        <p class="item-remark">"Remark: " {remark}</p>
                                    })}
                                    <div class="item-actions">
                                        <Show when=move || ctx.capabilities().feedback_status>
                                            <button on:click={
                                                let target = edit_target.clone();
                                                move |_| editing.set(Some(target.clone()))
                                            }>
                                                "Update status"
                                            </button>
                                        </Show>
                                        <DeleteConfirmButton
                                            label=ctx.delete_label()
                                            on_confirm={
                                                let id = delete_id.clone();
                                                move |_| delete(id.clone())
                                            }
                                        />
                                    </div>
                                </article>
                            }
                        }
                    />
                </div>
            </Show>
            {move || editing.get().map(|fb| view! {
                <StatusModal
                    title=format!("Update \"{}\"", fb.label())
                    status=fb.status
                    remark=fb.admin_remark.clone().unwrap_or_default()
                    on_save=save_status
                    on_cancel=move |_| editing.set(None)
                />
            })}
        </section>
    }
}
