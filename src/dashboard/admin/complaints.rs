//! Admin complaint management: filter, status/remark, assign, delete

use feedhub_core::domain::{Complaint, Status, StatusFilter};
use feedhub_core::query::filter_by_status;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, PromptModal, StatusBadge, StatusFilterSelect, StatusModal};
use crate::context::use_app_context;
use crate::store::{store_remove_complaint, store_update_complaint, use_app_store, AppStateStoreFields};

#[component]
pub fn ComplaintsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let filter = RwSignal::new(StatusFilter::All);
    let editing = RwSignal::new(None::<Complaint>);
    let assigning = RwSignal::new(None::<Complaint>);

    let visible = move || filter_by_status(&store.complaints().read(), filter.get());

    let save_status = move |(status, remark): (Status, String)| {
        let Some(target) = editing.get_untracked() else {
            return;
        };
        editing.set(None);
        spawn_local(async move {
            match ctx.service().set_complaint_status(&target.id, status, &remark).await {
                Ok(updated) => {
                    store_update_complaint(&store, updated);
                    ctx.success("Complaint updated");
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let save_assignee = move |assignee: String| {
        let Some(target) = assigning.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match ctx.service().assign_complaint(&target.id, &assignee).await {
                Ok(updated) => {
                    assigning.set(None);
                    ctx.success(format!(
                        "Assigned to {}",
                        updated.assigned_to.as_deref().unwrap_or_default()
                    ));
                    store_update_complaint(&store, updated);
                }
                // Keep the prompt open so the name can be fixed
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    let delete = move |id: String| {
        spawn_local(async move {
            match ctx.service().delete_complaint(&id).await {
                Ok(()) => {
                    store_remove_complaint(&store, &id);
                    ctx.success("Complaint removed");
                }
                Err(e) => ctx.error(e.to_string()),
            }
        });
    };

    view! {
        <section class="panel complaints-panel">
            <div class="panel-toolbar">
                <StatusFilterSelect filter=filter />
                <span class="count">{move || format!("{} shown", visible().len())}</span>
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty">"No complaints match this filter"</p> }
            >
                <div class="item-list">
                    <For
                        each=visible
                        key=|c| (c.id.clone(), c.status, c.admin_remark.clone(), c.assigned_to.clone())
                        children=move |c| {
                            let edit_target = c.clone();
                            let assign_target = c.clone();
                            let delete_id = c.id.clone();
                            let priority_class = format!("priority {}", c.priority.as_str().to_lowercase());
                            view! {
                                <article class="item-card">
                                    <header class="item-header">
                                        <h4>{c.label()}</h4>
                                        <span class=priority_class>{c.priority.as_str()}</span>
                                        <StatusBadge status=c.status />
                                    </header>
                                    <p class="item-message">{c.message.clone()}</p>
                                    <div class="item-meta">
                                        <span>{c.author_name().to_string()}</span>
                                        <span>{c.display_date()}</span>
                                        <span>{c.category_label().to_string()}</span>
                                        <span>
                                            "Assigned: "
                                            {c.assigned_to.clone().unwrap_or_else(|| "-".to_string())}
                                        </span>
                                    </div>
                                    {c.admin_remark.clone().map(|remark| view! {
                                        <p class="item-remark">"Remark: " {remark}</p>
                                    })}
                                    <div class="item-actions">
                                        <button on:click={
                                            let target = edit_target.clone();
                                            move |_| editing.set(Some(target.clone()))
                                        }>
                                            "Update status"
                                        </button>
                                        <Show when=move || ctx.capabilities().assign_complaints>
                                            <button on:click={
                                                let target = assign_target.clone();
                                                move |_| assigning.set(Some(target.clone()))
                                            }>
                                                "Assign"
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
            {move || editing.get().map(|c| view! {
                <StatusModal
                    title=format!("Update \"{}\"", c.label())
                    status=c.status
                    remark=c.admin_remark.clone().unwrap_or_default()
                    on_save=save_status
                    on_cancel=move |_| editing.set(None)
                />
            })}
            {move || assigning.get().map(|c| view! {
                <PromptModal
                    title=format!("Assign \"{}\"", c.label())
                    label="Assignee"
                    value=c.assigned_to.clone().unwrap_or_default()
                    on_save=save_assignee
                    on_cancel=move |_| assigning.set(None)
                />
            })}
        </section>
    }
}
