//! The signed-in user's complaints

use feedhub_core::domain::StatusFilter;
use feedhub_core::query::filter_by_status;
use leptos::prelude::*;

use crate::components::{StatusBadge, StatusFilterSelect};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MyComplaintsPanel() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(StatusFilter::All);

    let visible = move || filter_by_status(&store.complaints().read(), filter.get());

    view! {
        <section class="panel my-complaints-panel">
            <div class="panel-toolbar">
                <StatusFilterSelect filter=filter />
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty">"You have not filed any complaints"</p> }
            >
                <div class="item-list">
                    <For
                        each=visible
                        key=|c| (c.id.clone(), c.status, c.admin_remark.clone(), c.assigned_to.clone())
                        children=|c| view! {
                            <article class="item-card">
                                <header class="item-header">
                                    <h4>{c.label()}</h4>
                                    <StatusBadge status=c.status />
                                </header>
                                <p class="item-message">{c.message.clone()}</p>
                                <div class="item-meta">
                                    <span>{c.display_date()}</span>
                                    <span>{c.category_label().to_string()}</span>
                                    <span class="priority">{c.priority.to_string()}</span>
                                    {c.assigned_to.clone().map(|who| view! {
                                        <span>"Assigned to " {who}</span>
                                    })}
                                </div>
                                {c.admin_remark.clone().map(|remark| view! {
                                    <p class="item-remark">"Admin remark: " {remark}</p>
                                })}
                            </article>
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
