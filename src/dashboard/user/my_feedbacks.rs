//! The signed-in user's feedback with admin status and remark

use feedhub_core::domain::StatusFilter;
use feedhub_core::query::filter_by_status;
use leptos::prelude::*;

use crate::components::{StatusBadge, StatusFilterSelect};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MyFeedbacksPanel() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(StatusFilter::All);

    let visible = move || filter_by_status(&store.feedbacks().read(), filter.get());

    view! {
        <section class="panel my-feedbacks-panel">
            <div class="panel-toolbar">
                <StatusFilterSelect filter=filter />
            </div>
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty">"You have not submitted any feedback yet"</p> }
            >
                <div class="item-list">
                    <For
                        each=visible
                        key=|fb| (fb.id.clone(), fb.status, fb.admin_remark.clone())
                        children=|fb| view! {
                            <article class="item-card">
                                <header class="item-header">
                                    <h4>{fb.label()}</h4>
                                    <StatusBadge status=fb.status />
                                </header>
                                <p class="item-message">{fb.message.clone()}</p>
                                <div class="item-meta">
                                    <span>{fb.display_date()}</span>
                                    <span>{fb.category_label().to_string()}</span>
                                    <span>{fb.rating.map_or("-".to_string(), |r| format!("{r}★"))}</span>
                                </div>
                                {fb.admin_remark.clone().map(|remark| view! {
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
