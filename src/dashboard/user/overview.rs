//! User overview: own submission counts and latest entries

use feedhub_core::analytics::{recent, UserOverview};
use leptos::prelude::*;

use crate::components::{RecentEntry, RecentList, StatCard};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn UserOverviewPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let overview = Memo::new(move |_| {
        let Some(session) = ctx.session.get() else {
            return UserOverview::default();
        };
        UserOverview::compute(&store.feedbacks().read(), &store.complaints().read(), &session.author())
    });

    let latest_feedback = Signal::derive(move || {
        recent(&store.feedbacks().read())
            .into_iter()
            .map(|fb| RecentEntry {
                meta: format!("{} • {}", fb.display_date(), fb.status),
                label: fb.label(),
                id: fb.id,
            })
            .collect::<Vec<_>>()
    });

    let latest_complaints = Signal::derive(move || {
        recent(&store.complaints().read())
            .into_iter()
            .map(|c| RecentEntry {
                meta: format!("{} • {}", c.priority, c.status),
                label: c.label(),
                id: c.id,
            })
            .collect::<Vec<_>>()
    });

    view! {
        <section class="panel overview">
            <div class="stat-grid">
                <StatCard
                    label="My Feedback"
                    value=Signal::derive(move || overview.get().feedback.to_string())
                />
                <StatCard
                    label="My Complaints"
                    value=Signal::derive(move || overview.get().complaints.to_string())
                />
                <StatCard
                    label="Resolved Complaints"
                    value=Signal::derive(move || overview.get().resolved_complaints.to_string())
                />
            </div>
            <div class="recent-grid">
                <RecentList title="Recent Feedback" items=latest_feedback />
                <RecentList title="Recent Complaints" items=latest_complaints />
            </div>
        </section>
    }
}
