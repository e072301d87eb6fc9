//! Admin overview: totals, average rating, latest submissions

use feedhub_core::analytics::{recent, Overview};
use leptos::prelude::*;

use crate::components::{RecentEntry, RecentList, StatCard};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AdminOverview() -> impl IntoView {
    let store = use_app_store();

    let overview = Memo::new(move |_| {
        Overview::compute(
            &store.users().read(),
            &store.feedbacks().read(),
            &store.complaints().read(),
            &store.categories().read(),
        )
    });

    let latest_feedback = Signal::derive(move || {
        recent(&store.feedbacks().read())
            .into_iter()
            .map(|fb| RecentEntry {
                meta: format!(
                    "{} • {}★",
                    fb.author_name(),
                    fb.rating.map_or("-".to_string(), |r| r.to_string())
                ),
                label: fb.label(),
                id: fb.id,
            })
            .collect::<Vec<_>>()
    });

    let latest_complaints = Signal::derive(move || {
        recent(&store.complaints().read())
            .into_iter()
            .map(|c| RecentEntry {
                meta: format!("{} • {}", c.author_name(), c.status),
                label: c.label(),
                id: c.id,
            })
            .collect::<Vec<_>>()
    });

    let stat = move |f: fn(&Overview) -> String| Signal::derive(move || overview.with(f));

    view! {
        <section class="panel overview">
            <div class="stat-grid">
                <StatCard label="Total Users" value=stat(|o| o.total_users.to_string()) />
                <StatCard label="Total Feedback" value=stat(|o| o.total_feedback.to_string()) />
                <StatCard label="Total Complaints" value=stat(|o| o.total_complaints.to_string()) />
                <StatCard label="Categories" value=stat(|o| o.total_categories.to_string()) />
                <StatCard label="Pending Complaints" value=stat(|o| o.pending_complaints.to_string()) />
                <StatCard label="Resolved Feedback" value=stat(|o| o.resolved_feedback.to_string()) />
                <StatCard label="Average Rating" value=stat(Overview::average_rating_label) />
            </div>
            <div class="recent-grid">
                <RecentList title="Latest Feedbacks" items=latest_feedback />
                <RecentList title="Latest Complaints" items=latest_complaints />
            </div>
        </section>
    }
}
