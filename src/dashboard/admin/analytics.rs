//! Admin analytics: status and priority histograms, top categories

use feedhub_core::analytics::{priority_histogram, status_histogram, top_categories, TOP_CATEGORY_LIMIT};
use leptos::prelude::*;

use crate::components::BarChart;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AnalyticsPanel() -> impl IntoView {
    let store = use_app_store();

    let feedback_status = Signal::derive(move || {
        status_histogram(&store.feedbacks().read())
            .into_iter()
            .map(|(status, count)| (status.to_string(), count))
            .collect::<Vec<_>>()
    });

    let complaint_status = Signal::derive(move || {
        status_histogram(&store.complaints().read())
            .into_iter()
            .map(|(status, count)| (status.to_string(), count))
            .collect::<Vec<_>>()
    });

    let priorities = Signal::derive(move || {
        priority_histogram(&store.complaints().read())
            .into_iter()
            .map(|(priority, count)| (priority.to_string(), count))
            .collect::<Vec<_>>()
    });

    let categories =
        Signal::derive(move || top_categories(&store.feedbacks().read(), TOP_CATEGORY_LIMIT));

    view! {
        <section class="panel analytics-panel">
            <div class="chart-grid">
                <BarChart title="Feedback by status" rows=feedback_status />
                <BarChart title="Complaints by status" rows=complaint_status />
                <BarChart title="Complaints by priority" rows=priorities />
                <BarChart title="Top feedback categories" rows=categories />
            </div>
        </section>
    }
}
