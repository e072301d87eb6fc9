//! Admin Dashboard
//!
//! Sidebar with eight sections over the shared collections.

mod analytics;
mod categories;
mod complaints;
mod feedbacks;
mod overview;
mod profile;
mod todos;
mod users;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadBanner, NoticeBar, Sidebar};
use crate::context::use_app_context;
use crate::dashboard::{load_admin_collections, LoadTicket};
use crate::dashboard::section::AdminSection;
use crate::store::use_app_store;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (section, set_section) = signal(AdminSection::default());

    // Load on mount and on every invalidation or source switch
    Effect::new(move |_| {
        let version = ctx.reload_trigger.get();
        let source = ctx.config.get().data_source;
        log::debug!("[APP] admin load, source={}, trigger={}", source, version);
        let ticket = LoadTicket::new(version, source, ctx.session.get_untracked());
        spawn_local(load_admin_collections(ctx, store, ticket));
    });

    view! {
        <div class="dashboard admin-dashboard">
            <Sidebar
                title="FeedHub Admin"
                sections=AdminSection::nav()
                active=Signal::derive(move || section.get().id())
                on_select=move |id: &'static str| {
                    if let Some(next) = AdminSection::from_id(id) {
                        set_section.set(next);
                    }
                }
                collapsible=true
                confirm_logout=true
            />
            <main class="dashboard-main">
                <header class="dashboard-header">
                    <h2>{move || section.get().label()}</h2>
                    <span class="header-user">
                        {move || ctx.session.get().map(|s| s.name).unwrap_or_default()}
                    </span>
                    <span class="source-badge">{move || ctx.config.get().data_source.to_string()}</span>
                </header>
                <NoticeBar />
                <LoadBanner />
                {move || match section.get() {
                    AdminSection::Overview => view! { <overview::AdminOverview /> }.into_any(),
                    AdminSection::Users => view! { <users::UsersPanel /> }.into_any(),
                    AdminSection::Feedbacks => view! { <feedbacks::FeedbacksPanel /> }.into_any(),
                    AdminSection::Complaints => view! { <complaints::ComplaintsPanel /> }.into_any(),
                    AdminSection::Categories => view! { <categories::CategoriesPanel /> }.into_any(),
                    AdminSection::Analytics => view! { <analytics::AnalyticsPanel /> }.into_any(),
                    AdminSection::Todos => view! { <todos::TodosPanel /> }.into_any(),
                    AdminSection::Profile => view! { <profile::AdminProfilePanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
