//! User Dashboard
//!
//! Submission forms and the signed-in user's own feedback and complaints.

mod my_complaints;
mod my_feedbacks;
mod overview;
mod profile;
mod submit_complaint;
mod submit_feedback;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{LoadBanner, NoticeBar, Sidebar};
use crate::context::use_app_context;
use crate::dashboard::{load_user_collections, LoadTicket};
use crate::dashboard::section::UserSection;
use crate::store::use_app_store;

#[component]
pub fn UserDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (section, set_section) = signal(UserSection::default());

    Effect::new(move |_| {
        let version = ctx.reload_trigger.get();
        let source = ctx.config.get().data_source;
        if let Some(session) = ctx.session.get() {
            log::debug!("[APP] user load for {}, trigger={}", session.name, version);
            let ticket = LoadTicket::new(version, source, Some(session.clone()));
            spawn_local(load_user_collections(ctx, store, session, ticket));
        }
    });

    view! {
        <div class="dashboard user-dashboard">
            <Sidebar
                title="FeedHub"
                sections=UserSection::nav()
                active=Signal::derive(move || section.get().id())
                on_select=move |id: &'static str| {
                    if let Some(next) = UserSection::from_id(id) {
                        set_section.set(next);
                    }
                }
            />
            <main class="dashboard-main">
                <header class="dashboard-header">
                    <h2>{move || section.get().label()}</h2>
                    <span class="header-user">
                        {move || ctx.session.get().map(|s| s.name).unwrap_or_default()}
                    </span>
                </header>
                <NoticeBar />
                <LoadBanner />
                {move || match section.get() {
                    UserSection::Overview => view! { <overview::UserOverviewPanel /> }.into_any(),
                    UserSection::SubmitFeedback => view! {
                        <submit_feedback::SubmitFeedbackPanel
                            on_submitted=move |_| set_section.set(UserSection::MyFeedbacks)
                        />
                    }.into_any(),
                    UserSection::SubmitComplaint => view! {
                        <submit_complaint::SubmitComplaintPanel
                            on_submitted=move |_| set_section.set(UserSection::MyComplaints)
                        />
                    }.into_any(),
                    UserSection::MyFeedbacks => view! { <my_feedbacks::MyFeedbacksPanel /> }.into_any(),
                    UserSection::MyComplaints => view! { <my_complaints::MyComplaintsPanel /> }.into_any(),
                    UserSection::Profile => view! { <profile::UserProfilePanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
