//! Feedhub Frontend App
//!
//! Restores the session and config, provides context and the store, and
//! routes to the dashboard for the session's role.

use feedhub_core::config::Config;
use feedhub_core::domain::Role;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::SessionGate;
use crate::context::AppContext;
use crate::dashboard::admin::AdminDashboard;
use crate::dashboard::user::UserDashboard;
use crate::local_storage::browser_store;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let local = browser_store();
    let session = local.session().current();
    let config = Config::load(&local).unwrap_or_else(|e| {
        log::warn!("[APP] invalid configuration, using defaults: {}", e);
        Config::default()
    });
    log::info!(
        "[APP] starting, source={}, session={:?}",
        config.data_source,
        session.as_ref().map(|s| s.name.as_str())
    );

    let ctx = AppContext::new(session, config);
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    let role = move || ctx.session.get().map(|s| s.role);

    view! {
        {move || match role() {
            None => view! { <SessionGate /> }.into_any(),
            Some(Role::Admin) => view! { <AdminDashboard /> }.into_any(),
            Some(Role::User) => view! { <UserDashboard /> }.into_any(),
        }}
    }
}
