//! Role Dashboards
//!
//! Loads the collections into the store and renders the active section.
//!
//! Loads run detached and may finish out of order. Each carries a
//! [`LoadTicket`]; a load whose ticket no longer matches the context when
//! it finishes is dropped without touching the store.

pub mod admin;
pub mod section;
pub mod user;

use feedhub_core::domain::{Category, Session};
use feedhub_core::{DataSource, Error, Result};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{AppStateStoreFields, AppStore};

/// What a load was started for: reload generation, data source and session
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    pub version: u32,
    pub source: DataSource,
    pub session: Option<Session>,
}

impl LoadTicket {
    pub fn new(version: u32, source: DataSource, session: Option<Session>) -> Self {
        Self {
            version,
            source,
            session,
        }
    }

    /// Ticket for the context as it is right now, without tracking
    pub fn latest(ctx: &AppContext) -> Self {
        Self::new(
            ctx.reload_trigger.get_untracked(),
            ctx.config.with_untracked(|config| config.data_source),
            ctx.session.get_untracked(),
        )
    }

    /// Whether results of this load may still be shown
    pub fn is_current(&self, latest: &LoadTicket) -> bool {
        self == latest
    }
}

/// `false` (and logged) once a newer load or a context change superseded `ticket`
fn still_current(ctx: &AppContext, ticket: &LoadTicket) -> bool {
    let current = ticket.is_current(&LoadTicket::latest(ctx));
    if !current {
        log::debug!(
            "[APP] dropping stale load (trigger={}, source={})",
            ticket.version,
            ticket.source
        );
    }
    current
}

/// Record the outcome of a collection load
fn finish_load(store: AppStore, version: u32, result: Result<()>) {
    match result {
        Ok(()) => store.load_error().set(None),
        Err(e) => {
            log::warn!("[APP] load failed: {}", e);
            store.load_error().set(Some(e.to_string()));
        }
    }
    store.loaded_version().set(version);
    store.loading().set(false);
}

/// Load everything the admin dashboard shows
pub async fn load_admin_collections(ctx: AppContext, store: AppStore, ticket: LoadTicket) {
    store.loading().set(true);
    let service = ctx.service();
    let local = service.store();

    match local.categories().seed_defaults() {
        Ok(true) => log::info!("[APP] seeded default categories"),
        Ok(false) => {}
        Err(e) => ctx.error(format!("Could not seed categories: {e}")),
    }
    store.categories().set(local.categories().list());
    store.todos().set(local.todos().list());

    let result = async {
        let users = service.list_users().await?;
        let feedbacks = service.list_feedback().await?;
        let complaints = service.list_complaints().await?;
        Ok::<_, Error>((users, feedbacks, complaints))
    }
    .await;
    if !still_current(&ctx, &ticket) {
        return;
    }
    let result = result.map(|(users, feedbacks, complaints)| {
        log::info!(
            "[APP] loaded {} users, {} feedback, {} complaints",
            users.len(),
            feedbacks.len(),
            complaints.len()
        );
        store.users().set(users);
        store.feedbacks().set(feedbacks);
        store.complaints().set(complaints);
    });
    finish_load(store, ticket.version, result);
}

/// Load the signed-in user's submissions and the category list
pub async fn load_user_collections(ctx: AppContext, store: AppStore, session: Session, ticket: LoadTicket) {
    store.loading().set(true);
    let service = ctx.service();

    let categories = service.store().categories().list();
    store.categories().set(if categories.is_empty() {
        Category::defaults()
    } else {
        categories
    });

    let author = session.author();
    let result = async {
        let feedbacks = service.feedback_by(&author).await?;
        let complaints = service.complaints_by(&author).await?;
        Ok::<_, Error>((feedbacks, complaints))
    }
    .await;
    if !still_current(&ctx, &ticket) {
        return;
    }
    let result = result.map(|(feedbacks, complaints)| {
        log::info!(
            "[APP] loaded {} feedback, {} complaints for {}",
            feedbacks.len(),
            complaints.len(),
            author.name
        );
        store.feedbacks().set(feedbacks);
        store.complaints().set(complaints);
    });
    finish_load(store, ticket.version, result);
}

#[cfg(test)]
mod tests {
    use feedhub_core::domain::Role;

    use super::*;

    fn session(name: &str) -> Option<Session> {
        Some(Session::new(Some(format!("u_{name}")), name, Role::User))
    }

    #[test]
    fn test_ticket_matches_unchanged_context() {
        let ticket = LoadTicket::new(3, DataSource::Local, session("Asha"));
        assert!(ticket.is_current(&LoadTicket::new(3, DataSource::Local, session("Asha"))));
    }

    #[test]
    fn test_older_load_is_superseded() {
        let first = LoadTicket::new(1, DataSource::Local, session("Asha"));
        let latest = LoadTicket::new(2, DataSource::Local, session("Asha"));
        assert!(!first.is_current(&latest));
        assert!(latest.is_current(&latest.clone()));
    }

    #[test]
    fn test_source_switch_supersedes_load() {
        let remote = LoadTicket::new(0, DataSource::Remote, None);
        let local = LoadTicket::new(0, DataSource::Local, None);
        assert!(!remote.is_current(&local));
    }

    #[test]
    fn test_session_change_supersedes_load() {
        let asha = LoadTicket::new(0, DataSource::Local, session("Asha"));
        let ravi = LoadTicket::new(0, DataSource::Local, session("Ravi"));
        assert!(!asha.is_current(&ravi));
        assert!(!asha.is_current(&LoadTicket::new(0, DataSource::Local, None)));
    }
}
