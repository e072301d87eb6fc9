//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::Utc;
use feedhub_core::config::Config;
use feedhub_core::domain::{Role, Session};
use feedhub_core::service::{Capabilities, DataService};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::local_storage::{browser_store, BrowserStore, LocalStorage};

/// How long a notice stays on screen
const NOTICE_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown above the active panel
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in identity; `None` shows the session gate
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
    /// Effective configuration
    pub config: ReadSignal<Config>,
    set_config: WriteSignal<Config>,
    /// Bumped to invalidate the collections in the store - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to invalidate the collections in the store - write
    set_reload_trigger: WriteSignal<u32>,
    pub notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
    notice_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(session: Option<Session>, config: Config) -> Self {
        let (session, set_session) = signal(session);
        let (config, set_config) = signal(config);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (notice, set_notice) = signal(None);
        Self {
            session,
            set_session,
            config,
            set_config,
            reload_trigger,
            set_reload_trigger,
            notice,
            set_notice,
            notice_seq: StoredValue::new(0),
        }
    }

    /// Trigger a reload of all collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn store(&self) -> BrowserStore {
        browser_store()
    }

    /// Data service for the configured source
    pub fn service(&self) -> DataService<LocalStorage> {
        DataService::from_config(browser_store(), &self.config.get_untracked())
    }

    /// What the configured source supports; tracks config changes
    pub fn capabilities(&self) -> Capabilities {
        DataService::<LocalStorage>::from_config(browser_store(), &self.config.get()).capabilities()
    }

    pub fn capabilities_untracked(&self) -> Capabilities {
        self.service().capabilities()
    }

    /// Label for delete buttons: remote deletes only hide locally
    pub fn delete_label(&self) -> &'static str {
        if self.capabilities_untracked().hard_delete {
            "Delete"
        } else {
            "Hide"
        }
    }

    // ========================
    // Session
    // ========================

    pub fn sign_in(&self, name: &str, role: Role) -> Result<(), String> {
        let session = self
            .service()
            .sign_in(name, role, Utc::now())
            .map_err(|e| e.to_string())?;
        self.set_session.set(Some(session));
        Ok(())
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.service().sign_out() {
            log::warn!("[APP] clearing session failed: {}", e);
        }
        self.set_session.set(None);
    }

    // ========================
    // Configuration
    // ========================

    /// Persist `config` and switch to it
    pub fn apply_config(&self, config: Config) -> Result<(), String> {
        config.save(&self.store()).map_err(|e| e.to_string())?;
        self.set_config.set(config);
        self.reload();
        Ok(())
    }

    /// Drop the stored override and go back to defaults
    pub fn reset_config(&self) -> Result<(), String> {
        let store = self.store();
        Config::reset(&store).map_err(|e| e.to_string())?;
        let config = Config::load(&store).map_err(|e| e.to_string())?;
        self.set_config.set(config);
        self.reload();
        Ok(())
    }

    // ========================
    // Notices
    // ========================

    pub fn success(&self, text: impl Into<String>) {
        self.show_notice(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("[APP] {}", text);
        self.show_notice(NoticeKind::Error, text);
    }

    /// Report the outcome of a mutation and reload on success
    pub fn finish<T>(&self, result: feedhub_core::Result<T>, success: &str) {
        match result {
            Ok(_) => {
                self.success(success);
                self.reload();
            }
            Err(e) => self.error(e.to_string()),
        }
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    fn show_notice(&self, kind: NoticeKind, text: String) {
        self.notice_seq.update_value(|seq| *seq = seq.wrapping_add(1));
        let id = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { id, kind, text }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // A newer notice keeps its own timer
            if notice.get_untracked().is_some_and(|n| n.id == id) {
                set_notice.set(None);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
