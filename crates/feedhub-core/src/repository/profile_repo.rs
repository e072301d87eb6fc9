//! Profile and Session Repositories

use crate::domain::{Profile, Role, Session};
use crate::storage::{keys, JsonStore, KeyValueStore, Snapshot};
use crate::Result;

/// One profile card stored under a fixed key
pub struct ProfileRepository<S> {
    store: JsonStore<S>,
    key: &'static str,
    default: Profile,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    pub fn new(store: JsonStore<S>, key: &'static str, default: Profile) -> Self {
        Self { store, key, default }
    }

    pub fn get(&self) -> Profile {
        self.store.get(self.key, self.default.clone())
    }

    /// Start editing: the snapshot remembers what was read
    pub fn edit(&self) -> Snapshot<Profile> {
        self.store.snapshot(self.key, self.default.clone())
    }

    /// Save an edit, failing with `Conflict` if the profile changed meanwhile
    pub fn save(&self, snapshot: &Snapshot<Profile>, profile: &Profile) -> Result<Profile> {
        let profile = profile.validate()?;
        self.store.save_if_unchanged(snapshot, &profile)?;
        Ok(profile)
    }

    /// Save without conflict detection
    pub fn overwrite(&self, profile: &Profile) -> Result<Profile> {
        let profile = profile.validate()?;
        self.store.set(self.key, &profile)?;
        Ok(profile)
    }
}

/// The current session (`current_user`)
pub struct SessionRepository<S> {
    store: JsonStore<S>,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        Self { store }
    }

    /// Stored session. Older builds kept a bare display name here; that
    /// reads as a plain user session.
    pub fn current(&self) -> Option<Session> {
        let raw = self.store.backend().get_raw(keys::CURRENT_USER).ok().flatten()?;
        if let Ok(session) = serde_json::from_str::<Session>(&raw) {
            return Some(session);
        }
        let name = raw.trim().trim_matches('"').trim();
        if name.is_empty() || name.starts_with('{') {
            log::warn!("[SESSION] unreadable session value, ignoring");
            return None;
        }
        Some(Session::new(None, name, Role::User))
    }

    pub fn sign_in(&self, session: &Session) -> Result<()> {
        log::info!("[SESSION] signed in as {} ({})", session.name, session.role.as_str());
        self.store.set(keys::CURRENT_USER, session)
    }

    pub fn sign_out(&self) -> Result<()> {
        log::info!("[SESSION] signed out");
        self.store.remove(keys::CURRENT_USER)
    }
}
