//! User Repository

use chrono::{DateTime, Utc};

use super::Collection;
use crate::domain::{next_id, required, Complaint, Feedback, Role, Session, User};
use crate::storage::{keys, JsonStore, KeyValueStore};
use crate::Result;

pub struct UserRepository<S> {
    store: JsonStore<S>,
    users: Collection<S, User>,
}

impl<S: KeyValueStore + Clone> UserRepository<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        let users = Collection::new(store.clone(), keys::USERS);
        Self { store, users }
    }

    pub fn list(&self) -> Vec<User> {
        self.users.list()
    }

    pub fn find(&self, id: &str) -> Result<User> {
        self.users.find(id)
    }

    /// Flip the blocked flag
    pub fn toggle_blocked(&self, id: &str) -> Result<User> {
        let user = self.users.modify(id, |user| user.blocked = !user.blocked)?;
        log::info!("[USERS] {} is now {}", user.id, user.status_label());
        Ok(user)
    }

    /// Delete a user and, best effort, everything they submitted.
    ///
    /// The user is gone even if pruning their submissions fails; such
    /// failures are logged.
    pub fn delete(&self, id: &str) -> Result<User> {
        let user = self.users.remove(id)?;
        let owned = |user_id: Option<&str>| user_id == Some(id);

        let feedback = Collection::<S, Feedback>::new(self.store.clone(), keys::FEEDBACKS)
            .retain(|fb| !owned(fb.user_id.as_deref()));
        let complaints = Collection::<S, Complaint>::new(self.store.clone(), keys::COMPLAINTS)
            .retain(|c| !owned(c.user_id.as_deref()));

        match (feedback, complaints) {
            (Ok(f), Ok(c)) => log::info!("[USERS] deleted {} with {} feedback, {} complaints", id, f, c),
            (f, c) => log::warn!(
                "[USERS] deleted {} but pruning submissions failed: {:?} / {:?}",
                id,
                f.err(),
                c.err()
            ),
        }
        Ok(user)
    }

    /// Find the user called `name`, registering one if none exists.
    pub fn ensure_registered(&self, name: &str, role: Role, now: DateTime<Utc>) -> Result<User> {
        let name = required("name", name)?;
        if let Some(existing) = self.list().into_iter().find(|u| u.name == name) {
            return Ok(existing);
        }
        let id = next_id("u", now, |candidate| self.users.contains(candidate));
        let mut user = User::new(id, name.clone(), "");
        user.role = role;
        log::info!("[USERS] registered {} as {}", user.id, role.as_str());
        self.users.push(user)
    }

    /// Session for `name` acting as `role`, backed by a user record.
    ///
    /// The chosen role wins over the role stored on an existing record.
    pub fn sign_in_as(&self, name: &str, role: Role, now: DateTime<Utc>) -> Result<Session> {
        let user = self.ensure_registered(name, role, now)?;
        Ok(Session::new(Some(user.id), user.name, role))
    }
}
