//! Repository Layer
//!
//! Typed read/write access per collection over a [`JsonStore`]. Each
//! mutation reads the freshest stored collection, changes one entry and
//! writes the whole collection back.

mod collection;
mod user_repo;
mod feedback_repo;
mod complaint_repo;
mod category_repo;
mod todo_repo;
mod profile_repo;
mod hidden;

#[cfg(test)]
mod tests;

pub use collection::Collection;
pub use user_repo::UserRepository;
pub use feedback_repo::FeedbackRepository;
pub use complaint_repo::ComplaintRepository;
pub use category_repo::CategoryRepository;
pub use todo_repo::TodoRepository;
pub use profile_repo::{ProfileRepository, SessionRepository};
pub use hidden::HiddenIds;

use crate::domain::Profile;
use crate::storage::{keys, JsonStore, KeyValueStore};

impl<S: KeyValueStore + Clone> JsonStore<S> {
    pub fn users(&self) -> UserRepository<S> {
        UserRepository::new(self.clone())
    }

    pub fn feedback(&self) -> FeedbackRepository<S> {
        FeedbackRepository::new(self.clone())
    }

    pub fn complaints(&self) -> ComplaintRepository<S> {
        ComplaintRepository::new(self.clone())
    }

    pub fn categories(&self) -> CategoryRepository<S> {
        CategoryRepository::new(self.clone())
    }

    pub fn todos(&self) -> TodoRepository<S> {
        TodoRepository::new(self.clone())
    }

    pub fn admin_profile(&self) -> ProfileRepository<S> {
        ProfileRepository::new(self.clone(), keys::ADMIN_PROFILE, Profile::admin_default())
    }

    pub fn user_profile(&self) -> ProfileRepository<S> {
        ProfileRepository::new(self.clone(), keys::CURRENT_USER_PROFILE, Profile::user_default())
    }

    pub fn session(&self) -> SessionRepository<S> {
        SessionRepository::new(self.clone())
    }

    pub fn hidden_feedback(&self) -> HiddenIds<S> {
        HiddenIds::new(self.clone(), keys::HIDDEN_FEEDBACKS)
    }

    pub fn hidden_complaints(&self) -> HiddenIds<S> {
        HiddenIds::new(self.clone(), keys::HIDDEN_COMPLAINTS)
    }
}
