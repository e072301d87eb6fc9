//! Feedback Repository

use chrono::{DateTime, Utc};

use super::Collection;
use crate::domain::{next_id, non_blank, Author, Feedback, FeedbackDraft, Status};
use crate::storage::{keys, JsonStore, KeyValueStore};
use crate::Result;

pub struct FeedbackRepository<S> {
    items: Collection<S, Feedback>,
}

impl<S: KeyValueStore> FeedbackRepository<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        Self {
            items: Collection::new(store, keys::FEEDBACKS),
        }
    }

    pub fn list(&self) -> Vec<Feedback> {
        self.items.list()
    }

    pub fn find(&self, id: &str) -> Result<Feedback> {
        self.items.find(id)
    }

    pub fn authored_by(&self, author: &Author) -> Vec<Feedback> {
        self.list()
            .into_iter()
            .filter(|fb| fb.is_authored_by(author))
            .collect()
    }

    /// Validate and prepend a new pending feedback item
    pub fn submit(&self, author: &Author, draft: &FeedbackDraft, now: DateTime<Utc>) -> Result<Feedback> {
        let draft = draft.validate()?;
        let id = next_id("fb", now, |candidate| self.items.contains(candidate));
        let feedback = self.items.prepend(Feedback::from_draft(id, author, draft, now))?;
        log::info!("[FEEDBACK] {} submitted by {}", feedback.id, author.name);
        Ok(feedback)
    }

    /// Set status and remark; a blank remark clears it
    pub fn set_status(&self, id: &str, status: Status, remark: &str) -> Result<Feedback> {
        let remark = non_blank(remark);
        let feedback = self.items.modify(id, |fb| {
            fb.status = status;
            fb.admin_remark = remark;
        })?;
        log::info!("[FEEDBACK] {} -> {}", id, status);
        Ok(feedback)
    }

    pub fn delete(&self, id: &str) -> Result<Feedback> {
        self.items.remove(id)
    }
}
