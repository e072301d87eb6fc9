//! Complaint Repository

use chrono::{DateTime, Utc};

use super::Collection;
use crate::domain::{next_id, non_blank, required, Author, Complaint, ComplaintDraft, Status};
use crate::storage::{keys, JsonStore, KeyValueStore};
use crate::Result;

pub struct ComplaintRepository<S> {
    items: Collection<S, Complaint>,
}

impl<S: KeyValueStore> ComplaintRepository<S> {
    pub fn new(store: JsonStore<S>) -> Self {
        Self {
            items: Collection::new(store, keys::COMPLAINTS),
        }
    }

    pub fn list(&self) -> Vec<Complaint> {
        self.items.list()
    }

    pub fn find(&self, id: &str) -> Result<Complaint> {
        self.items.find(id)
    }

    pub fn authored_by(&self, author: &Author) -> Vec<Complaint> {
        self.list()
            .into_iter()
            .filter(|c| c.is_authored_by(author))
            .collect()
    }

    pub fn submit(&self, author: &Author, draft: &ComplaintDraft, now: DateTime<Utc>) -> Result<Complaint> {
        let draft = draft.validate()?;
        let id = next_id("cmp", now, |candidate| self.items.contains(candidate));
        let complaint = self.items.prepend(Complaint::from_draft(id, author, draft, now))?;
        log::info!("[COMPLAINT] {} submitted by {}", complaint.id, author.name);
        Ok(complaint)
    }

    pub fn set_status(&self, id: &str, status: Status, remark: &str) -> Result<Complaint> {
        let remark = non_blank(remark);
        let complaint = self.items.modify(id, |c| {
            c.status = status;
            c.admin_remark = remark;
        })?;
        log::info!("[COMPLAINT] {} -> {}", id, status);
        Ok(complaint)
    }

    /// Hand the complaint to `assignee` and move it to In Process
    pub fn assign(&self, id: &str, assignee: &str) -> Result<Complaint> {
        let assignee = required("assignee", assignee)?;
        let complaint = self.items.modify(id, |c| {
            c.assigned_to = Some(assignee);
            c.status = Status::InProcess;
        })?;
        log::info!("[COMPLAINT] {} assigned", id);
        Ok(complaint)
    }

    pub fn delete(&self, id: &str) -> Result<Complaint> {
        self.items.remove(id)
    }
}
