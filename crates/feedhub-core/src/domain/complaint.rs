//! Complaint Entity
//!
//! Same lifecycle as feedback plus a priority and an assignee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Author, Entity};
use super::ids::{de_id, de_opt_id};
use super::lenient::{de_opt_datetime, de_opt_text, de_text};
use super::status::{Priority, Status};
use super::{excerpt, required};
use crate::Result;

/// A submitted complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    #[serde(alias = "_id", deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_id")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub subject: String,
    #[serde(default, deserialize_with = "de_text")]
    pub message: String,
    #[serde(default, deserialize_with = "de_text")]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub admin_remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// User input for a new complaint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplaintDraft {
    pub subject: String,
    pub message: String,
    pub category: String,
    pub priority: Priority,
}

impl ComplaintDraft {
    pub fn validate(&self) -> Result<ComplaintDraft> {
        Ok(ComplaintDraft {
            subject: required("subject", &self.subject)?,
            message: required("message", &self.message)?,
            category: self.category.trim().to_string(),
            priority: self.priority,
        })
    }
}

impl Complaint {
    pub fn from_draft(id: String, author: &Author, draft: ComplaintDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: author.user_id.clone(),
            user: Some(author.name.clone()),
            subject: draft.subject,
            message: draft.message,
            category: draft.category,
            priority: draft.priority,
            status: Status::Pending,
            assigned_to: None,
            admin_remark: None,
            date: Some(now.format("%Y-%m-%d").to_string()),
            created_at: Some(now),
        }
    }

    pub fn label(&self) -> String {
        if self.subject.trim().is_empty() {
            excerpt(&self.message)
        } else {
            self.subject.clone()
        }
    }

    pub fn author_name(&self) -> &str {
        self.user.as_deref().unwrap_or("Anon")
    }

    pub fn category_label(&self) -> &str {
        if self.category.is_empty() {
            "General"
        } else {
            &self.category
        }
    }

    pub fn display_date(&self) -> String {
        self.created_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .or_else(|| self.date.clone())
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn is_authored_by(&self, author: &Author) -> bool {
        author.owns(self.user_id.as_deref(), self.user.as_deref())
    }
}

impl Entity for Complaint {
    const KIND: &'static str = "complaint";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_draft_requires_subject() {
        let draft = ComplaintDraft {
            subject: String::new(),
            message: "Broken login".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_from_draft() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap();
        let draft = ComplaintDraft {
            subject: "Refund".to_string(),
            message: "Charged twice".to_string(),
            category: "Service".to_string(),
            priority: Priority::High,
        };
        let author = Author::new(None, "Ravi");
        let complaint = Complaint::from_draft("cmp1".to_string(), &author, draft, now);
        assert_eq!(complaint.status, Status::Pending);
        assert_eq!(complaint.priority, Priority::High);
        assert_eq!(complaint.assigned_to, None);
        assert_eq!(complaint.author_name(), "Ravi");
    }

    #[test]
    fn test_assigned_to_field_name() {
        let raw = r#"{"id":"cmp2","subject":"Late","assignedTo":"Meera","priority":"Medium"}"#;
        let complaint: Complaint = serde_json::from_str(raw).unwrap();
        assert_eq!(complaint.assigned_to.as_deref(), Some("Meera"));
        assert_eq!(complaint.priority, Priority::Medium);
    }
}
