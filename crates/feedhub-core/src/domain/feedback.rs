//! Feedback Entity
//!
//! A user comment with optional rating, triaged by an admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Author, Entity};
use super::ids::{de_id, de_opt_id};
use super::lenient::{de_opt_datetime, de_opt_text, de_rating, de_text};
use super::status::Status;
use super::{excerpt, required};
use crate::{Error, Result};

/// A submitted feedback item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(alias = "_id", deserialize_with = "de_id")]
    pub id: String,
    /// Author id, when known
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_id")]
    pub user_id: Option<String>,
    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub user: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub title: String,
    #[serde(default, deserialize_with = "de_text")]
    pub message: String,
    #[serde(default, deserialize_with = "de_text")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_rating")]
    pub rating: Option<u8>,
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub admin_remark: Option<String>,
    /// Display date written by older builds
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

/// User input for a new feedback item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub title: String,
    pub message: String,
    pub category: String,
    pub rating: Option<u8>,
}

impl FeedbackDraft {
    /// Check required fields and the rating range, returning a trimmed copy.
    pub fn validate(&self) -> Result<FeedbackDraft> {
        let title = required("title", &self.title)?;
        let message = required("message", &self.message)?;
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(Error::validation("rating", "must be between 1 and 5"));
            }
        }
        Ok(FeedbackDraft {
            title,
            message,
            category: self.category.trim().to_string(),
            rating: self.rating,
        })
    }
}

impl Feedback {
    /// Build a pending feedback item from a validated draft
    pub fn from_draft(id: String, author: &Author, draft: FeedbackDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: author.user_id.clone(),
            user: Some(author.name.clone()),
            title: draft.title,
            message: draft.message,
            category: draft.category,
            rating: draft.rating,
            status: Status::Pending,
            admin_remark: None,
            date: Some(now.format("%Y-%m-%d").to_string()),
            created_at: Some(now),
        }
    }

    /// Title, or a message excerpt when the title is blank
    pub fn label(&self) -> String {
        if self.title.trim().is_empty() {
            excerpt(&self.message)
        } else {
            self.title.clone()
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

impl Entity for Feedback {
    const KIND: &'static str = "feedback";

    fn id(&self) -> &str {
        &self.id
    }
}
