//! Request and response bodies of the REST service

use serde::{Deserialize, Serialize};

use crate::domain::{Author, ComplaintDraft, FeedbackDraft, Priority, Role, Status, User};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Answer to register and login
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedbackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub user: String,
    pub title: String,
    pub message: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl NewFeedbackRequest {
    pub fn new(author: &Author, draft: FeedbackDraft) -> Self {
        Self {
            user_id: author.user_id.clone(),
            user: author.name.clone(),
            title: draft.title,
            message: draft.message,
            category: draft.category,
            rating: draft.rating,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComplaintRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub user: String,
    pub subject: String,
    pub message: String,
    pub category: String,
    pub priority: Priority,
}

impl NewComplaintRequest {
    pub fn new(author: &Author, draft: ComplaintDraft) -> Self {
        Self {
            user_id: author.user_id.clone(),
            user: author.name.clone(),
            subject: draft.subject,
            message: draft.message,
            category: draft.category,
            priority: draft.priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_remark: Option<String>,
}
