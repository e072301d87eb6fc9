//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde, chrono and log).

mod entity;
mod ids;
mod lenient;
mod status;
mod user;
mod feedback;
mod complaint;
mod category;
mod todo;
mod profile;

pub use entity::{Author, Entity};
pub use ids::next_id;
pub use status::{Priority, Status, StatusFilter};
pub use user::{Role, Session, User};
pub use feedback::{Feedback, FeedbackDraft};
pub use complaint::{Complaint, ComplaintDraft};
pub use category::Category;
pub use todo::TodoItem;
pub use profile::Profile;

/// Length of the message excerpt used when an item has no title.
pub const EXCERPT_CHARS: usize = 60;

/// Require a non-blank string field, returning it trimmed.
pub(crate) fn required(field: &'static str, value: &str) -> crate::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::Error::validation(field, "is required"));
    }
    Ok(trimmed.to_string())
}

/// Trimmed text, `None` when blank.
pub(crate) fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// First `EXCERPT_CHARS` characters of `text`.
pub(crate) fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}
