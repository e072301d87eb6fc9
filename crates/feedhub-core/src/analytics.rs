//! Derived statistics for the overview and analytics panels
//!
//! Everything here is recomputed from the full collections on each
//! render; nothing is aggregated incrementally.

use std::collections::HashMap;

use crate::domain::{Author, Category, Complaint, Feedback, Priority, Status, User};
use crate::query::{count_with_status, Triaged};

/// Number of categories shown in the top-categories list
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Number of entries in the "latest" lists
pub const RECENT_LIMIT: usize = 6;

/// Admin overview tiles
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_users: usize,
    pub total_feedback: usize,
    pub total_complaints: usize,
    pub total_categories: usize,
    pub pending_complaints: usize,
    pub resolved_feedback: usize,
    pub average_rating: f64,
}

impl Overview {
    pub fn compute(
        users: &[User],
        feedback: &[Feedback],
        complaints: &[Complaint],
        categories: &[Category],
    ) -> Self {
        Self {
            total_users: users.len(),
            total_feedback: feedback.len(),
            total_complaints: complaints.len(),
            total_categories: categories.len(),
            pending_complaints: count_with_status(complaints, Status::Pending),
            resolved_feedback: count_with_status(feedback, Status::Resolved),
            average_rating: average_rating(feedback),
        }
    }

    /// Average rating with two decimals
    pub fn average_rating_label(&self) -> String {
        format!("{:.2}", self.average_rating)
    }
}

/// User overview tiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserOverview {
    pub feedback: usize,
    pub complaints: usize,
    pub resolved_complaints: usize,
}

impl UserOverview {
    pub fn compute(feedback: &[Feedback], complaints: &[Complaint], author: &Author) -> Self {
        let mine: Vec<&Complaint> = complaints.iter().filter(|c| c.is_authored_by(author)).collect();
        Self {
            feedback: feedback.iter().filter(|fb| fb.is_authored_by(author)).count(),
            complaints: mine.len(),
            resolved_complaints: mine.iter().filter(|c| c.status == Status::Resolved).count(),
        }
    }
}

/// Mean rating over all feedback; unrated items count as zero
pub fn average_rating(feedback: &[Feedback]) -> f64 {
    if feedback.is_empty() {
        return 0.0;
    }
    let sum: u32 = feedback.iter().map(|fb| u32::from(fb.rating.unwrap_or(0))).sum();
    f64::from(sum) / feedback.len() as f64
}

/// Count per status, every status present, in display order
pub fn status_histogram<T: Triaged>(items: &[T]) -> Vec<(Status, usize)> {
    Status::ALL
        .iter()
        .map(|status| (*status, count_with_status(items, *status)))
        .collect()
}

/// Count per priority, every priority present
pub fn priority_histogram(complaints: &[Complaint]) -> Vec<(Priority, usize)> {
    Priority::ALL
        .iter()
        .map(|priority| {
            let count = complaints.iter().filter(|c| c.priority == *priority).count();
            (*priority, count)
        })
        .collect()
}

/// Most frequent feedback categories, at most `limit`.
///
/// Sorted by count descending; ties keep first-appearance order. A blank
/// category is reported as `General`.
pub fn top_categories(feedback: &[Feedback], limit: usize) -> Vec<(String, usize)> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for fb in feedback {
        let name = fb.category_label().to_string();
        let count = counts.entry(name.clone()).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            (name, count)
        })
        .collect();
    // Stable sort keeps first-appearance order among ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Bar length in percent of the largest value
pub fn bar_percent(count: usize, max: usize) -> u32 {
    if max == 0 {
        return 0;
    }
    ((count * 100) / max) as u32
}

/// First `RECENT_LIMIT` entries (collections are stored newest first)
pub fn recent<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().take(RECENT_LIMIT).cloned().collect()
}
