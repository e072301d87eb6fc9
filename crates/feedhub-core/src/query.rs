//! Status filtering and authorship over in-memory collections

use crate::domain::{Author, Complaint, Feedback, Status, StatusFilter};

/// Anything that carries a triage status
pub trait Triaged {
    fn status(&self) -> Status;
}

impl Triaged for Feedback {
    fn status(&self) -> Status {
        self.status
    }
}

impl Triaged for Complaint {
    fn status(&self) -> Status {
        self.status
    }
}

/// Entries whose status passes `filter`, in original order
pub fn filter_by_status<T: Triaged + Clone>(items: &[T], filter: StatusFilter) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.matches(item.status()))
        .cloned()
        .collect()
}

pub fn count_with_status<T: Triaged>(items: &[T], status: Status) -> usize {
    items.iter().filter(|item| item.status() == status).count()
}

pub fn feedback_by(items: &[Feedback], author: &Author) -> Vec<Feedback> {
    items.iter().filter(|fb| fb.is_authored_by(author)).cloned().collect()
}

pub fn complaints_by(items: &[Complaint], author: &Author) -> Vec<Complaint> {
    items.iter().filter(|c| c.is_authored_by(author)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(id: &str, status: &str) -> Complaint {
        serde_json::from_value(serde_json::json!({ "id": id, "status": status })).unwrap()
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = vec![
            complaint("c1", "Resolved"),
            complaint("c2", "Pending"),
            complaint("c3", "resolved"),
            complaint("c4", "In Process"),
            complaint("c5", "Resolved"),
        ];

        let resolved = filter_by_status(&items, StatusFilter::Only(Status::Resolved));
        let ids: Vec<&str> = resolved.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c3", "c5"]);
        assert!(resolved.iter().all(|c| c.status == Status::Resolved));
    }

    #[test]
    fn test_filter_all_is_identity() {
        let items = vec![complaint("c1", "Pending"), complaint("c2", "Unresolved")];
        assert_eq!(filter_by_status(&items, StatusFilter::All), items);
    }

    #[test]
    fn test_filter_no_match() {
        let items = vec![complaint("c1", "Pending")];
        assert!(filter_by_status(&items, StatusFilter::Only(Status::Unresolved)).is_empty());
        assert_eq!(count_with_status(&items, Status::Pending), 1);
    }

    #[test]
    fn test_by_author() {
        let mut mine = complaint("c1", "Pending");
        mine.user = Some("Asha".to_string());
        let theirs = complaint("c2", "Pending");
        let author = Author::new(None, "Asha");
        assert_eq!(complaints_by(&[mine.clone(), theirs], &author), vec![mine]);
    }
}
