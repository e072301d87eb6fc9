//! Dashboard sections
//!
//! Each dashboard shows exactly one section at a time; the sidebar sets
//! it. No guards, no history.

/// Admin dashboard sections in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSection {
    #[default]
    Overview,
    Users,
    Feedbacks,
    Complaints,
    Categories,
    Analytics,
    Todos,
    Profile,
}

impl AdminSection {
    pub const ALL: [AdminSection; 8] = [
        AdminSection::Overview,
        AdminSection::Users,
        AdminSection::Feedbacks,
        AdminSection::Complaints,
        AdminSection::Categories,
        AdminSection::Analytics,
        AdminSection::Todos,
        AdminSection::Profile,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AdminSection::Overview => "overview",
            AdminSection::Users => "users",
            AdminSection::Feedbacks => "feedbacks",
            AdminSection::Complaints => "complaints",
            AdminSection::Categories => "categories",
            AdminSection::Analytics => "analytics",
            AdminSection::Todos => "todos",
            AdminSection::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::Overview => "Overview",
            AdminSection::Users => "Users",
            AdminSection::Feedbacks => "Feedbacks",
            AdminSection::Complaints => "Complaints",
            AdminSection::Categories => "Categories",
            AdminSection::Analytics => "Analytics",
            AdminSection::Todos => "Todos",
            AdminSection::Profile => "Profile",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// `(id, label)` pairs for the sidebar
    pub fn nav() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|s| (s.id(), s.label())).collect()
    }
}

/// User dashboard sections in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSection {
    #[default]
    Overview,
    SubmitFeedback,
    SubmitComplaint,
    MyFeedbacks,
    MyComplaints,
    Profile,
}

impl UserSection {
    pub const ALL: [UserSection; 6] = [
        UserSection::Overview,
        UserSection::SubmitFeedback,
        UserSection::SubmitComplaint,
        UserSection::MyFeedbacks,
        UserSection::MyComplaints,
        UserSection::Profile,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            UserSection::Overview => "overview",
            UserSection::SubmitFeedback => "submit-feedback",
            UserSection::SubmitComplaint => "submit-complaint",
            UserSection::MyFeedbacks => "my-feedbacks",
            UserSection::MyComplaints => "my-complaints",
            UserSection::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserSection::Overview => "Overview",
            UserSection::SubmitFeedback => "Submit Feedback",
            UserSection::SubmitComplaint => "Submit Complaint",
            UserSection::MyFeedbacks => "My Feedbacks",
            UserSection::MyComplaints => "My Complaints",
            UserSection::Profile => "Profile",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn nav() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|s| (s.id(), s.label())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_ids_resolve() {
        for section in AdminSection::ALL {
            assert_eq!(AdminSection::from_id(section.id()), Some(section));
        }
        assert_eq!(AdminSection::from_id("settings"), None);
        assert_eq!(AdminSection::default(), AdminSection::Overview);
    }

    #[test]
    fn test_user_ids_resolve() {
        for section in UserSection::ALL {
            assert_eq!(UserSection::from_id(section.id()), Some(section));
        }
        assert_eq!(UserSection::from_id("users"), None);
    }

    #[test]
    fn test_nav_order() {
        let labels: Vec<&str> = UserSection::nav().into_iter().map(|(_, label)| label).collect();
        assert_eq!(
            labels,
            ["Overview", "Submit Feedback", "Submit Complaint", "My Feedbacks", "My Complaints", "Profile"]
        );
        assert_eq!(AdminSection::nav().len(), 8);
    }
}
