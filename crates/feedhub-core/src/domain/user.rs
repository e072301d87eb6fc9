//! User Entity
//!
//! Registered accounts plus the session of whoever is using the browser.

use serde::{Deserialize, Deserializer, Serialize};

use super::entity::{Author, Entity};
use super::ids::de_id;
use super::lenient::{de_flag, de_opt_text, de_text};

/// Account role, selects the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    /// Case-insensitive; anything but `admin` is a plain user.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = de_opt_text(deserializer)?.unwrap_or_default();
        Ok(if raw.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        })
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id", deserialize_with = "de_id")]
    pub id: String,
    #[serde(deserialize_with = "de_text")]
    pub name: String,
    #[serde(default, deserialize_with = "de_text")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "de_opt_text")]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "de_flag")]
    pub blocked: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: None,
            role: Role::User,
            blocked: false,
        }
    }

    /// `Blocked` or `Active`
    pub fn status_label(&self) -> &'static str {
        if self.blocked {
            "Blocked"
        } else {
            "Active"
        }
    }
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> &str {
        &self.id
    }
}

/// The identity the dashboards act as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl Session {
    pub fn new(user_id: Option<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            name: name.into(),
            role,
        }
    }

    /// Session for a user record returned by the backend
    pub fn for_user(user: &User) -> Self {
        Self::new(Some(user.id.clone()), user.name.clone(), user.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Author reference stamped on new submissions
    pub fn author(&self) -> Author {
        Author::new(self.user_id.clone(), self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_on_sparse_json() {
        let user: User = serde_json::from_str(r#"{"_id": 5, "name": "Ravi"}"#).unwrap();
        assert_eq!(user.id(), "5");
        assert_eq!(user.role, Role::User);
        assert!(!user.blocked);
        assert_eq!(user.status_label(), "Active");
    }

    #[test]
    fn test_user_requires_name() {
        assert!(serde_json::from_str::<User>(r#"{"id": "u1"}"#).is_err());
    }

    #[test]
    fn test_user_loose_field_shapes() {
        let raw = r#"{"id": "u1", "name": "Ravi", "phone": 5550100, "role": "Admin", "blocked": "true", "email": null}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.phone.as_deref(), Some("5550100"));
        assert_eq!(user.role, Role::Admin);
        assert!(user.blocked);
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_session_author() {
        let mut user = User::new("u1", "Asha", "asha@mail.com");
        user.role = Role::Admin;
        let session = Session::for_user(&user);
        assert!(session.is_admin());
        assert_eq!(session.author(), Author::new(Some("u1".to_string()), "Asha"));
    }
}
