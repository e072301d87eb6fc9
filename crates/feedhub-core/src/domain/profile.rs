//! Profile card data for the admin and the current user

use serde::{Deserialize, Serialize};

use super::required;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn admin_default() -> Self {
        Self::new("Admin", "admin@feedhub.local")
    }

    pub fn user_default() -> Self {
        Self::new("User", "user@mail.com")
    }

    /// Name and email are both required; returns a trimmed copy.
    pub fn validate(&self) -> Result<Profile> {
        Ok(Profile {
            name: required("name", &self.name)?,
            email: required("email", &self.email)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Profile::new(" Admin ", "a@b.c").validate().is_ok());
        assert!(Profile::new("Admin", " ").validate().unwrap_err().is_validation());
    }
}
