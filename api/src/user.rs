//! Signed-in user identity and roles.

use serde::Deserialize;
use serde::Serialize;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    User,
}

/// The details of the signed-in user, as returned by the sign-in flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

impl User {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    pub fn is_user(&self) -> bool {
        self.has_role(UserRole::User)
    }

    /// Name shown in the avatar menu.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_deserialize_from_upper_case_names() {
        let user: User =
            serde_json::from_str(r#"{"id": "ada", "roles": ["ADMIN", "USER"]}"#).unwrap();
        assert!(user.is_admin());
        assert!(user.is_user());
        assert_eq!(user.label(), "ada");
    }

    #[test]
    fn missing_roles_mean_none() {
        let user: User = serde_json::from_str(r#"{"id": "bob"}"#).unwrap();
        assert!(!user.is_admin());
        assert!(!user.is_user());
    }
}
