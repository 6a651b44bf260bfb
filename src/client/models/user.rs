//! User model

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `/api/users/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned user ID
    pub id: i64,

    /// Login name
    pub username: String,

    /// Avatar URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_without_avatar() {
        let user: User = serde_json::from_str(r#"{"id": 1, "username": "alice"}"#).unwrap();
        assert_eq!(user.id, 1);
        assert!(user.avatar.is_none());

        let out = serde_json::to_string(&user).unwrap();
        assert!(!out.contains("avatar"));
    }

    #[test]
    fn test_user_null_avatar() {
        let user: User =
            serde_json::from_str(r#"{"id": 2, "username": "bob", "avatar": null}"#).unwrap();
        assert!(user.avatar.is_none());
    }

    #[test]
    fn test_user_ignores_extra_fields() {
        let user: User = serde_json::from_str(
            r#"{"id": 3, "username": "carol", "avatar": "/a.png", "created_at": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(user.avatar.as_deref(), Some("/a.png"));
    }
}
