//! # User model
//!
//! Two representations of a Hireboard user:
//!
//! - [`User`] (server only) is the full `users` table row, loaded via
//!   [`sqlx::FromRow`]. [`User::to_info`] projects it for the client.
//! - [`UserInfo`] is the client-safe subset that crosses the server/client
//!   boundary through server functions. It omits timestamps and converts the
//!   `Uuid` to a `String` so it works in WASM. Name parts and the admin flag
//!   are optional; rendering must never assume they are present.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            is_admin: self.is_admin,
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

impl UserInfo {
    /// "First Last" if at least one name part is set, `None` otherwise.
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (None, None) => None,
            (first, last) => {
                let joined = [first, last]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(joined)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_name_joins_both_parts() {
        let user = UserInfo {
            id: "1".into(),
            email: "a@b.com".into(),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            is_admin: false,
        };
        assert_eq!(user.full_name(), Some("Ada Lovelace".into()));
    }

    #[test]
    fn full_name_works_with_a_single_part() {
        let user = UserInfo {
            id: "1".into(),
            email: "a@b.com".into(),
            first_name: None,
            last_name: Some("Lovelace".into()),
            is_admin: false,
        };
        assert_eq!(user.full_name(), Some("Lovelace".into()));
    }

    #[test]
    fn full_name_absent_without_name_parts() {
        let user = UserInfo {
            id: "1".into(),
            email: "a@b.com".into(),
            first_name: None,
            last_name: None,
            is_admin: true,
        };
        assert_eq!(user.full_name(), None);
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let user: UserInfo =
            serde_json::from_value(json!({"id": "1", "email": "a@b.com", "isAdmin": true}))
                .unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.email, "a@b.com");
        assert!(user.is_admin);
        assert_eq!(user.first_name, None);
        assert_eq!(user.last_name, None);
    }

    #[test]
    fn admin_flag_defaults_to_false() {
        let user: UserInfo =
            serde_json::from_value(json!({"id": "1", "email": "a@b.com"})).unwrap();
        assert!(!user.is_admin);
    }
}
