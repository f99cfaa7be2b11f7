use chrono::{DateTime, Utc};
use serde::Serialize;

/// Account record. The password field holds an argon2 hash and never leaves
/// the process; is_admin is never settable through the registration API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            username: "ada".to_string(),
            password: "$argon2id$v=19$secret".to_string(),
            is_admin: false,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "ada");
        assert_eq!(value["isAdmin"], false);
    }
}
