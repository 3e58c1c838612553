use garde::Validate;
use holocron_data::Entity;
use serde::{Deserialize, Serialize};

/// A user account as exposed over HTTP. The password hash is never loaded
/// into this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl Entity for User {
    type Id = i64;

    fn table_name() -> &'static str {
        "user"
    }

    fn display_name() -> &'static str {
        "User"
    }

    fn id_column() -> &'static str {
        "id"
    }

    fn columns() -> &'static [&'static str] {
        &["id", "username", "email"]
    }

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[derive(Deserialize, Serialize, Validate)]
pub struct NewUser {
    #[garde(length(min = 1, max = 120))]
    pub username: String,
    #[garde(length(min = 1, max = 120))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_has_no_password() {
        let user = User {
            id: 1,
            username: "luke".into(),
            email: "luke@tatooine.net".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
        assert!(json.get("password").is_none());
        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn new_user_rejects_empty_fields() {
        let empty = NewUser {
            username: String::new(),
            email: "leia@alderaan.gov".into(),
            password: "hope".into(),
        };
        assert!(empty.validate().is_err());

        let ok = NewUser {
            username: "leia".into(),
            ..empty
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn new_user_debug_redacts_password() {
        let new_user = NewUser {
            username: "han".into(),
            email: "han@falcon.space".into(),
            password: "kessel-run".into(),
        };
        let debug = format!("{new_user:?}");
        assert!(!debug.contains("kessel-run"));
    }
}
