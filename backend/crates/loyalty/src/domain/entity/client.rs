//! Client Entity
//!
//! A registered participant. The id doubles as the token subject.

use crate::domain::value_object::{client_password::ClientPassword, email::Email, ids::ClientId};

#[derive(Debug, Clone)]
pub struct Client {
    pub client_id: ClientId,
    pub name: String,
    pub surname: String,
    /// Unique across clients (storage constraint)
    pub email: Email,
    pub password: ClientPassword,
    pub image_url: String,
    /// Optional Telegram handle
    pub tg_username: Option<String>,
}

/// Validated sign-up data, password already hashed
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub email: Email,
    pub password: ClientPassword,
    pub image_url: String,
    pub tg_username: Option<String>,
}

/// Partial update: `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub image_url: Option<String>,
    pub tg_username: Option<String>,
}

impl Client {
    /// Assigns a fresh id.
    pub fn new(input: NewClient) -> Self {
        Self {
            client_id: ClientId::new(),
            name: input.name,
            surname: input.surname,
            email: input.email,
            password: input.password,
            image_url: input.image_url,
            tg_username: input.tg_username,
        }
    }

    pub fn apply(&mut self, patch: ClientPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(surname) = patch.surname {
            self.surname = surname;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(tg_username) = patch.tg_username {
            self.tg_username = Some(tg_username);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(NewClient {
            name: "Ada".into(),
            surname: "Lovelace".into(),
            email: Email::new("ada@example.com").unwrap(),
            password: ClientPassword::from_db("$argon2id$stub"),
            image_url: "https://img.example.com/ada.png".into(),
            tg_username: None,
        })
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        assert_ne!(client().client_id, client().client_id);
    }

    #[test]
    fn test_apply_single_field_leaves_others() {
        let mut c = client();
        let before = c.clone();

        c.apply(ClientPatch {
            surname: Some("Byron".into()),
            ..Default::default()
        });

        assert_eq!(c.surname, "Byron");
        assert_eq!(c.name, before.name);
        assert_eq!(c.image_url, before.image_url);
        assert_eq!(c.email, before.email);
        assert_eq!(c.tg_username, before.tg_username);
        assert_eq!(c.client_id, before.client_id);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut c = client();
        let before = c.clone();
        c.apply(ClientPatch::default());
        assert_eq!(c.name, before.name);
        assert_eq!(c.surname, before.surname);
        assert_eq!(c.image_url, before.image_url);
    }
}
