//! Sign In Use Case
//!
//! Verifies email + password and issues a token.

use platform::token::TokenService;
use std::sync::Arc;

use crate::domain::repository::ClientRepository;
use crate::domain::value_object::{
    client_password::{ClientPassword, RawPassword},
    email::Email,
    ids::ClientId,
};
use crate::error::{LoyaltyError, LoyaltyResult};

/// Verified against when the email is unknown, so that path costs one
/// Argon2 verification like a wrong password does. Same parameters as
/// `Argon2::default()`; no password matches it.
const DUMMY_PHC: &str = "$argon2id$v=19$m=19456,t=2,p=1$bG95YWx0eS1kdW1teS1zYQ$uqWHgmAWvznjggKMlBghrEphSBcldAIUyyJruhKcWPU";

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub struct SignInOutput {
    pub client_id: ClientId,
    pub token: String,
}

pub struct SignInUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> SignInUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    /// Unknown email and wrong password both end in `InvalidCredentials`.
    pub async fn execute(&self, input: SignInInput) -> LoyaltyResult<SignInOutput> {
        let email = Email::new(input.email).map_err(|_| LoyaltyError::InvalidCredentials)?;
        let raw_password =
            RawPassword::new(input.password).map_err(|_| LoyaltyError::InvalidCredentials)?;

        let client = self.repo.find_by_email(&email).await?;
        let stored = client.as_ref().map(|c| c.password.clone());

        let password_valid = tokio::task::spawn_blocking(move || match stored {
            Some(password) => password.verify(&raw_password),
            None => {
                ClientPassword::from_db(DUMMY_PHC).verify(&raw_password);
                false
            }
        })
        .await?;

        let client = match client {
            Some(client) if password_valid => client,
            _ => return Err(LoyaltyError::InvalidCredentials),
        };

        let token = self.tokens.issue(&client.client_id.to_string())?;

        tracing::info!(client_id = %client.client_id, "Client signed in");

        Ok(SignInOutput {
            client_id: client.client_id,
            token,
        })
    }
}
