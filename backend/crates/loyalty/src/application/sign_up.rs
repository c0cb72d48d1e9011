//! Sign Up Use Case
//!
//! Registers a client and hands back a token for it.

use platform::token::TokenService;
use std::sync::Arc;

use crate::domain::entity::client::{Client, NewClient};
use crate::domain::repository::ClientRepository;
use crate::domain::value_object::{
    client_password::{ClientPassword, RawPassword},
    email::Email,
    ids::ClientId,
};
use crate::error::{LoyaltyError, LoyaltyResult};

pub struct SignUpInput {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub image_url: String,
    pub tg_username: Option<String>,
}

pub struct SignUpOutput {
    pub client_id: ClientId,
    pub token: String,
}

pub struct SignUpUseCase<R>
where
    R: ClientRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> SignUpUseCase<R>
where
    R: ClientRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: SignUpInput) -> LoyaltyResult<SignUpOutput> {
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        let password =
            tokio::task::spawn_blocking(move || ClientPassword::from_raw(&raw_password)).await??;

        let client = Client::new(NewClient {
            name: input.name,
            surname: input.surname,
            email,
            password,
            image_url: input.image_url,
            tg_username: input.tg_username,
        });

        // Uniqueness is decided by storage, so two concurrent sign-ups with
        // one email resolve to exactly one winner.
        let stored = self.repo.create(&client).await.map_err(|e| match e {
            LoyaltyError::ConstraintViolation { .. } => LoyaltyError::AlreadyExists("Client"),
            other => other,
        })?;

        let token = self.tokens.issue(&stored.client_id.to_string())?;

        tracing::info!(client_id = %stored.client_id, "Client signed up");

        Ok(SignUpOutput {
            client_id: stored.client_id,
            token,
        })
    }
}
