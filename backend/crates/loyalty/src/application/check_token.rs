//! Check Token Use Case
//!
//! Resolves a bearer token to the client it was issued for.

use platform::token::TokenService;
use std::sync::Arc;

use crate::domain::value_object::ids::ClientId;
use crate::error::{LoyaltyError, LoyaltyResult};

pub struct CheckTokenUseCase {
    tokens: Arc<TokenService>,
}

impl CheckTokenUseCase {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Signature, lifetime, issuer and audience are all checked. The
    /// client is not looked up: a token outlives a deleted client.
    pub fn execute(&self, token: &str) -> LoyaltyResult<ClientId> {
        let claims = self.tokens.verify(token)?;

        claims
            .sub
            .parse::<ClientId>()
            .map_err(|_| LoyaltyError::InvalidToken("subject is not a client id".into()))
    }
}
