//! Application Configuration

use platform::token::{DEFAULT_AUDIENCE, DEFAULT_ISSUER, TokenSecret, TokenService};

/// Loyalty application configuration
#[derive(Debug, Clone)]
pub struct LoyaltyConfig {
    /// HMAC key for HS256 tokens
    pub token_secret: TokenSecret,
    /// `iss` claim issued and required
    pub token_issuer: String,
    /// `aud` claim issued and required
    pub token_audience: String,
}

impl LoyaltyConfig {
    pub fn new(token_secret: TokenSecret) -> Self {
        Self {
            token_secret,
            token_issuer: DEFAULT_ISSUER.to_string(),
            token_audience: DEFAULT_AUDIENCE.to_string(),
        }
    }

    /// Config with a random token secret; tokens die with the process.
    pub fn with_random_secret() -> Self {
        Self::new(TokenSecret::random())
    }

    /// Create config for development
    pub fn development() -> Self {
        tracing::warn!("Using a random token secret; issued tokens will not survive a restart");
        Self::with_random_secret()
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.token_issuer = issuer.into();
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.token_audience = audience.into();
        self
    }

    pub fn token_service(&self) -> TokenService {
        TokenService::new(
            self.token_secret.as_bytes(),
            self.token_issuer.clone(),
            self.token_audience.clone(),
        )
    }
}
