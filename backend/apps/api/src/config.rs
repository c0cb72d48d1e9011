//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).
//!
//! | Env Var              | Default                                        |
//! |----------------------|------------------------------------------------|
//! | `APP_HOST`           | `0.0.0.0`                                      |
//! | `APP_PORT`           | `8000`                                         |
//! | `DATABASE_URL`       | built from `DB_USER`/`DB_PASS`/`DB_HOST`/...   |
//! | `DB_MAX_CONNECTIONS` | `5`                                            |
//! | `JWT_SECRET`         | random in debug builds, required in release    |
//! | `JWT_ISSUER`         | `loyalty-backend`                              |
//! | `JWT_AUDIENCE`       | `loyalty-api`                                  |
//! | `FRONTEND_ORIGINS`   | `http://localhost:3000,http://127.0.0.1:3000`  |

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use loyalty::LoyaltyConfig;
use platform::token::{DEFAULT_AUDIENCE, DEFAULT_ISSUER, TokenSecret};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// HS256 keys shorter than the hash output are rejected.
const MIN_SECRET_BYTES: usize = 32;

const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    /// `None` means "generate one"; only allowed in debug builds.
    pub jwt_secret: Option<TokenSecret>,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    pub frontend_origins: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Builds the config from any key lookup. `allow_random_secret` is true
    /// for debug builds.
    pub fn from_lookup<F>(lookup: F, allow_random_secret: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("APP_HOST")
            .unwrap_or_else(|| "0.0.0.0".into())
            .parse()
            .context("APP_HOST must be an IP address")?;

        let port = var("APP_PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .context("APP_PORT must be a valid u16")?;

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => {
                let part = |key: &str| {
                    var(key).with_context(|| format!("{key} must be set when DATABASE_URL is not"))
                };
                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    part("DB_USER")?,
                    part("DB_PASS")?,
                    part("DB_HOST")?,
                    var("DB_PORT").unwrap_or_else(|| "5432".into()),
                    part("DB_NAME")?,
                )
            }
        };

        let db_max_connections = var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".into())
            .parse()
            .context("DB_MAX_CONNECTIONS must be a positive integer")?;

        let jwt_secret = match var("JWT_SECRET") {
            Some(encoded) => Some(decode_secret(&encoded)?),
            None if allow_random_secret => None,
            None => bail!("JWT_SECRET must be set in production"),
        };

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            jwt_secret,
            jwt_issuer: var("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.into()),
            jwt_audience: var("JWT_AUDIENCE").unwrap_or_else(|| DEFAULT_AUDIENCE.into()),
            frontend_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn loyalty_config(&self) -> LoyaltyConfig {
        let config = match &self.jwt_secret {
            Some(secret) => LoyaltyConfig::new(secret.clone()),
            None => LoyaltyConfig::development(),
        };
        config
            .with_issuer(self.jwt_issuer.clone())
            .with_audience(self.jwt_audience.clone())
    }
}

/// `JWT_SECRET` is standard base64.
fn decode_secret(encoded: &str) -> anyhow::Result<TokenSecret> {
    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .context("JWT_SECRET must be base64")?;
    if bytes.len() < MIN_SECRET_BYTES {
        bail!("JWT_SECRET must decode to at least {MIN_SECRET_BYTES} bytes");
    }
    Ok(TokenSecret::new(bytes))
}
