use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        let jwt_expiration_hours = std::env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".into())
            .parse()
            .context("JWT_EXPIRATION_HOURS must be a positive integer")?;

        Ok(Self {
            jwt_secret,
            jwt_expiration_hours,
        })
    }
}
