use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Raw `PV_JWT_SECRET`; a random key is generated when unset.
    pub jwt_secret: Option<String>,
    pub access_token_ttl: Duration,
    pub admin_emails: Vec<String>,
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Upper bound for `PV_ACCESS_TOKEN_TTL_MINUTES`: one year.
const MAX_TOKEN_TTL_MINUTES: u64 = 60 * 24 * 365;

fn token_ttl(minutes: u64) -> anyhow::Result<Duration> {
    if minutes == 0 {
        anyhow::bail!("PV_ACCESS_TOKEN_TTL_MINUTES must be greater than zero");
    }
    if minutes > MAX_TOKEN_TTL_MINUTES {
        anyhow::bail!(
            "PV_ACCESS_TOKEN_TTL_MINUTES must be at most {}",
            MAX_TOKEN_TTL_MINUTES
        );
    }
    let secs = minutes
        .checked_mul(60)
        .context("PV_ACCESS_TOKEN_TTL_MINUTES is too large")?;
    Ok(Duration::from_secs(secs))
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = var_or("PV_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid PV_LISTEN_ADDR")?;
        let db_path = var_or("PV_DB_PATH", "./db/app.db");
        let cors_allow = comma_list(&var_or("PV_CORS_ALLOW_ORIGINS", "*"));
        let timeout_ms: u64 = var_or("PV_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .context("Invalid PV_REQUEST_TIMEOUT_MS")?;
        let ttl_minutes: u64 = var_or("PV_ACCESS_TOKEN_TTL_MINUTES", "60")
            .parse()
            .context("Invalid PV_ACCESS_TOKEN_TTL_MINUTES")?;
        let access_token_ttl = token_ttl(ttl_minutes)?;
        let jwt_secret = std::env::var("PV_JWT_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let admin_emails = comma_list(&var_or("PV_ADMIN_EMAILS", ""));
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            jwt_secret,
            access_token_ttl,
            admin_emails,
        })
    }
}
