/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Database configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use sqlx::postgres::PgSslMode;

use crate::error::DbError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Whether connections use TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsPolicy {
    Disabled,
    /// Encrypt, but accept any server certificate. Hosted databases on
    /// Render present certificates that do not chain to a public root.
    RequireUnverified,
}

impl TlsPolicy {
    /// TLS is used in production, or whenever the URL points at an external
    /// Render host.
    pub fn select(database_url: &str, deployment_env: Option<&str>) -> Self {
        let is_external = database_url.contains("render.com");
        let is_production = deployment_env == Some("production");
        if is_production || is_external {
            TlsPolicy::RequireUnverified
        } else {
            TlsPolicy::Disabled
        }
    }

    pub fn ssl_mode(self) -> PgSslMode {
        match self {
            TlsPolicy::Disabled => PgSslMode::Disable,
            TlsPolicy::RequireUnverified => PgSslMode::Require,
        }
    }
}

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    pub tls: TlsPolicy,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(database_url: &str, tls: TlsPolicy) -> Self {
        Self {
            database_url: database_url.to_string(),
            tls,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `DATABASE_URL`
    ///
    /// # Optional
    /// - `APP_ENV` / `NODE_ENV` (`"production"` in either turns on TLS)
    /// - `DB_MAX_CONNECTIONS` (default: `10`)
    pub fn from_env() -> Result<Self, DbError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|s| !s.is_empty())
            .ok_or(DbError::MissingDatabaseUrl)?;
        // Either variable saying production is enough.
        let deployment_env = ["APP_ENV", "NODE_ENV"]
            .into_iter()
            .filter_map(|key| lookup(key).filter(|s| !s.is_empty()))
            .reduce(|first, next| if next == "production" { next } else { first });
        let tls = TlsPolicy::select(&database_url, deployment_env.as_deref());

        let mut config = Self::new(&database_url, tls);
        if let Some(max) = lookup("DB_MAX_CONNECTIONS").filter(|s| !s.is_empty()) {
            config.max_connections = max
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| DbError::InvalidSetting {
                    key: "DB_MAX_CONNECTIONS",
                    reason: format!("expected a positive integer, got {max:?}"),
                })?;
        }
        Ok(config)
    }
}
