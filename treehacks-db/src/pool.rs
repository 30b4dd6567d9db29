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

//! Async database pool using sqlx

use std::str::FromStr;

use serde_json::Value;
use sqlx::postgres::{PgArguments, PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use tracing::{error, info};

use crate::config::DbConfig;
use crate::error::DbError;

/// A positional query parameter (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    /// SQL `NULL`, sent as a text-typed parameter. Cast it in SQL
    /// (`$1::int`) when the column is not text.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Bound as `TEXT`; Postgres will not coerce it into numeric or boolean
    /// columns without an explicit cast.
    Text(String),
    Json(Value),
}

impl QueryParam {
    fn bind_to<'q>(
        &self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            QueryParam::Null => query.bind(None::<String>),
            QueryParam::Bool(v) => query.bind(*v),
            QueryParam::Int(v) => query.bind(*v),
            QueryParam::Float(v) => query.bind(*v),
            QueryParam::Text(v) => query.bind(v.clone()),
            QueryParam::Json(v) => query.bind(sqlx::types::Json(v.clone())),
        }
    }
}

impl From<&str> for QueryParam {
    fn from(value: &str) -> Self {
        QueryParam::Text(value.to_string())
    }
}

impl From<String> for QueryParam {
    fn from(value: String) -> Self {
        QueryParam::Text(value)
    }
}

impl From<i64> for QueryParam {
    fn from(value: i64) -> Self {
        QueryParam::Int(value)
    }
}

impl From<bool> for QueryParam {
    fn from(value: bool) -> Self {
        QueryParam::Bool(value)
    }
}

impl From<Value> for QueryParam {
    fn from(value: Value) -> Self {
        QueryParam::Json(value)
    }
}

impl<T: Into<QueryParam>> From<Option<T>> for QueryParam {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(QueryParam::Null)
    }
}

/// Shared handle to the connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build the pool without opening a connection. Connections are made on
    /// first use, so an unreachable database does not stop the process.
    pub fn connect_lazy(config: &DbConfig) -> Result<Self, DbError> {
        let options = PgConnectOptions::from_str(&config.database_url)
            .map_err(|e| DbError::InvalidDatabaseUrl(e.to_string()))?
            .ssl_mode(config.tls.ssl_mode());

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);

        info!(
            "Database pool configured (tls: {:?}, max connections: {})",
            config.tls, config.max_connections
        );
        Ok(Self { pool })
    }

    /// Configure from `DATABASE_URL` and friends; see [`DbConfig::from_env`].
    pub fn from_env() -> Result<Self, DbError> {
        Self::connect_lazy(&DbConfig::from_env()?)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run `text` with positional `params` and return every row.
    ///
    /// Failures are logged here and returned; the pool stays usable for
    /// later queries.
    ///
    /// [`QueryParam::Null`] and [`QueryParam::Text`] bind as `TEXT`, so a
    /// placeholder compared against or stored into a non-text column needs a
    /// cast, e.g. `WHERE id = $1::int`.
    pub async fn query(&self, text: &str, params: &[QueryParam]) -> Result<Vec<PgRow>, DbError> {
        let mut query = sqlx::query(text);
        for param in params {
            query = param.bind_to(query);
        }

        query.fetch_all(&self.pool).await.map_err(|e| {
            error!("Unexpected database error: {}", e);
            DbError::Query(e)
        })
    }
}
