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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,

    #[error("Database url is in a bad format: {0}")]
    InvalidDatabaseUrl(String),

    #[error("{key} is invalid: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),
}
