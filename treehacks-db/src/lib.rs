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

//! PostgreSQL pool wrapper for the treehacks backend.
//!
//! ```no_run
//! use treehacks_db::{Database, QueryParam};
//!
//! # async fn example() -> Result<(), treehacks_db::DbError> {
//! let db = Database::from_env()?;
//! let rows = db
//!     .query("SELECT * FROM reminders WHERE user_id = $1", &[QueryParam::Int(42)])
//!     .await?;
//! println!("{} rows", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod pool;

pub use config::{DbConfig, TlsPolicy};
pub use error::DbError;
pub use pool::{Database, QueryParam};
pub use sqlx::postgres::PgRow;
