//! Aria Storage
//!
//! `SQLite` persistence for the Aria catalog: artists, albums, tracks,
//! playlists, and play history.
//!
//! # Architecture
//!
//! - **Vertical slicing**: each feature owns its own queries and logic
//! - **Denormalized reads**: list queries attach artist/album records so
//!   API handlers never fan out extra queries
//! - **Embedded migrations**: the schema ships inside the binary
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_storage::{create_pool, run_migrations, tracks};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://aria.db").await?;
//! run_migrations(&pool).await?;
//!
//! let all = tracks::get_all(&pool).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod catalog;
mod error;
mod rows;

// Vertical slices
pub mod albums;
pub mod artists;
pub mod playlists;
pub mod recently_played;
pub mod tracks;

pub use catalog::SqliteCatalog;
pub use error::{Result, StorageError};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into the binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Called once at startup to bring the schema up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g. `sqlite://aria.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!(%database_url, "sqlite pool ready");

    Ok(pool)
}
